//! Data model for the constitution site.
//!
//! Everything here is baked into the build: content is defined once in
//! [`crate::content`] and never mutated. Types are designed to be:
//!
//! - **Copy/Clone-friendly** - components take them by value
//! - **Serializable** - the structured-data block reuses them via serde
//! - **Closed** - the tab set is an enum, not an open string namespace
//!
//! # Example
//!
//! ```rust
//! use dominion_ui::types::{RankEntry, TabId};
//!
//! let entry = RankEntry::parse("Sentinels – Mid-level Guardians");
//! assert_eq!(entry.title, "Sentinels");
//!
//! assert_eq!(TabId::from_id("hierarchy"), Some(TabId::Hierarchy));
//! assert_eq!(TabId::from_id("senate"), None);
//! ```

use serde::Serialize;

use crate::components::icons::{ICON_BOOK, ICON_GLOBE, ICON_LIGHTNING, ICON_SHIELD};

/// Delimiter separating a rank's title from its description in raw rank
/// strings: an en-dash with surrounding spaces.
pub const RANK_DELIMITER: &str = " – ";

/// One titled paragraph of constitutional text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section heading
    pub title: &'static str,
    /// Body text
    pub content: &'static str,
}

/// A constitution article: a titled, icon-tagged run of sections.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Article {
    /// Article heading, e.g. "Article I – Core Principles"
    pub title: &'static str,
    /// SVG path data for the header icon
    #[serde(skip)]
    pub icon: &'static str,
    /// Ordered sections of the article
    pub sections: &'static [Section],
}

/// A hierarchy order: a titled, described, ordered list of raw rank strings.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RankOrder {
    /// Order name, e.g. "The Guardian Order"
    pub title: &'static str,
    /// SVG path data for the header icon
    #[serde(skip)]
    pub icon: &'static str,
    /// One-line description under the title
    pub description: &'static str,
    /// Raw `"Title – Description"` strings, highest rank first
    pub ranks: &'static [&'static str],
}

/// A parsed rank row: title plus optional description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankEntry<'a> {
    /// Rank title (always present)
    pub title: &'a str,
    /// Description; empty when the raw string carries no delimiter
    pub description: &'a str,
}

impl<'a> RankEntry<'a> {
    /// Split a raw rank string on the *first* [`RANK_DELIMITER`] occurrence.
    ///
    /// Further delimiters stay inside the description, so `"A – B – C"`
    /// parses as `("A", "B – C")`. A string with no delimiter becomes a
    /// title-only entry.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(RANK_DELIMITER) {
            Some((title, description)) => Self { title, description },
            None => Self {
                title: raw,
                description: "",
            },
        }
    }
}

/// One overview card: an institution of the Dominion at a glance.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct OverviewCard {
    /// Institution name
    pub title: &'static str,
    /// SVG path data for the header icon
    #[serde(skip)]
    pub icon: &'static str,
    /// Subtitle under the name
    pub subtitle: &'static str,
    /// Summary paragraph
    pub body: &'static str,
}

/// One branch of government: a titled bullet list.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Branch {
    /// Branch name
    pub title: &'static str,
    /// Bullet items
    pub items: &'static [&'static str],
}

/// One principles card: a short titled run of sections.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PrincipleCard {
    /// Card heading
    pub title: &'static str,
    /// Ordered sections, divider-separated like article sections
    pub sections: &'static [Section],
}

/// Identifier of one content panel. The set is fixed; nothing extends it at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    /// Government overview cards
    Overview,
    /// The six constitution articles
    Constitution,
    /// Orders & ranks listings
    Hierarchy,
    /// Core principles cards
    Principles,
}

impl TabId {
    /// All tabs, in display order. `ALL[0]` is the default tab.
    pub const ALL: [TabId; 4] = [
        TabId::Overview,
        TabId::Constitution,
        TabId::Hierarchy,
        TabId::Principles,
    ];

    /// Stable string id, used for DOM ids and logging.
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::Constitution => "constitution",
            TabId::Hierarchy => "hierarchy",
            TabId::Principles => "principles",
        }
    }

    /// Reverse of [`TabId::as_str`]. Unknown ids map to `None`; callers
    /// render no panel for them rather than failing.
    pub fn from_id(id: &str) -> Option<TabId> {
        TabId::ALL.into_iter().find(|tab| tab.as_str() == id)
    }

    /// Full navigation label.
    pub fn label(self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Constitution => "Constitution",
            TabId::Hierarchy => "Orders & Ranks",
            TabId::Principles => "Core Principles",
        }
    }

    /// Compact label for narrow viewports.
    pub fn short_label(self) -> &'static str {
        match self {
            TabId::Overview => "Info",
            TabId::Constitution => "Law",
            TabId::Hierarchy => "Orders",
            TabId::Principles => "Principles",
        }
    }

    /// SVG path data for the tab strip icon.
    pub fn icon(self) -> &'static str {
        match self {
            TabId::Overview => ICON_GLOBE,
            TabId::Constitution => ICON_BOOK,
            TabId::Hierarchy => ICON_SHIELD,
            TabId::Principles => ICON_LIGHTNING,
        }
    }
}

impl Default for TabId {
    fn default() -> Self {
        TabId::Overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rank_splits_on_first_delimiter_only() {
        let entry = RankEntry::parse("A – B – C");
        assert_eq!(entry.title, "A");
        assert_eq!(entry.description, "B – C");
    }

    #[test]
    fn rank_without_delimiter_is_title_only() {
        let entry = RankEntry::parse("SoloTitle");
        assert_eq!(entry.title, "SoloTitle");
        assert_eq!(entry.description, "");
    }

    #[test]
    fn rank_ignores_plain_hyphen() {
        // Only the spaced en-dash delimits; hyphenated words stay intact.
        let entry = RankEntry::parse("Vice-Admiral – Fleet second-in-command");
        assert_eq!(entry.title, "Vice-Admiral");
        assert_eq!(entry.description, "Fleet second-in-command");
    }

    #[test]
    fn tab_id_round_trips_through_strings() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_id(tab.as_str()), Some(tab));
        }
    }

    #[test]
    fn unknown_tab_id_is_none() {
        assert_eq!(TabId::from_id("senate"), None);
        assert_eq!(TabId::from_id(""), None);
        assert_eq!(TabId::from_id("Overview"), None); // ids are lowercase
    }

    #[test]
    fn default_tab_is_first_in_display_order() {
        assert_eq!(TabId::default(), TabId::ALL[0]);
    }
}

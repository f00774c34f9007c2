//! Hierarchy order rendering: numbered rank rows parsed from raw strings.

use leptos::prelude::*;

use super::card::{CardVariant, DominionCard};
use crate::types::RankEntry;

/// Reveal stagger between adjacent rank rows, display-only.
const RANK_STAGGER_MS: u32 = 100;

/// A hierarchy card: each raw `"Title – Description"` string becomes a
/// numbered row. Splitting happens on the first delimiter occurrence only,
/// so descriptions may themselves contain the delimiter. A string without
/// a delimiter degrades to a title-only row.
#[component]
pub fn HierarchySection(
    /// Order name
    #[prop(into)]
    title: String,
    /// SVG path data for the header icon
    icon: &'static str,
    /// One-line description under the title
    #[prop(into)]
    description: String,
    /// Raw rank strings, highest rank first; empty input renders an empty list
    ranks: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <DominionCard title=title icon=icon variant=CardVariant::Interactive>
            <p class="order-description">{description}</p>
            <ol class="rank-list">
                {ranks
                    .into_iter()
                    .enumerate()
                    .map(|(index, raw)| {
                        let entry = RankEntry::parse(raw);
                        let stagger = index as u32 * RANK_STAGGER_MS;
                        let style = (stagger > 0).then(|| format!("animation-delay: {stagger}ms"));
                        view! {
                            <li class="rank-row reveal" style=style>
                                <span class="rank-number">{index + 1}</span>
                                <div class="rank-text">
                                    <h5 class="rank-title">{entry.title}</h5>
                                    {(!entry.description.is_empty()).then(|| view! {
                                        <p class="rank-description">{entry.description}</p>
                                    })}
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </DominionCard>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::icons::ICON_SHIELD;
    use leptos::tachys::view::RenderHtml;

    fn render(ranks: Vec<&'static str>) -> String {
        let section = view! {
            <HierarchySection
                title="Test Order"
                icon=ICON_SHIELD
                description="desc"
                ranks=ranks
            />
        };
        section.to_html()
    }

    #[test]
    fn rows_are_numbered_in_input_order() {
        let html = render(vec![
            "Grand Master – Supreme head",
            "Sentinels – Mid-level Guardians",
        ]);
        assert_eq!(html.matches("rank-row").count(), 2);
        assert_eq!(html.matches("rank-number").count(), 2);
        assert!(html.find("Grand Master").unwrap() < html.find("Sentinels").unwrap());
    }

    #[test]
    fn multi_delimiter_description_is_not_truncated() {
        let html = render(vec!["A – B – C"]);
        // Title is "A" alone; the rest stays in the description element.
        assert!(!html.contains("A – B – C"));
        assert!(html.contains("B – C"));
        assert_eq!(html.matches("rank-description").count(), 1);
    }

    #[test]
    fn delimiterless_rank_omits_description_paragraph() {
        let html = render(vec!["SoloTitle"]);
        assert!(html.contains("SoloTitle"));
        assert_eq!(html.matches("rank-description").count(), 0);
    }

    #[test]
    fn empty_ranks_render_empty_list() {
        let html = render(vec![]);
        assert_eq!(html.matches("rank-row").count(), 0);
        assert!(html.contains("rank-list"));
    }
}

//! # dominion-ui
//!
//! Leptos components and content for the Starborn Dominion constitution
//! site: a static, single-page presentation of a fictional interstellar
//! government, organized into four tabbed panels (Overview, Constitution,
//! Orders & Ranks, Core Principles).
//!
//! The crate is renderer-agnostic: the CSR app (`landing/`) mounts the same
//! components interactively, while [`render_page`] produces the complete
//! static HTML document server-side.
//!
//! ## Architecture
//!
//! - [`types`] - data model: sections, rank entries, the closed tab set
//! - [`content`] - all page content as `const` data
//! - [`components`] - Leptos UI components
//! - [`classes`] - class-list composition with conflict resolution
//! - [`meta`] - page metadata and the structured-data block
//! - [`styles`] - the stylesheet
//!
//! ## Static export
//!
//! ```rust,no_run
//! let html = dominion_ui::render_page("https://dominion.example");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! std::fs::write("dominion.html", html).unwrap();
//! ```
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait; no reactive runtime or
//! hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![recursion_limit = "256"]

pub mod classes;
pub mod components;
pub mod content;
pub mod meta;
pub mod styles;
pub mod types;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete site to a static HTML document.
///
/// `origin` is the canonical URL baked into the structured-data block.
/// The output includes `<!DOCTYPE html>`, inline styles and all four
/// panels with the Overview tab active.
#[cfg(feature = "ssr")]
pub fn render_page(origin: &str) -> String {
    let doc = view! { <PageDocument origin=origin.to_string() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::types::TabId;

    #[test]
    fn renders_complete_document() {
        let html = render_page("https://dominion.example");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Starborn Dominion"));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("https://dominion.example"));
    }

    #[test]
    fn document_contains_every_tab_and_panel() {
        let html = render_page("https://dominion.example");

        for tab in TabId::ALL {
            assert!(html.contains(tab.label()), "missing tab {}", tab.as_str());
            assert!(
                html.contains(&format!("data-panel=\"{}\"", tab.as_str())),
                "missing panel {}",
                tab.as_str()
            );
        }
        // Only the default tab is visible in the static export
        assert_eq!(html.matches("tab-panel active").count(), 1);
    }

    #[test]
    fn document_inlines_the_stylesheet() {
        let html = render_page("https://dominion.example");
        assert!(html.contains("stellar-pulse"));
        assert!(html.contains("--stellar-400"));
    }
}

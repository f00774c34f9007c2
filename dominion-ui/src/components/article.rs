//! Constitution article rendering: titled sections separated by dividers.

use leptos::prelude::*;

use super::card::{CardVariant, DominionCard};
use crate::types::Section;

/// Milliseconds of reveal stagger between adjacent sections. Display-only;
/// section order always matches input order.
const SECTION_STAGGER_MS: u32 = 150;

/// An article card: every section gets a titled block, and a divider is
/// placed between adjacent sections (never after the last one).
#[component]
pub fn ConstitutionArticle(
    /// Article heading
    #[prop(into)]
    title: String,
    /// SVG path data for the header icon
    icon: &'static str,
    /// Ordered sections; empty input renders an empty card body
    sections: Vec<Section>,
) -> impl IntoView {
    let count = sections.len();

    view! {
        <DominionCard title=title icon=icon variant=CardVariant::Interactive>
            <div class="article-sections">
                {sections
                    .into_iter()
                    .enumerate()
                    .map(|(index, section)| {
                        let stagger = index as u32 * SECTION_STAGGER_MS;
                        let style = (stagger > 0).then(|| format!("animation-delay: {stagger}ms"));
                        view! {
                            <div class="article-section reveal" style=style>
                                <h4 class="article-section-title">{section.title}</h4>
                                <p class="article-section-body">{section.content}</p>
                                {(index + 1 < count).then(|| view! {
                                    <hr class="section-divider" />
                                })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </DominionCard>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::icons::ICON_STAR;
    use leptos::tachys::view::RenderHtml;

    fn render(sections: Vec<Section>) -> String {
        let article = view! {
            <ConstitutionArticle title="Article T" icon=ICON_STAR sections=sections />
        };
        article.to_html()
    }

    fn section(title: &'static str) -> Section {
        Section {
            title,
            content: "body",
        }
    }

    #[test]
    fn n_sections_emit_n_blocks_and_n_minus_one_dividers() {
        let html = render(vec![section("First"), section("Second"), section("Third")]);
        assert_eq!(html.matches("article-section-title").count(), 3);
        assert_eq!(html.matches("section-divider").count(), 2);

        // Input order preserved
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn single_section_has_no_divider() {
        let html = render(vec![section("Only")]);
        assert_eq!(html.matches("article-section-title").count(), 1);
        assert_eq!(html.matches("section-divider").count(), 0);
    }

    #[test]
    fn empty_sections_render_empty_body() {
        let html = render(vec![]);
        assert_eq!(html.matches("article-section-title").count(), 0);
        assert_eq!(html.matches("section-divider").count(), 0);
        assert!(html.contains("article-sections"));
    }

    #[test]
    fn stagger_grows_with_index() {
        let html = render(vec![section("A"), section("B"), section("C")]);
        assert!(!html.contains("animation-delay: 0ms"));
        assert!(html.contains("animation-delay: 150ms"));
        assert!(html.contains("animation-delay: 300ms"));
    }
}

//! Generic content card, the base container for all panels.

use leptos::prelude::*;

use super::icons::Icon;
use crate::classes::{compose, ClassSpec};

/// Visual treatment of a [`DominionCard`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Plain card with no hover or glow effects
    #[default]
    Default,
    /// Hover-highlighted card for dense listings
    Interactive,
    /// Glowing feature card for the overview grid
    Feature,
    /// Wide section card for long-form content
    Section,
}

impl CardVariant {
    fn class(self) -> ClassSpec<'static> {
        match self {
            CardVariant::Default => ClassSpec::Skip,
            CardVariant::Interactive => ClassSpec::Lit("card-interactive"),
            CardVariant::Feature => ClassSpec::Lit("card-feature"),
            CardVariant::Section => ClassSpec::Lit("constitution-section"),
        }
    }
}

/// Card container with a title, optional icon and arbitrary body content.
///
/// `reveal_delay_ms` staggers the fade-in transition; it is purely visual
/// and never affects when the body is constructed.
#[component]
pub fn DominionCard(
    /// Card heading text
    #[prop(into)]
    title: String,
    /// Optional SVG path data shown beside the title
    #[prop(optional_no_strip, into)]
    icon: Option<&'static str>,
    /// Visual treatment
    #[prop(default = CardVariant::Default)]
    variant: CardVariant,
    /// Fade-in stagger in milliseconds
    #[prop(default = 0)]
    reveal_delay_ms: u32,
    /// Additional CSS classes from the caller
    #[prop(optional)]
    class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let card_class = compose(&[ClassSpec::Lit("card reveal"), variant.class(), class.into()]);
    let style = (reveal_delay_ms > 0).then(|| format!("animation-delay: {reveal_delay_ms}ms"));

    view! {
        <article class=card_class style=style>
            <header class="card-header">
                <h3 class="card-title">
                    {icon.map(|path| view! {
                        <span class="card-icon"><Icon path=path size="24" /></span>
                    })}
                    <span class="card-title-text">{title}</span>
                </h3>
            </header>
            <div class="card-body">{children()}</div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(variant: CardVariant, icon: Option<&'static str>) -> String {
        let card = view! {
            <DominionCard title="Test Card" icon=icon variant=variant>
                <p>"body text"</p>
            </DominionCard>
        };
        card.to_html()
    }

    #[test]
    fn default_variant_has_no_variant_class() {
        let html = render(CardVariant::Default, None);
        assert!(html.contains("class=\"card reveal\""));
        assert!(html.contains("body text"));
    }

    #[test]
    fn feature_variant_adds_feature_class() {
        let html = render(CardVariant::Feature, None);
        assert!(html.contains("card-feature"));
    }

    #[test]
    fn missing_icon_omits_icon_slot() {
        let html = render(CardVariant::Default, None);
        assert!(!html.contains("card-icon"));

        let html = render(CardVariant::Default, Some(super::super::icons::ICON_CROWN));
        assert!(html.contains("card-icon"));
    }

    #[test]
    fn reveal_delay_sets_animation_delay_style() {
        let card = view! {
            <DominionCard title="Delayed" reveal_delay_ms=300>
                <p>"x"</p>
            </DominionCard>
        };
        let html = card.to_html();
        assert!(html.contains("animation-delay: 300ms"));
    }
}

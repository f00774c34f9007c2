//! Default fallback card shown by a faulted content region.

use leptos::prelude::*;

use super::card::DominionCard;
use super::icons::{Icon, ICON_RESET, ICON_WARNING};

/// "Something went wrong" panel with a manual reset action. Recovery is
/// always explicit; nothing retries on its own.
#[component]
pub fn FaultFallback(
    /// Invoked when the user asks to re-render the faulted region
    on_reset: Callback<()>,
    /// Diagnostic detail, shown only when present (development builds)
    #[prop(optional_no_strip, into)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="fault-box">
            <DominionCard title="Cosmic Disruption Detected" icon=ICON_WARNING>
                <p class="fault-message">
                    "The quantum harmonics of this section have been disrupted. "
                    "Our Guardian AIs are working to restore balance."
                </p>
                {detail.map(|detail| view! {
                    <details class="fault-detail">
                        <summary>"Technical Details"</summary>
                        <pre>{detail}</pre>
                    </details>
                })}
                <button class="fault-reset" on:click=move |_| on_reset.run(()) >
                    <Icon path=ICON_RESET size="16" />
                    "Restore Harmony"
                </button>
            </DominionCard>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn shows_reset_action() {
        let html = view! {
            <FaultFallback on_reset=Callback::new(|_| {}) />
        }
        .to_html();
        assert!(html.contains("Cosmic Disruption Detected"));
        assert!(html.contains("Restore Harmony"));
        assert!(!html.contains("fault-detail"));
    }

    #[test]
    fn detail_block_appears_when_supplied() {
        let html = view! {
            <FaultFallback on_reset=Callback::new(|_| {}) detail="boom".to_string() />
        }
        .to_html();
        assert!(html.contains("fault-detail"));
        assert!(html.contains("boom"));
    }
}

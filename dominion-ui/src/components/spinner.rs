//! Loading placeholder shown while a deferred panel mounts.

use leptos::prelude::*;

/// Spinner size presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    /// 24px ring
    Small,
    /// 32px ring
    #[default]
    Medium,
    /// 48px ring
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Animated loading ring with an optional status line.
#[component]
pub fn LoadingSpinner(
    #[prop(default = SpinnerSize::Medium)] size: SpinnerSize,
    /// Status text under the ring; empty string hides it
    #[prop(default = "Loading cosmic content...")]
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="spinner-box" role="status">
            <div class=format!("spinner {}", size.class())></div>
            {(!text.is_empty()).then(|| view! {
                <p class="spinner-text">{text}</p>
            })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_ring_and_text() {
        let html = view! { <LoadingSpinner size=SpinnerSize::Large /> }.to_html();
        assert!(html.contains("spinner-lg"));
        assert!(html.contains("Loading cosmic content..."));
    }

    #[test]
    fn empty_text_hides_status_line() {
        let html = view! { <LoadingSpinner text="" /> }.to_html();
        assert!(!html.contains("spinner-text"));
    }
}

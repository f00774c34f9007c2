//! Per-region fault isolation.
//!
//! Navigation, hero and each tab panel are wrapped separately, so a render
//! fault in one region leaves its siblings intact. Recovery is manual: the
//! fallback offers a reset that re-attempts the subtree, and a recurring
//! fault simply lands back in the fallback.

use leptos::error::Errors;
use leptos::prelude::*;

use super::fallback::FaultFallback;

/// Wrap a renderable subtree so its failures stay contained.
///
/// A caller-supplied `fallback` replaces the default panel; the default
/// shows diagnostics only in development builds.
#[component]
pub fn FaultIsolationWrapper(
    /// Region name used in the development log line
    #[prop(default = "content")]
    region: &'static str,
    /// Replacement for the default fallback panel
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <ErrorBoundary fallback={move |errors: ArcRwSignal<Errors>| {
            let detail = describe(&errors.get_untracked());
            if cfg!(debug_assertions) {
                log::error!("render fault in {region}: {detail}");
            }

            match fallback.clone() {
                Some(custom) => custom.run(),
                None => {
                    let reset = Callback::new(move |_| errors.set(Errors::default()));
                    let detail = cfg!(debug_assertions).then_some(detail);
                    view! { <FaultFallback on_reset=reset detail=detail /> }.into_any()
                }
            }
        }}>
            {children()}
        </ErrorBoundary>
    }
}

fn describe(errors: &Errors) -> String {
    errors
        .clone()
        .into_iter()
        .map(|(_, error)| error.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[derive(Clone, Copy, Debug)]
    struct HarmonicCollapse;

    impl std::fmt::Display for HarmonicCollapse {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "harmonic collapse")
        }
    }

    impl std::error::Error for HarmonicCollapse {}

    #[test]
    fn healthy_subtree_renders_children_only() {
        let html = view! {
            <FaultIsolationWrapper>
                <p>"stable content"</p>
            </FaultIsolationWrapper>
        }
        .to_html();

        assert!(html.contains("stable content"));
        assert!(!html.contains("Cosmic Disruption Detected"));
    }

    #[test]
    fn faulted_subtree_renders_the_default_fallback() {
        let html = view! {
            <FaultIsolationWrapper region="hero">
                {Err::<(), HarmonicCollapse>(HarmonicCollapse)}
            </FaultIsolationWrapper>
        }
        .to_html();

        assert!(html.contains("Cosmic Disruption Detected"));
        assert!(html.contains("Restore Harmony"));
    }

    #[test]
    fn custom_fallback_replaces_the_default_card() {
        let html = view! {
            <FaultIsolationWrapper fallback=|| view! { <p>"region offline"</p> }>
                {Err::<(), HarmonicCollapse>(HarmonicCollapse)}
            </FaultIsolationWrapper>
        }
        .to_html();

        assert!(html.contains("region offline"));
        assert!(!html.contains("Cosmic Disruption Detected"));
    }

    #[test]
    fn sibling_regions_stay_isolated() {
        let html = view! {
            <div>
                <FaultIsolationWrapper region="left">
                    {Err::<(), HarmonicCollapse>(HarmonicCollapse)}
                </FaultIsolationWrapper>
                <FaultIsolationWrapper region="right">
                    <p>"untouched sibling"</p>
                </FaultIsolationWrapper>
            </div>
        }
        .to_html();

        assert!(html.contains("Cosmic Disruption Detected"));
        assert!(html.contains("untouched sibling"));
    }
}

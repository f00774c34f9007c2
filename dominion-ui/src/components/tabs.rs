//! Tab strip and tab panel shells.
//!
//! The strip and panels share one [`TabId`] signal owned by the page root;
//! neither component owns navigation state of its own.

use leptos::prelude::*;

use super::icons::Icon;
use crate::classes::{compose, ClassSpec};
use crate::types::TabId;

/// Horizontal tab strip over the content panels. Renders one trigger per
/// [`TabId::ALL`] entry; the active trigger is highlighted from the shared
/// signal and clicks report back through `on_select`.
#[component]
pub fn TabStrip(
    /// Currently active tab
    #[prop(into)]
    active: Signal<TabId>,
    /// Invoked with the clicked tab id
    on_select: Callback<TabId>,
) -> impl IntoView {
    view! {
        <div class="tab-strip" role="tablist">
            {TabId::ALL
                .into_iter()
                .map(|tab| {
                    let class = move || {
                        compose(&[
                            ClassSpec::Lit("tab-trigger"),
                            ClassSpec::Gated("active", active.get() == tab),
                        ])
                    };
                    view! {
                        <button
                            class=class
                            role="tab"
                            data-tab=tab.as_str()
                            on:click=move |_| on_select.run(tab)
                        >
                            <Icon path=tab.icon() size="16" />
                            <span class="tab-label">{tab.label()}</span>
                            <span class="tab-label-short">{tab.short_label()}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Shell for one content panel. The panel stays in the tree once created;
/// visibility is gated by class so switching tabs never unmounts content.
#[component]
pub fn TabPanel(
    /// Tab this panel belongs to
    tab: TabId,
    /// Currently active tab
    #[prop(into)]
    active: Signal<TabId>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        compose(&[
            ClassSpec::Lit("tab-panel"),
            ClassSpec::Gated("active", active.get() == tab),
        ])
    };

    view! {
        <div class=class role="tabpanel" data-panel=tab.as_str()>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn strip_renders_all_four_triggers_with_active_highlight() {
        let active = RwSignal::new(TabId::Hierarchy);
        let strip = view! {
            <TabStrip active=active on_select=Callback::new(|_| {}) />
        };
        let html = strip.to_html();

        assert_eq!(html.matches("tab-trigger").count(), 4);
        for tab in TabId::ALL {
            assert!(html.contains(tab.label()));
            assert!(html.contains(&format!("data-tab=\"{}\"", tab.as_str())));
        }
        assert_eq!(html.matches("tab-trigger active").count(), 1);
    }

    #[test]
    fn panel_marks_only_matching_tab_active() {
        let active = RwSignal::new(TabId::Overview);
        let panels = view! {
            <div>
                <TabPanel tab=TabId::Overview active=active>
                    <p>"overview body"</p>
                </TabPanel>
                <TabPanel tab=TabId::Principles active=active>
                    <p>"principles body"</p>
                </TabPanel>
            </div>
        };
        let html = panels.to_html();

        assert_eq!(html.matches("tab-panel active").count(), 1);
        assert!(html.contains("overview body"));
        assert!(html.contains("principles body"));
    }
}

//! Fixed top navigation bar.
//!
//! The bar gains an opaque backdrop once the page scrolls past the hero's
//! top edge. Desktop widths show inline tab links; narrow widths collapse
//! them behind a menu toggle that closes on selection.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use dominion_ui::components::icons::{Icon, ICON_CROWN, ICON_LIST, ICON_X};
use dominion_ui::content::SITE_TITLE;
use dominion_ui::types::TabId;

use crate::scroll::use_scrolled_past;

const SCROLL_THRESHOLD_PX: f64 = 20.0;
const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Site navigation. Selecting a link delegates to `on_select`; the bar
/// itself holds no tab state beyond the mobile menu toggle.
#[component]
pub fn Navigation(
    /// Currently selected tab
    #[prop(into)]
    active: Signal<TabId>,
    /// Invoked with the tab a link points at
    on_select: Callback<TabId>,
) -> impl IntoView {
    let scrolled = use_scrolled_past(SCROLL_THRESHOLD_PX, SCROLL_THROTTLE_MS);
    let menu_open = RwSignal::new(false);

    let select = move |tab: TabId| {
        menu_open.set(false);
        on_select.run(tab);
    };

    view! {
        <nav
            class="nav"
            class:nav-scrolled=move || scrolled.get()
        >
            <div class="nav-inner container">
                <button class="nav-brand" on:click=move |_| scroll_to_top()>
                    <Icon path=ICON_CROWN size="28" />
                    <span class="stellar-text">{SITE_TITLE}</span>
                </button>

                <div class="nav-links">
                    {TabId::ALL
                        .iter()
                        .map(|&tab| {
                            view! {
                                <button
                                    class="nav-link"
                                    class:active=move || active.get() == tab
                                    on:click=move |_| select(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="nav-menu-toggle"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || menu_open.get()
                        fallback=|| view! { <Icon path=ICON_LIST size="24" /> }
                    >
                        <Icon path=ICON_X size="24" />
                    </Show>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    {TabId::ALL
                        .iter()
                        .map(|&tab| {
                            view! {
                                <button
                                    class="nav-link"
                                    class:active=move || active.get() == tab
                                    on:click=move |_| select(tab)
                                >
                                    <Icon path=tab.icon() size="18" />
                                    <span>{tab.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

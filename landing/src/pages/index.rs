//! The constitution page.
//!
//! Owns the selected-tab signal and wires it into the navigation bar, the
//! tab strip and the four lazily mounted panels. Each visible region sits
//! behind its own fault boundary so one broken region cannot take down the
//! rest of the page.

use leptos::prelude::*;

use dominion_ui::components::{FaultIsolationWrapper, HeroSection, TabStrip};
use dominion_ui::content::SITE_TITLE;
use dominion_ui::types::TabId;

use crate::nav::Navigation;
use crate::panels::LazyPanel;
use crate::seo::{inject_styles, SeoHead};

#[component]
pub fn Index() -> impl IntoView {
    inject_styles();

    let active = RwSignal::new(TabId::default());
    let select = Callback::new(move |tab: TabId| {
        if active.get_untracked() != tab {
            log::debug!("tab selected: {}", tab.as_str());
            active.set(tab);
        }
    });

    view! {
        <SeoHead />

        <FaultIsolationWrapper region="navigation">
            <Navigation active=active on_select=select />
        </FaultIsolationWrapper>

        <main>
            <FaultIsolationWrapper region="hero">
                <HeroSection />
            </FaultIsolationWrapper>

            <div class="content container">
                <TabStrip active=active on_select=select />

                {TabId::ALL
                    .iter()
                    .map(|&tab| {
                        view! {
                            <FaultIsolationWrapper region=tab.as_str()>
                                <LazyPanel tab=tab active=active />
                            </FaultIsolationWrapper>
                        }
                    })
                    .collect_view()}
            </div>
        </main>

        <footer class="footer">
            <p>{SITE_TITLE} " Constitutional Framework"</p>
            <p class="footer-note">"Ratified among the stars, for all sentient beings"</p>
        </footer>
    }
}

//! Root document component for the static export.
//!
//! Renders the complete HTML page: head with metadata and inline styles,
//! hero, tab strip and all four panels (Overview active). The static export
//! has no script runtime, so every panel is present in the markup and the
//! default tab is the one visible.

use leptos::prelude::*;

use super::hero::HeroSection;
use super::panels::panel_for;
use super::tabs::{TabPanel, TabStrip};
use crate::content::SITE_TITLE;
use crate::meta::{structured_data, PAGE_DESCRIPTION, PAGE_KEYWORDS, PAGE_TITLE};
use crate::styles::PAGE_CSS;
use crate::types::TabId;

/// The complete HTML document.
#[component]
pub fn PageDocument(
    /// Canonical origin used in the structured-data block
    #[prop(into)]
    origin: String,
) -> impl IntoView {
    let active = RwSignal::new(TabId::default());
    let ld_json = structured_data(&origin).to_string();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_TITLE}</title>
                <meta name="description" content=PAGE_DESCRIPTION />
                <meta name="keywords" content=PAGE_KEYWORDS />
                <style>{PAGE_CSS}</style>
                <script type="application/ld+json">{ld_json}</script>
            </head>
            <body>
                <main>
                    <HeroSection />
                    <div class="container content">
                        <TabStrip active=active on_select=Callback::new(move |tab| active.set(tab)) />
                        {TabId::ALL
                            .into_iter()
                            .map(|tab| view! {
                                <TabPanel tab=tab active=active>
                                    {panel_for(tab)}
                                </TabPanel>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </main>
                <footer class="footer">
                    <div class="container">
                        <p>{SITE_TITLE} " Constitutional Framework"</p>
                    </div>
                </footer>
            </body>
        </html>
    }
}

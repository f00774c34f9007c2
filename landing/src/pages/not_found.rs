//! Fallback for unknown paths.

use leptos::prelude::*;

use dominion_ui::components::icons::{Icon, ICON_CROWN, ICON_HOUSE};

use crate::logger::{self, NavAction};
use crate::seo::{inject_styles, SeoHead};

#[component]
pub fn NotFound(
    /// The path that failed to resolve
    path: String,
) -> impl IntoView {
    inject_styles();
    logger::navigation(&path, NavAction::Missing);

    view! {
        <SeoHead title="Sector Not Found - Starborn Dominion" />

        <main class="notfound">
            <div class="notfound-inner">
                <Icon path=ICON_CROWN size="64" class="icon-stellar" />
                <h1 class="notfound-code stellar-text">"404"</h1>
                <h2 class="notfound-title">"Sector Not Found"</h2>
                <p class="notfound-lead">
                    "These coordinates lie outside charted Dominion space."
                </p>
                <a class="notfound-home" href="/">
                    <Icon path=ICON_HOUSE size="20" />
                    <span>"Return to Dominion"</span>
                </a>
            </div>
        </main>
    }
}

// Starborn Dominion constitution site, Leptos 0.8 CSR app

use leptos::prelude::*;

mod logger;
mod nav;
mod panels;
mod route;
mod scroll;
mod seo;

mod pages;

use logger::NavAction;
use pages::{Index, NotFound};
use route::Route;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    leptos::mount::mount_to_body(App);
}

/// Page dispatch. Navigation state lives in memory only, so every load
/// starts at the default tab; the path decides between the page and the
/// not-found fallback.
#[component]
fn App() -> impl IntoView {
    let path = window()
        .location()
        .pathname()
        .unwrap_or_else(|_| String::from("/"));

    match Route::from_path(&path) {
        Route::Home => {
            logger::navigation(&path, NavAction::Visit);
            view! { <Index /> }.into_any()
        }
        Route::NotFound => view! { <NotFound path=path /> }.into_any(),
    }
}

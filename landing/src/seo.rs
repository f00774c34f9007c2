//! Document-head side effects: title, meta tags, structured data, styles.
//!
//! The head is treated as a sink: tags are created on first write and
//! updated in place afterwards, so re-running with new inputs never
//! duplicates a tag.

use leptos::prelude::*;
use web_sys::Document;

use dominion_ui::meta::{
    structured_data, OG_SITE_NAME, OG_TYPE, PAGE_AUTHOR, PAGE_DESCRIPTION, PAGE_KEYWORDS,
    PAGE_TITLE,
};
use dominion_ui::styles::PAGE_CSS;

const STYLE_ID: &str = "dominion-style";

/// Applies page metadata to the live document head. Renders nothing.
#[component]
pub fn SeoHead(
    /// Document title
    #[prop(default = PAGE_TITLE)]
    title: &'static str,
    /// Meta description
    #[prop(default = PAGE_DESCRIPTION)]
    description: &'static str,
) -> impl IntoView {
    Effect::new(move |_| {
        let doc = document();
        doc.set_title(title);

        upsert_meta(&doc, "name", "description", description);
        upsert_meta(&doc, "name", "keywords", PAGE_KEYWORDS);
        upsert_meta(&doc, "name", "author", PAGE_AUTHOR);

        upsert_meta(&doc, "property", "og:title", title);
        upsert_meta(&doc, "property", "og:description", description);
        upsert_meta(&doc, "property", "og:type", OG_TYPE);
        upsert_meta(&doc, "property", "og:site_name", OG_SITE_NAME);

        upsert_meta(&doc, "name", "twitter:card", "summary_large_image");
        upsert_meta(&doc, "name", "twitter:title", title);
        upsert_meta(&doc, "name", "twitter:description", description);

        upsert_structured_data(&doc);
    });
}

/// Inject the stylesheet into the head once. Safe to call again; the
/// existing style element is reused.
pub fn inject_styles() {
    let doc = document();
    if doc
        .get_element_by_id(STYLE_ID)
        .is_some()
    {
        return;
    }
    let Some(head) = doc.head() else {
        log::warn!("document has no <head>; styles not injected");
        return;
    };
    if let Ok(style) = doc.create_element("style") {
        style.set_id(STYLE_ID);
        style.set_text_content(Some(PAGE_CSS));
        if head.append_child(&style).is_err() {
            log::warn!("failed to append stylesheet");
        }
    }
}

/// Create or update one meta tag identified by `attr="key"`.
fn upsert_meta(doc: &Document, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{attr}=\"{key}\"]");
    let existing = doc.query_selector(&selector).ok().flatten();

    let tag = match existing {
        Some(tag) => tag,
        None => {
            let Ok(tag) = doc.create_element("meta") else {
                return;
            };
            if tag.set_attribute(attr, key).is_err() {
                return;
            }
            match doc.head() {
                Some(head) if head.append_child(&tag).is_ok() => tag,
                _ => return,
            }
        }
    };

    if tag.set_attribute("content", content).is_err() {
        log::debug!("could not set meta {key}");
    }
}

/// Create or update the single JSON-LD script describing the site.
fn upsert_structured_data(doc: &Document) {
    let origin = window()
        .location()
        .origin()
        .unwrap_or_else(|_| String::from("/"));
    let data = structured_data(&origin).to_string();

    let existing = doc
        .query_selector("script[type=\"application/ld+json\"]")
        .ok()
        .flatten();

    let script = match existing {
        Some(script) => script,
        None => {
            let Ok(script) = doc.create_element("script") else {
                return;
            };
            if script.set_attribute("type", "application/ld+json").is_err() {
                return;
            }
            match doc.head() {
                Some(head) if head.append_child(&script).is_ok() => script,
                _ => return,
            }
        }
    };

    script.set_text_content(Some(&data));
}

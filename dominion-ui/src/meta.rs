//! Page metadata: titles, descriptions and the structured-data block.
//!
//! The CSR app applies these to the live document head; the static export
//! bakes them into the rendered `<head>`.

use serde_json::{json, Value};

/// Document title.
pub const PAGE_TITLE: &str = "Starborn Dominion - Constitutional Framework";

/// Meta description, also reused by the hero.
pub const PAGE_DESCRIPTION: &str = "A post-Earth civilization founded on balanced power, \
merit-based leadership, and universal rights for all sentient beings.";

/// Meta keywords.
pub const PAGE_KEYWORDS: &str =
    "constitution, governance, space civilization, political framework, starborn dominion";

/// `author` / publisher identity.
pub const PAGE_AUTHOR: &str = "Starborn Dominion Constitutional Assembly";

/// Open Graph site name.
pub const OG_SITE_NAME: &str = "Starborn Dominion";

/// Open Graph object type.
pub const OG_TYPE: &str = "website";

/// Build the schema.org JSON-LD block describing the site.
///
/// `url` is the page origin; the CSR app reads it from the live location,
/// the static export passes the canonical origin.
pub fn structured_data(url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": OG_SITE_NAME,
        "description": PAGE_DESCRIPTION,
        "url": url,
        "author": {
            "@type": "Organization",
            "name": PAGE_AUTHOR,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn structured_data_carries_identity_and_url() {
        let data = structured_data("https://dominion.example");
        assert_eq!(data["@type"], "WebSite");
        assert_eq!(data["url"], "https://dominion.example");
        assert_eq!(data["author"]["name"], PAGE_AUTHOR);
    }

    #[test]
    fn structured_data_serializes_to_one_json_object() {
        let text = structured_data("https://dominion.example").to_string();
        assert!(text.starts_with('{') && text.ends_with('}'));
        assert!(text.contains("schema.org"));
    }
}

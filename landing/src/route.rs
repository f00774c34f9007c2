//! Path dispatch for the single-page site.
//!
//! There is exactly one page; everything else is the not-found fallback.
//! Tab selection is in-memory state, never reflected in the URL.

/// Where a path leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// The constitution page
    Home,
    /// Unknown coordinates
    NotFound,
}

impl Route {
    /// Resolve a location pathname. Only the root (and the static export
    /// filename servers may expose) counts as home.
    pub fn from_path(path: &str) -> Route {
        match path {
            "" | "/" | "/index.html" => Route::Home,
            _ => Route::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_paths_resolve_home() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/index.html"), Route::Home);
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::from_path("/senate"), Route::NotFound);
        assert_eq!(Route::from_path("/constitution"), Route::NotFound);
        assert_eq!(Route::from_path("/index.htm"), Route::NotFound);
    }
}

//! Browser-console logging.
//!
//! Development builds log down to debug level; release builds only surface
//! warnings and errors. Navigation events get their own helper so visits
//! and misses land at the right level.

/// Kind of navigation event being recorded.
#[derive(Clone, Copy, Debug)]
pub enum NavAction {
    /// Normal page or tab visit
    Visit,
    /// Unknown path, routed to the not-found view
    Missing,
}

/// Install the console logger. Called once at startup; a second call is a
/// no-op.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);
}

/// Record a navigation event. Misses are warnings; visits are info and
/// therefore invisible in release builds.
pub fn navigation(path: &str, action: NavAction) {
    match action {
        NavAction::Visit => log::info!("navigation visit: {path}"),
        NavAction::Missing => log::warn!("navigation 404: {path}"),
    }
}

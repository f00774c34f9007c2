//! Inline SVG icon components.
//!
//! The site ships its own minimal glyph set as SVG path data so pages render
//! offline with no icon font or external asset. All glyphs live on a
//! 256x256 viewBox and inherit `currentColor`.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CROWN size="24" class="icon-stellar" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

// =============================================================================
// Glyphs
// =============================================================================

/// Imperial crown
pub const ICON_CROWN: &str = "M32,88L80,128L128,56L176,128L224,88L208,176H48ZM48,192H208V212H48Z";

/// Five-point star
pub const ICON_STAR: &str = "M128,24L156,96L232,100L172,148L192,224L128,180L64,224L84,148L24,100L100,96Z";

/// Guardian shield
pub const ICON_SHIELD: &str = "M128,24L216,56V120C216,180,180,220,128,240C76,220,40,180,40,120V56ZM128,44L60,69V120C60,168,88,202,128,220C168,202,196,168,196,120V69Z";

/// Council members (two figures)
pub const ICON_USERS: &str = "M88,60a36,36,0,1,0,36,36A36,36,0,0,0,88,60Zm0,88c-40,0-64,24-68,60H156C152,172,128,148,88,148Zm88-76a28,28,0,1,0,28,28A28,28,0,0,0,176,72Zm8,84c-8,0-15,1-21,4c17,12,28,30,31,52h42C236,180,214,156,184,156Z";

/// Senate gavel
pub const ICON_GAVEL: &str = "M120,32L168,80L88,160L40,112ZM150,98L224,172L196,200L122,126ZM32,192H144V216H32Z";

/// Globe with equator line
pub const ICON_GLOBE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,16a88,88,0,1,1-88,88A88.1,88.1,0,0,1,128,40Zm-88,80H216v16H40Zm88-80c22,22,34,54,34,88s-12,66-34,88c-22-22-34-54-34-88S106,62,128,40Z";

/// Open book
pub const ICON_BOOK: &str = "M48,40H120a16,16,0,0,1,16,16V216a24,24,0,0,0-24-24H48ZM208,40H136a16,16,0,0,0-16,16V216a24,24,0,0,1,24-24h64Z";

/// Lightning bolt
pub const ICON_LIGHTNING: &str = "M152,16L56,144H112L96,240L200,104H140Z";

/// Warning triangle
pub const ICON_WARNING: &str = "M128,24L240,216H16ZM120,104h16v56h-16ZM120,176h16v16h-16Z";

/// Counter-clockwise reset arrow
pub const ICON_RESET: &str = "M128,40A88,88,0,1,1,40,128H56A72,72,0,1,0,128,56V92L76,50,128,8Z";

/// Home
pub const ICON_HOUSE: &str = "M128,32L232,120H200V216H144V160H112V216H56V120H24Z";

/// Menu bars
pub const ICON_LIST: &str = "M32,60H224V76H32ZM32,120H224V136H32ZM32,180H224V196H32Z";

/// Close cross
pub const ICON_X: &str = "M205,62L194,51L128,117L62,51L51,62L117,128L51,194L62,205L128,139L194,205L205,194L139,128Z";

/// Ranger badge (medal)
pub const ICON_BADGE: &str = "M128,24a72,72,0,1,0,72,72A72,72,0,0,0,128,24Zm0,120a48,48,0,1,1,48-48A48.05,48.05,0,0,1,128,144Zm-40,36L72,240l56-28,56,28-16-60Z";

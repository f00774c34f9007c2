//! Leptos UI components for the constitution site.
//!
//! Each component is a `#[component]` function; they compose into the page
//! like this:
//!
//! ```text
//! PageDocument (static export) / Index page (CSR app)
//! ├── HeroSection
//! ├── TabStrip
//! └── TabPanel (one per TabId)
//!     ├── OverviewPanel
//!     │   └── DominionCard (feature + section variants)
//!     ├── ConstitutionPanel
//!     │   └── ConstitutionArticle → DominionCard
//!     ├── HierarchyPanel
//!     │   └── HierarchySection → DominionCard
//!     └── PrinciplesPanel
//!         └── DominionCard
//! ```
//!
//! `LoadingSpinner`, `FaultIsolationWrapper` and `FaultFallback` are
//! support views used by the CSR app for deferred mounting and fault
//! isolation.

mod article;
mod boundary;
mod card;
mod document;
mod fallback;
mod hero;
mod hierarchy;
pub mod icons;
mod panels;
mod spinner;
mod tabs;

pub use article::ConstitutionArticle;
pub use boundary::FaultIsolationWrapper;
pub use card::{CardVariant, DominionCard};
pub use document::PageDocument;
pub use fallback::FaultFallback;
pub use hero::HeroSection;
pub use hierarchy::HierarchySection;
pub use icons::Icon;
pub use panels::{
    panel_for, ConstitutionPanel, HierarchyPanel, OverviewPanel, PrinciplesPanel,
};
pub use spinner::{LoadingSpinner, SpinnerSize};
pub use tabs::{TabPanel, TabStrip};

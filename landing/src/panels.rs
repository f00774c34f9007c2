//! Deferred tab panel mounting.
//!
//! Only the initially active panel is built up front. The others mount the
//! first time they are selected: a spinner fills the panel for one deferred
//! tick, then the real content takes over and stays mounted, so switching
//! back is instant and panel state survives tab changes.

use std::time::Duration;

use leptos::prelude::*;

use dominion_ui::components::{panel_for, LoadingSpinner, SpinnerSize, TabPanel};
use dominion_ui::types::TabId;

/// Mount lifecycle of one panel. Transitions only move forward; once
/// mounted, a panel never returns to the spinner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    /// Never selected; nothing constructed
    Dormant,
    /// First selection seen; spinner showing until the deferred mount fires
    Loading,
    /// Content constructed and kept in the tree
    Mounted,
}

impl PanelPhase {
    /// Starting phase: initially active panels mount immediately, the rest
    /// wait for their first selection.
    pub fn initial(active: bool) -> Self {
        if active {
            PanelPhase::Mounted
        } else {
            PanelPhase::Dormant
        }
    }

    /// Record a selection of this panel's tab. Returns true when a deferred
    /// mount must be scheduled; repeat selections and revisits return false.
    pub fn on_select(&mut self) -> bool {
        match self {
            PanelPhase::Dormant => {
                *self = PanelPhase::Loading;
                true
            }
            PanelPhase::Loading | PanelPhase::Mounted => false,
        }
    }

    /// The scheduled mount fired.
    pub fn finish_mount(&mut self) {
        if *self == PanelPhase::Loading {
            *self = PanelPhase::Mounted;
        }
    }

    /// Whether the real content is in the tree (vs the spinner).
    pub fn content_mounted(self) -> bool {
        self == PanelPhase::Mounted
    }
}

/// One tab panel whose content mounts on first selection.
#[component]
pub fn LazyPanel(
    /// Which tab this panel belongs to
    tab: TabId,
    /// Currently selected tab
    #[prop(into)]
    active: Signal<TabId>,
) -> impl IntoView {
    let phase = RwSignal::new(PanelPhase::initial(active.get_untracked() == tab));

    Effect::new(move |_| {
        if active.get() != tab {
            return;
        }
        let mut next = phase.get_untracked();
        if next.on_select() {
            phase.set(next);
            // One deferred tick so the spinner paints before the panel mounts
            set_timeout(
                move || phase.update(|phase| phase.finish_mount()),
                Duration::ZERO,
            );
        }
    });

    view! {
        <TabPanel tab=tab active=active>
            <Show
                when=move || phase.get().content_mounted()
                fallback=|| {
                    view! { <LoadingSpinner size=SpinnerSize::Large /> }
                }
            >
                {move || panel_for(tab)}
            </Show>
        </TabPanel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initially_active_panel_mounts_without_a_spinner() {
        let phase = PanelPhase::initial(true);
        assert!(phase.content_mounted());
    }

    #[test]
    fn first_selection_schedules_exactly_one_deferred_mount() {
        let mut phase = PanelPhase::initial(false);
        assert!(!phase.content_mounted());

        assert!(phase.on_select());
        assert_eq!(phase, PanelPhase::Loading);
        // A second selection during the loading tick schedules nothing
        assert!(!phase.on_select());
    }

    #[test]
    fn revisit_never_reshows_the_spinner() {
        let mut phase = PanelPhase::initial(false);
        phase.on_select();
        phase.finish_mount();
        assert!(phase.content_mounted());

        // Leaving and coming back stays mounted, with no new schedule
        assert!(!phase.on_select());
        assert!(phase.content_mounted());
    }

    #[test]
    fn stray_mount_tick_leaves_a_dormant_panel_dormant() {
        let mut phase = PanelPhase::initial(false);
        phase.finish_mount();
        assert_eq!(phase, PanelPhase::Dormant);
    }
}

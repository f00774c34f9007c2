//! Throttled scroll-position signal for the navigation backdrop.
//!
//! Scroll events fire far more often than the backdrop needs to change, so
//! recomputation is gated: at most one update per delay window, with a
//! single trailing update so the final position of a burst is never lost.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

/// What to do with an incoming raw event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateDecision {
    /// Recompute immediately; the window has elapsed.
    RunNow,
    /// Schedule one trailing recomputation after `remaining_ms`, replacing
    /// any previously scheduled one.
    Defer {
        /// Milliseconds left in the current window
        remaining_ms: f64,
    },
}

/// Pure throttle decision logic. Timers and clocks stay outside so the
/// gate can be driven directly in tests.
#[derive(Clone, Debug)]
pub struct ThrottleGate {
    delay_ms: f64,
    last_run: Option<f64>,
}

impl ThrottleGate {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            last_run: None,
        }
    }

    /// Decide for a raw event arriving at `now_ms`. A `RunNow` decision
    /// records the run; a `Defer` leaves the window untouched.
    pub fn on_event(&mut self, now_ms: f64) -> GateDecision {
        match self.last_run {
            Some(last) if now_ms - last <= self.delay_ms => GateDecision::Defer {
                remaining_ms: self.delay_ms - (now_ms - last),
            },
            _ => {
                self.last_run = Some(now_ms);
                GateDecision::RunNow
            }
        }
    }

    /// Record that the trailing recomputation fired at `now_ms`.
    pub fn trailing_fired(&mut self, now_ms: f64) {
        self.last_run = Some(now_ms);
    }
}

/// True once the window has scrolled past `threshold` pixels, recomputed
/// at most once per `delay_ms`. Listener and any pending trailing timer
/// are cleaned up with the owning scope.
pub fn use_scrolled_past(threshold: f64, delay_ms: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    let recompute = move || {
        let past = window().scroll_y().map(|y| y > threshold).unwrap_or(false);
        set_scrolled.set(past);
    };
    recompute();

    let gate = Rc::new(RefCell::new(ThrottleGate::new(delay_ms)));
    let pending: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));

    let listener = {
        let gate = Rc::clone(&gate);
        let pending = Rc::clone(&pending);
        window_event_listener(ev::scroll, move |_| {
            let now = js_sys::Date::now();
            let decision = gate.borrow_mut().on_event(now);

            // A burst keeps at most one deferred update alive
            if let Some(handle) = pending.take() {
                handle.clear();
            }

            match decision {
                GateDecision::RunNow => recompute(),
                GateDecision::Defer { remaining_ms } => {
                    let gate = Rc::clone(&gate);
                    let pending_inner = Rc::clone(&pending);
                    let fire = move || {
                        pending_inner.set(None);
                        gate.borrow_mut().trailing_fired(js_sys::Date::now());
                        recompute();
                    };
                    if let Ok(handle) =
                        set_timeout_with_handle(fire, Duration::from_millis(remaining_ms as u64))
                    {
                        pending.set(Some(handle));
                    }
                }
            }
        })
    };

    on_cleanup(move || {
        listener.remove();
        if let Some(handle) = pending.take() {
            handle.clear();
        }
    });

    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_runs_immediately() {
        let mut gate = ThrottleGate::new(16.0);
        assert_eq!(gate.on_event(0.0), GateDecision::RunNow);
    }

    #[test]
    fn burst_within_window_defers_with_remaining_time() {
        let mut gate = ThrottleGate::new(16.0);
        assert_eq!(gate.on_event(0.0), GateDecision::RunNow);
        assert_eq!(
            gate.on_event(5.0),
            GateDecision::Defer { remaining_ms: 11.0 }
        );
        assert_eq!(
            gate.on_event(10.0),
            GateDecision::Defer { remaining_ms: 6.0 }
        );
    }

    #[test]
    fn at_most_one_run_per_window_under_continuous_input() {
        let mut gate = ThrottleGate::new(16.0);
        let mut runs = 0;
        let mut t = 0.0;
        while t <= 100.0 {
            if gate.on_event(t) == GateDecision::RunNow {
                runs += 1;
            }
            t += 5.0;
        }
        // 0, then >16ms after each run: no more than one per window
        assert!(runs <= 7, "{runs} runs in 100ms with a 16ms window");
        assert!(runs >= 5);
    }

    #[test]
    fn event_after_quiet_period_runs_immediately_again() {
        let mut gate = ThrottleGate::new(16.0);
        assert_eq!(gate.on_event(0.0), GateDecision::RunNow);
        assert_eq!(gate.on_event(100.0), GateDecision::RunNow);
    }

    #[test]
    fn trailing_fire_opens_a_fresh_window() {
        let mut gate = ThrottleGate::new(16.0);
        assert_eq!(gate.on_event(0.0), GateDecision::RunNow);
        assert!(matches!(gate.on_event(10.0), GateDecision::Defer { .. }));
        gate.trailing_fired(26.0);
        // Still inside the window opened by the trailing fire
        assert!(matches!(gate.on_event(30.0), GateDecision::Defer { .. }));
        assert_eq!(gate.on_event(50.0), GateDecision::RunNow);
    }
}

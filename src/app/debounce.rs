// LogLens - app/debounce.rs
//
// Cancel-and-restart debounce timer for filter input.
//
// Expressed as an `Instant` deadline polled from the frame loop rather than
// a background timer thread: each trigger moves the deadline forward, so N
// rapid triggers within the quiet window collapse to exactly one firing
// that reflects only the final state.

use std::time::{Duration, Instant};

/// Debounce state for the filter input path.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer: the pending firing, if any, is cancelled
    /// and the deadline restarts from `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    /// Returns true exactly once per armed cycle, when the quiet period has
    /// elapsed with no further trigger.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending firing, if one is armed.
    /// Used to schedule the next repaint.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(200);

    #[test]
    fn test_does_not_fire_before_quiet_period() {
        let mut d = Debouncer::new(QUIET);
        let t0 = Instant::now();
        d.trigger(t0);
        assert!(!d.fire_if_due(t0));
        assert!(!d.fire_if_due(t0 + Duration::from_millis(199)));
    }

    #[test]
    fn test_fires_once_after_quiet_period() {
        let mut d = Debouncer::new(QUIET);
        let t0 = Instant::now();
        d.trigger(t0);
        assert!(d.fire_if_due(t0 + QUIET));
        // Already fired; stays quiet until re-armed.
        assert!(!d.fire_if_due(t0 + QUIET * 2));
    }

    #[test]
    fn test_rapid_triggers_collapse_to_one_firing() {
        let mut d = Debouncer::new(QUIET);
        let t0 = Instant::now();
        for i in 0..10 {
            d.trigger(t0 + Duration::from_millis(i * 10));
            assert!(!d.fire_if_due(t0 + Duration::from_millis(i * 10)));
        }
        // Last trigger at t0+90ms; due at t0+290ms.
        assert!(!d.fire_if_due(t0 + Duration::from_millis(289)));
        assert!(d.fire_if_due(t0 + Duration::from_millis(290)));
        assert!(!d.fire_if_due(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn test_trigger_mid_wait_extends_the_wait() {
        let mut d = Debouncer::new(QUIET);
        let t0 = Instant::now();
        d.trigger(t0);
        d.trigger(t0 + Duration::from_millis(150));
        assert!(!d.fire_if_due(t0 + Duration::from_millis(200)));
        assert!(d.fire_if_due(t0 + Duration::from_millis(350)));
    }

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut d = Debouncer::new(QUIET);
        assert!(!d.fire_if_due(Instant::now()));
        assert!(d.time_until_due(Instant::now()).is_none());
    }

    #[test]
    fn test_time_until_due_counts_down() {
        let mut d = Debouncer::new(QUIET);
        let t0 = Instant::now();
        d.trigger(t0);
        assert_eq!(d.time_until_due(t0), Some(QUIET));
        assert_eq!(
            d.time_until_due(t0 + Duration::from_millis(150)),
            Some(Duration::from_millis(50))
        );
    }
}

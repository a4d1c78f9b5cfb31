/// Ticks between automatic re-fetches. The UI drives [`RefreshCycle::tick`]
/// once per second.
pub const DEFAULT_REFRESH_INTERVAL: u32 = 10;

/// Where the auto-refresh loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    /// Auto-refresh is off: before the first fetch, or after an explicit stop.
    Idle,
    /// A batch is in flight.
    Fetching,
    /// Counting down to the next batch.
    Waiting { remaining: u32 },
}

/// The periodic-refresh loop: Idle → Fetching → Waiting → Fetching → …
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshCycle {
    interval: u32,
    phase: RefreshPhase,
}

impl RefreshCycle {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            phase: RefreshPhase::Idle,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    /// True once a fetch has started and until [`RefreshCycle::stop`].
    pub fn is_active(&self) -> bool {
        self.phase != RefreshPhase::Idle
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == RefreshPhase::Fetching
    }

    /// Ticks left in `Waiting`, for the countdown readout.
    pub fn remaining(&self) -> Option<u32> {
        match self.phase {
            RefreshPhase::Waiting { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// A batch has been dispatched.
    pub fn begin_fetch(&mut self) {
        self.phase = RefreshPhase::Fetching;
    }

    /// The in-flight batch resolved; start counting down to the next one.
    /// Ignored when the cycle was stopped while the batch was in flight.
    pub fn fetch_finished(&mut self) {
        if self.phase == RefreshPhase::Fetching {
            self.phase = RefreshPhase::Waiting {
                remaining: self.interval,
            };
        }
    }

    /// Advances the countdown by one tick. Returns `true` when the countdown
    /// ran out and a new fetch cycle is due; the phase is then already
    /// `Fetching`.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            RefreshPhase::Waiting { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.phase = RefreshPhase::Fetching;
                    true
                } else {
                    self.phase = RefreshPhase::Waiting { remaining };
                    false
                }
            }
            _ => false,
        }
    }

    /// Turns auto-refresh off. Later ticks do nothing.
    pub fn stop(&mut self) {
        self.phase = RefreshPhase::Idle;
    }
}

impl Default for RefreshCycle {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let cycle = RefreshCycle::new(10);
        assert_eq!(cycle.phase(), RefreshPhase::Idle);
        assert!(!cycle.is_active());
    }

    #[test]
    fn test_fetch_then_wait_then_fetch_again() {
        let mut cycle = RefreshCycle::new(3);
        cycle.begin_fetch();
        assert!(cycle.is_fetching());

        cycle.fetch_finished();
        assert_eq!(cycle.remaining(), Some(3));

        assert!(!cycle.tick());
        assert_eq!(cycle.remaining(), Some(2));
        assert!(!cycle.tick());
        assert!(cycle.tick());
        assert!(cycle.is_fetching());
    }

    #[test]
    fn test_exactly_one_trigger_per_interval() {
        let mut cycle = RefreshCycle::new(5);
        cycle.begin_fetch();

        let mut triggers = 0;
        for _ in 0..3 {
            cycle.fetch_finished();
            for _ in 0..5 {
                if cycle.tick() {
                    triggers += 1;
                }
            }
        }
        assert_eq!(triggers, 3);
    }

    #[test]
    fn test_ticks_do_nothing_while_fetching_or_idle() {
        let mut cycle = RefreshCycle::new(2);
        assert!(!cycle.tick());

        cycle.begin_fetch();
        assert!(!cycle.tick());
        assert!(cycle.is_fetching());
    }

    #[test]
    fn test_no_triggers_after_stop() {
        let mut cycle = RefreshCycle::new(2);
        cycle.begin_fetch();
        cycle.fetch_finished();
        cycle.stop();

        for _ in 0..10 {
            assert!(!cycle.tick());
        }
        assert_eq!(cycle.phase(), RefreshPhase::Idle);
    }

    #[test]
    fn test_late_fetch_completion_after_stop_stays_idle() {
        let mut cycle = RefreshCycle::new(2);
        cycle.begin_fetch();
        cycle.stop();
        cycle.fetch_finished();
        assert_eq!(cycle.phase(), RefreshPhase::Idle);
    }

    #[test]
    fn test_interval_floor_is_one_tick() {
        let mut cycle = RefreshCycle::new(0);
        cycle.begin_fetch();
        cycle.fetch_finished();
        assert!(cycle.tick());
    }
}

//! Auto-hide timer
//!
//! Deadline based: the owner polls it with the current instant, so the
//! event loop decides when time passes.

use std::time::{Duration, Instant};

/// One-shot timer that can be re-armed
#[derive(Debug, Clone, Copy)]
pub struct AutoHideTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AutoHideTimer {
    /// Disarmed timer with a fixed delay
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Start a fresh countdown, replacing any pending one
    pub fn arm(&mut self, now: Instant) {
        self.disarm();
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the pending countdown
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the countdown has run out at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|at| now >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_due() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::new(Duration::from_secs(6));
        assert!(!timer.is_armed());
        assert!(!timer.is_due(start + Duration::from_secs(100)));

        timer.arm(start);
        assert!(!timer.is_due(start + Duration::from_millis(5999)));
        assert!(timer.is_due(start + Duration::from_secs(6)));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::new(Duration::from_secs(6));
        timer.arm(start);
        timer.arm(start + Duration::from_secs(4));

        assert!(!timer.is_due(start + Duration::from_secs(7)));
        assert_eq!(timer.deadline(), Some(start + Duration::from_secs(10)));
    }
}

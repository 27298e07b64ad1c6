//! Frame pacing.
//!
//! Animations are time-boxed: draw a frame, wait the frame delay, stop once
//! the budget is spent. [`Pacer`] owns the clock for that loop and also
//! watches the Ctrl-C flag from [`card_term::terminal`], so every animation
//! stops within one sleep slice of an interrupt.

use std::thread;
use std::time::{Duration, Instant};

use card_term::terminal;

/// Longest uninterrupted sleep; bounds how late an interrupt is noticed.
const SLICE: Duration = Duration::from_millis(10);

/// Tracks elapsed time against an optional budget.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    start: Instant,
    budget: Option<Duration>,
}

impl Pacer {
    /// Start a clock that expires after `budget`.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
        }
    }

    /// Start a clock that never expires (iteration-counted animations).
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    /// Time since the clock started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the budget has been used up.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.budget.is_some_and(|b| self.elapsed() > b)
    }

    /// Neither expired nor interrupted.
    #[must_use]
    pub fn running(&self) -> bool {
        !terminal::interrupted() && !self.expired()
    }

    /// Sleep for `delay` in short slices, returning `false` as soon as an
    /// interrupt arrives.
    pub fn pause(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        loop {
            if terminal::interrupted() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep((deadline - now).min(SLICE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_expires() {
        let p = Pacer::new(Duration::ZERO);
        thread::sleep(Duration::from_millis(1));
        assert!(p.expired());
    }

    #[test]
    fn long_budget_is_running() {
        let p = Pacer::new(Duration::from_secs(3600));
        assert!(!p.expired());
    }

    #[test]
    fn unbounded_never_expires() {
        let p = Pacer::unbounded();
        thread::sleep(Duration::from_millis(1));
        assert!(!p.expired());
    }

    #[test]
    fn pause_waits_at_least_delay() {
        let p = Pacer::unbounded();
        let before = Instant::now();
        // Only meaningful while nothing has raised the process-wide flag.
        if p.pause(Duration::from_millis(15)) {
            assert!(before.elapsed() >= Duration::from_millis(15));
        }
    }

    #[test]
    fn zero_pause_returns_immediately() {
        let p = Pacer::unbounded();
        let before = Instant::now();
        let _ = p.pause(Duration::ZERO);
        assert!(before.elapsed() < Duration::from_millis(50));
    }
}

//! Quiet-period debouncer — delays a side effect until input settles.
//!
//! Used to gate state saves: rapid filter adjustments mark the debouncer and
//! the save runs once, after the burst, instead of on every keystroke.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending_since: None,
        }
    }

    /// Register activity; restarts the quiet period.
    pub fn mark(&mut self) {
        self.pending_since = Some(Instant::now());
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// True once the quiet period has elapsed since the last mark. Clears the
    /// pending state, so each burst fires at most once.
    pub fn ready(&mut self) -> bool {
        match self.pending_since {
            Some(since) if since.elapsed() >= self.window => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_never_ready() {
        let mut d = Debouncer::new(Duration::from_millis(10));
        assert!(!d.ready());
        assert!(!d.is_pending());
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let mut d = Debouncer::new(Duration::ZERO);
        d.mark();
        assert!(d.is_pending());
        assert!(d.ready());
        // Cleared — does not fire again until the next mark.
        assert!(!d.ready());
    }

    #[test]
    fn remark_restarts_the_window() {
        let mut d = Debouncer::new(Duration::from_secs(60));
        d.mark();
        assert!(!d.ready());
        assert!(d.is_pending());
    }
}

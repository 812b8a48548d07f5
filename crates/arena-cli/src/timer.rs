//! Typing-time display metric
//!
//! Tracks wall-clock time from when the user first starts working on a
//! solution until a run is triggered. Display only; it never affects
//! grading.

use std::time::{Duration, Instant};

/// Wall-clock timer for the typing-time metric
#[derive(Debug, Default)]
pub struct TypingTimer {
    started: Option<Instant>,
}

impl TypingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the timer; later calls are no-ops so only the first
    /// interaction counts
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Elapsed time since the first start, zero if never started
    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }

    /// Stop the timer and return the elapsed time
    pub fn stop(&mut self) -> Duration {
        let elapsed = self.elapsed();
        self.started = None;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = TypingTimer::new();
        timer.start();
        let first = timer.started;
        timer.start();
        assert_eq!(timer.started, first);
    }

    #[test]
    fn test_unstarted_timer_reports_zero() {
        let timer = TypingTimer::new();
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stop_resets() {
        let mut timer = TypingTimer::new();
        timer.start();
        let _ = timer.stop();
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }
}

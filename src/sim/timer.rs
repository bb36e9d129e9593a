//! Run stopwatch
//!
//! Measures the span between the first play round and the result screen.
//! Only two clock reads happen per game; nothing is scheduled.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    start: Option<Instant>,
    elapsed: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start instant, discarding any frozen result
    pub fn start(&mut self, now: Instant) {
        self.start = Some(now);
        self.elapsed = None;
    }

    /// Freeze the elapsed time. Later calls return the frozen value.
    ///
    /// Stopping a watch that never started yields zero.
    pub fn stop(&mut self, now: Instant) -> Duration {
        if let Some(elapsed) = self.elapsed {
            return elapsed;
        }
        let elapsed = self
            .start
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        self.elapsed = Some(elapsed);
        elapsed
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some() && self.elapsed.is_none()
    }

    /// Frozen duration, if the watch has been stopped
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.elapsed = None;
    }
}

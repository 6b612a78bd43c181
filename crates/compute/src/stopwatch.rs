use std::time::{Duration, Instant};

/// Wall-clock measurement owned by a single run.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Whole seconds, truncated, as shown in the result label.
pub fn whole_seconds(elapsed: Duration) -> u64 {
    elapsed.as_secs()
}

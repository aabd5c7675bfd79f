//! Host time adapter.
//!
//! Provides monotonic time for the game loop, measured from adapter
//! construction with `std::time::Instant`.

use std::time::Instant;

use crate::app::ports::Clock;

/// Monotonic clock starting at zero when created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        // u64 milliseconds covers far more than any process lifetime.
        self.start.elapsed().as_millis() as u64
    }
}

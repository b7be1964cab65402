//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame budget
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            last: Instant::now(),
        }
    }

    /// Block until the current frame's budget is used up
    ///
    /// Returns the wall time since the previous call (or construction).
    pub fn wait(&mut self) -> Duration {
        let deadline = self.last + self.budget;
        let now = Instant::now();
        if now < deadline {
            std::thread::sleep(deadline - now);
        }
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}

use std::time::Instant;

/// Monotonic millisecond clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`Clock::start`]. Never decreases.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Turns successive clock readings into per-frame deltas.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last_ms: u64,
}

impl FrameTimer {
    #[must_use]
    pub fn new(now_ms: u64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Returns the milliseconds since the previous call and records `now_ms`.
    pub fn delta(&mut self, now_ms: u64) -> u64 {
        let delta = now_ms.saturating_sub(self.last_ms);
        self.last_ms = self.last_ms.max(now_ms);
        delta
    }
}

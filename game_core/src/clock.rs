//! Monotonic time source and frame delta tracking

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::Time;

/// Abstract monotonic clock so the loop can be driven by tests
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Turns successive clock readings into frame deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    last: Option<Duration>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the clock. The first frame has a zero delta, and a reading that
    /// goes backwards is treated as no time passing.
    pub fn tick(&mut self, now: Duration) -> Time {
        let dt = match self.last {
            Some(last) => now.saturating_sub(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        Time::new(dt, now)
    }
}

// Time sources. The scheduler only ever reads a monotonic millisecond
// counter; wall clocks would drift playback across system clock changes.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond clock the scheduler reads once per frame.
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

/// Production clock over `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for tests and simulations. Clones share the same
/// underlying instant, so a test can hold one handle while the scheduler
/// owns the other.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock::default()
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

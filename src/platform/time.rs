//! Wall-clock time source
//!
//! Cooldowns and power-up expiries compare absolute millisecond timestamps,
//! so the driver reads time through this trait and tests can steer it.

pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch
    fn now_ms(&self) -> f64;
}

/// System clock for native builds
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: start_ms }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }

    pub fn set(&mut self, ms: f64) {
        self.now = ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

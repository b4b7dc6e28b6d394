//! Sources of the per-tick time delta

use std::time::Instant;

pub trait SimulationClock {
    /// Time delta for the next tick
    fn next_delta(&mut self) -> f64;
}

/// Constant step, the same every tick
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f64,
}

impl SimulationClock for FixedClock {
    fn next_delta(&mut self) -> f64 {
        self.dt
    }
}

/// Wall-clock step: seconds since the previous call, scaled and clamped.
/// The first call returns 0.
#[derive(Debug, Clone)]
pub struct FrameClock {
    pub time_scale: f64,
    pub max_delta: f64, // keeps a stalled frame from producing one huge step
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(time_scale: f64, max_delta: f64) -> Self {
        Self {
            time_scale,
            max_delta,
            last: None,
        }
    }
}

impl SimulationClock for FrameClock {
    fn next_delta(&mut self) -> f64 {
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f64() * self.time_scale,
            None => 0.0,
        };
        self.last = Some(now);
        dt.min(self.max_delta)
    }
}

//! High-level run settings
//!
//! How many ticks a headless run lasts and how often it reports

#[derive(Debug, Clone)]
pub struct Engine {
    pub ticks: u64, // ticks per run
    pub report_every: u64, // log a report every n ticks, 0 = only at the end
}

impl Engine {
    /// Whether tick number `tick` (1-based) should be reported
    pub fn should_report(&self, tick: u64) -> bool {
        tick == self.ticks || (self.report_every > 0 && tick % self.report_every == 0)
    }
}

//! Shared fixtures for the integration tests
//!
//! Scenario windows with known statistics, plus a monitor factory.

#![allow(dead_code)]

use spcguard_core::{MonitorConfig, ProcessMonitor};

/// Spec band of the bench rig
pub const SPEC_MIN: f64 = 30.0;
pub const SPEC_MAX: f64 = 80.0;

/// Three-point window with hand-checked limits
pub const WORKED_EXAMPLE: [f64; 3] = [35.5, 36.0, 35.8];

/// Identical readings, sigma-hat is zero
pub const FLAT_LINE: [f64; 3] = [40.0, 40.0, 40.0];

/// Monitor with the bench spec and a 60-reading window
pub fn bench_monitor() -> ProcessMonitor<60> {
    ProcessMonitor::new(MonitorConfig::new(SPEC_MIN, SPEC_MAX)).expect("bench spec is valid")
}

/// Feed every value, panicking on rejection
pub fn feed<const W: usize>(monitor: &mut ProcessMonitor<W>, values: &[f64]) {
    for &value in values {
        monitor.push(value).expect("finite reading");
    }
}

/// Deterministic noise around a level, no external RNG
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform in [-1, 1)
    pub fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }

    pub fn series(&mut self, level: f64, amplitude: f64, count: usize) -> Vec<f64> {
        (0..count).map(|_| level + amplitude * self.next_unit()).collect()
    }
}

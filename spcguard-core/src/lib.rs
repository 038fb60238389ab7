//! Core SPC engine for SpcGuard
//!
//! Streams scalar sensor readings through an individuals (I-MR) control
//! chart: bounded history, mean and sigma-hat, control and warning limits,
//! per-reading verdicts, process capability and a batch defect forecast.
//! Designed to run next to the sensor on the edge device.
//!
//! Key constraints:
//! - Runs without `std` (ESP32-class targets)
//! - No heap allocation, fixed-capacity window
//! - Every derived value recomputed from the window, never cached
//!
//! ```no_run
//! use spcguard_core::{MonitorConfig, ProcessMonitor};
//!
//! let mut monitor: ProcessMonitor = ProcessMonitor::new(MonitorConfig::new(30.0, 80.0))?;
//!
//! // One reading per sensor poll
//! match monitor.push(42.5)? {
//!     Some(verdict) if !verdict.in_spec => {}, // Part out of tolerance
//!     Some(_) => {},                           // Classified against live limits
//!     None => {},                              // Limits not established yet
//! }
//!
//! if let Some(forecast) = monitor.forecast() {
//!     let _scrap = forecast.scrap_count;
//! }
//! # Ok::<(), spcguard_core::SpcError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging, defined before the modules that use them
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod buffer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod monitor;
pub mod source;
pub mod spc;
pub mod traits;
pub mod window;

#[cfg(feature = "std")]
pub mod shared;

// Public API
pub use config::{MonitorConfig, SpecLimits};
pub use errors::{SpcError, SpcResult};
pub use monitor::{ChartSeries, ProcessMonitor, ProcessSnapshot};
pub use spc::{
    AttributeLimits, AttributeLot, CapabilitySnapshot, Classification, ControlLimits, ControlZone,
    DefectForecast,
};
pub use traits::{Reading, ReadingSource};
pub use window::SampleBuffer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

//! Error Types for the SPC Engine
//!
//! ## Design Philosophy
//!
//! The engine runs on the same constrained targets as the sensor firmware, so the
//! error type follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: two scalar payloads at most, errors are returned from `push`
//!    on every sample.
//!
//! 2. **No Heap Allocation**: no `String` payloads, messages are static.
//!
//! 3. **Copy Semantics**: errors are `Copy` so they can be logged and returned
//!    without ownership juggling.
//!
//! ## What Is *Not* an Error
//!
//! Statistical "not yet known" states are values, not errors. A window with fewer
//! than two readings has no control limits, and a window with zero observed
//! variation has no capability index or defect forecast. Those are reported as
//! `None` by the monitor. Rejected here are inputs that would corrupt the
//! window, a configuration that breaks the forecasting model, and attribute
//! data with no inspected units to divide by.
//!
//! ```rust
//! use spcguard_core::{ProcessMonitor, MonitorConfig, SpcError};
//!
//! let mut monitor: ProcessMonitor = ProcessMonitor::new(MonitorConfig::new(30.0, 80.0))?;
//!
//! match monitor.push(f64::NAN) {
//!     Err(SpcError::InvalidReading) => {
//!         // Sensor glitch - window left untouched
//!     }
//!     _ => unreachable!(),
//! }
//! assert!(monitor.buffer().is_empty());
//! # Ok::<(), SpcError>(())
//! ```

use thiserror_no_std::Error;

/// Result type for engine operations
pub type SpcResult<T> = Result<T, SpcError>;

/// Engine errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SpcError {
    /// Reading is NaN or infinite and would poison every window statistic
    #[error("Invalid reading: not a finite number")]
    InvalidReading,

    /// Specification band is empty, inverted or not finite
    #[error("Invalid specification limits: min {min} must be below max {max}")]
    InvalidSpecLimits {
        /// Configured lower specification limit
        min: f64,
        /// Configured upper specification limit
        max: f64,
    },

    /// Attribute chart calibrated from lots that inspected nothing
    #[error("Attribute chart has no inspected units")]
    NoInspectedUnits,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SpcError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidReading =>
                defmt::write!(fmt, "Invalid reading"),
            Self::InvalidSpecLimits { min, max } =>
                defmt::write!(fmt, "Spec limits [{}, {}] invalid", min, max),
            Self::NoInspectedUnits =>
                defmt::write!(fmt, "No inspected units"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_limit_message_names_both_bounds() {
        let err = SpcError::InvalidSpecLimits { min: 80.0, max: 30.0 };
        let text = format!("{}", err);
        assert!(text.contains("80"));
        assert!(text.contains("30"));
    }

    #[test]
    fn errors_are_copy_and_comparable() {
        let err = SpcError::NoInspectedUnits;
        let copy = err;
        assert_eq!(err, copy);
        assert_ne!(err, SpcError::InvalidReading);
    }
}

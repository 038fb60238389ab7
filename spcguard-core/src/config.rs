//! Engine configuration
//!
//! Specification limits are engineering tolerances handed to the engine, not
//! something it estimates. They are validated once, when the monitor is built,
//! and never change afterwards. The batch size is the only knob that can be
//! turned on a running monitor.
//!
//! ```rust
//! use spcguard_core::config::MonitorConfig;
//!
//! let config = MonitorConfig::new(30.0, 80.0).batch_size(5000);
//! let spec = config.spec_limits()?;
//! assert!(spec.contains(55.0));
//!
//! // Inverted band is rejected up front
//! assert!(MonitorConfig::new(80.0, 30.0).spec_limits().is_err());
//! # Ok::<(), spcguard_core::SpcError>(())
//! ```

use crate::{
    constants::spc::{DEFAULT_BATCH_SIZE, DEFAULT_SPEC_MAX, DEFAULT_SPEC_MIN},
    errors::{SpcError, SpcResult},
};

/// Validated engineering tolerance band
///
/// `spec_min < spec_max` and both finite, which keeps the two defect tails
/// disjoint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecLimits {
    spec_min: f64,
    spec_max: f64,
}

impl SpecLimits {
    /// Validate and build a specification band
    pub fn new(spec_min: f64, spec_max: f64) -> SpcResult<Self> {
        if !spec_min.is_finite() || !spec_max.is_finite() || spec_min >= spec_max {
            log_warn!("Rejected specification limits [{}, {}]", spec_min, spec_max);
            return Err(SpcError::InvalidSpecLimits {
                min: spec_min,
                max: spec_max,
            });
        }

        Ok(Self { spec_min, spec_max })
    }

    /// Lower specification limit
    pub fn min(&self) -> f64 {
        self.spec_min
    }

    /// Upper specification limit
    pub fn max(&self) -> f64 {
        self.spec_max
    }

    /// Width of the tolerance band
    pub fn width(&self) -> f64 {
        self.spec_max - self.spec_min
    }

    /// Inclusive containment check
    pub fn contains(&self, value: f64) -> bool {
        self.spec_min <= value && value <= self.spec_max
    }
}

impl Default for SpecLimits {
    fn default() -> Self {
        Self {
            spec_min: DEFAULT_SPEC_MIN,
            spec_max: DEFAULT_SPEC_MAX,
        }
    }
}

/// Monitor configuration as supplied by the deployment
///
/// Fields are raw so the struct can be deserialized straight from a config
/// file; [`MonitorConfig::spec_limits`] does the validation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Lower specification limit
    pub spec_min: f64,
    /// Upper specification limit
    pub spec_max: f64,
    /// Initial production batch size for the forecast
    pub batch_size: u64,
}

impl MonitorConfig {
    /// Configuration with the given spec band and the default batch size
    pub fn new(spec_min: f64, spec_max: f64) -> Self {
        Self {
            spec_min,
            spec_max,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the initial batch size
    pub fn batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Validate the spec band
    pub fn spec_limits(&self) -> SpcResult<SpecLimits> {
        SpecLimits::new(self.spec_min, self.spec_max)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SPEC_MIN, DEFAULT_SPEC_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_band() {
        let spec = SpecLimits::new(30.0, 80.0).unwrap();
        assert_eq!(spec.min(), 30.0);
        assert_eq!(spec.max(), 80.0);
        assert_eq!(spec.width(), 50.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let spec = SpecLimits::new(30.0, 80.0).unwrap();
        assert!(spec.contains(30.0));
        assert!(spec.contains(80.0));
        assert!(!spec.contains(29.999));
        assert!(!spec.contains(80.001));
    }

    #[test]
    fn empty_or_inverted_band_rejected() {
        assert_eq!(
            SpecLimits::new(50.0, 50.0),
            Err(SpcError::InvalidSpecLimits { min: 50.0, max: 50.0 })
        );
        assert!(SpecLimits::new(80.0, 30.0).is_err());
    }

    #[test]
    fn non_finite_band_rejected() {
        assert!(SpecLimits::new(f64::NAN, 80.0).is_err());
        assert!(SpecLimits::new(30.0, f64::INFINITY).is_err());
    }

    #[test]
    fn builder_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.spec_limits().unwrap(), SpecLimits::default());

        let config = MonitorConfig::new(0.0, 1.0).batch_size(42);
        assert_eq!(config.batch_size, 42);
    }
}

//! Per-reading verdicts
//!
//! Two independent questions are asked of every reading:
//!
//! 1. **Specification**: is the part inside the engineering tolerance?
//! 2. **Control**: how far from the window mean is it, in σ̂?
//!
//! ```text
//!          Critical │ Warning │   Stable   │ Warning │ Critical
//! ──────────────────┼─────────┼─────┼──────┼─────────┼──────────
//!                  LCL       LWL    x̄     UWL       UCL
//! ```
//!
//! Bands are symmetric and the comparisons strict, so a reading sitting
//! exactly on a limit belongs to the inner zone. There are no run rules and no
//! hysteresis: each reading is judged on the current limits alone.

use crate::{
    config::SpecLimits,
    constants::spc::{CONTROL_LIMIT_SIGMAS, WARNING_LIMIT_SIGMAS},
    spc::limits::ControlLimits,
};

/// Control-chart zone of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlZone {
    /// Within ±2σ̂ of the mean
    Stable,
    /// Beyond ±2σ̂ but within ±3σ̂
    Warning,
    /// Beyond ±3σ̂, special cause suspected
    Critical,
}

impl ControlZone {
    /// Short label for logs and panels
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Verdict for a single reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Reading lies within the specification band (inclusive)
    pub in_spec: bool,
    /// Zone relative to the control limits
    pub control_zone: ControlZone,
}

/// Classifies readings against limits and spec
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingClassifier;

impl ReadingClassifier {
    /// Classify one reading
    pub fn classify(value: f64, limits: &ControlLimits, spec: &SpecLimits) -> Classification {
        Classification {
            in_spec: spec.contains(value),
            control_zone: Self::zone(value, limits),
        }
    }

    /// Control zone only
    pub fn zone(value: f64, limits: &ControlLimits) -> ControlZone {
        let distance = libm::fabs(value - limits.mean);

        if distance > CONTROL_LIMIT_SIGMAS * limits.sigma_hat {
            ControlZone::Critical
        } else if distance > WARNING_LIMIT_SIGMAS * limits.sigma_hat {
            ControlZone::Warning
        } else {
            ControlZone::Stable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> SpecLimits {
        SpecLimits::new(30.0, 80.0).unwrap()
    }

    #[test]
    fn zones_by_distance() {
        let limits = ControlLimits::from_mean_sigma(50.0, 1.0);

        assert_eq!(ReadingClassifier::zone(50.0, &limits), ControlZone::Stable);
        assert_eq!(ReadingClassifier::zone(51.5, &limits), ControlZone::Stable);
        assert_eq!(ReadingClassifier::zone(52.5, &limits), ControlZone::Warning);
        assert_eq!(ReadingClassifier::zone(47.5, &limits), ControlZone::Warning);
        assert_eq!(ReadingClassifier::zone(53.5, &limits), ControlZone::Critical);
        assert_eq!(ReadingClassifier::zone(46.0, &limits), ControlZone::Critical);
    }

    #[test]
    fn limits_themselves_belong_to_inner_zone() {
        // Powers of two keep the band edges exact
        let limits = ControlLimits::from_mean_sigma(64.0, 2.0);

        assert_eq!(ReadingClassifier::zone(70.0, &limits), ControlZone::Warning);
        assert_eq!(ReadingClassifier::zone(58.0, &limits), ControlZone::Warning);
        assert_eq!(ReadingClassifier::zone(68.0, &limits), ControlZone::Stable);
    }

    #[test]
    fn spec_and_zone_are_independent() {
        // Wide spread: out of spec yet statistically unremarkable
        let limits = ControlLimits::from_mean_sigma(75.0, 10.0);
        let verdict = ReadingClassifier::classify(85.0, &limits, &spec());
        assert!(!verdict.in_spec);
        assert_eq!(verdict.control_zone, ControlZone::Stable);

        // Tight spread: in spec yet a special cause
        let limits = ControlLimits::from_mean_sigma(50.0, 0.5);
        let verdict = ReadingClassifier::classify(55.0, &limits, &spec());
        assert!(verdict.in_spec);
        assert_eq!(verdict.control_zone, ControlZone::Critical);
    }

    #[test]
    fn zero_sigma_only_mean_is_stable() {
        let limits = ControlLimits::from_mean_sigma(40.0, 0.0);
        assert_eq!(ReadingClassifier::zone(40.0, &limits), ControlZone::Stable);
        assert_eq!(ReadingClassifier::zone(40.1, &limits), ControlZone::Critical);
    }

    #[test]
    fn zone_labels() {
        assert_eq!(ControlZone::Warning.as_str(), "warning");
    }
}

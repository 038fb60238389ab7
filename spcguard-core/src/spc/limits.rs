//! Individuals (I-MR) control limits
//!
//! Sigma is estimated from the mean moving range rather than the sample
//! standard deviation: with one reading per sample there are no subgroups,
//! and the short-term variation between neighbours is what the chart is
//! meant to police.
//!
//! ```text
//! x̄   = Σxᵢ / n
//! MR̄  = Σ|xᵢ - xᵢ₋₁| / (n - 1)
//! σ̂   = MR̄ / d2          (d2 = 1.128)
//! UCL = x̄ + 3σ̂   LCL = x̄ - 3σ̂
//! UWL = x̄ + 2σ̂   LWL = x̄ - 2σ̂
//! ```
//!
//! Every call recomputes from the whole window. The window is at most a few
//! dozen points, so there is no running sum to drift or to audit.

use crate::{
    constants::spc::{CONTROL_LIMIT_SIGMAS, D2_SUBGROUP_OF_TWO, WARNING_LIMIT_SIGMAS},
    window::SampleBuffer,
};

/// Control and warning limits of the current window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlLimits {
    /// Window mean
    pub mean: f64,
    /// Estimated process standard deviation
    pub sigma_hat: f64,
    /// Upper control limit, mean + 3σ̂
    pub ucl: f64,
    /// Lower control limit, mean - 3σ̂
    pub lcl: f64,
    /// Upper warning limit, mean + 2σ̂
    pub uwl: f64,
    /// Lower warning limit, mean - 2σ̂
    pub lwl: f64,
}

impl ControlLimits {
    /// Build limits around a mean for a given sigma estimate
    pub fn from_mean_sigma(mean: f64, sigma_hat: f64) -> Self {
        Self {
            mean,
            sigma_hat,
            ucl: mean + CONTROL_LIMIT_SIGMAS * sigma_hat,
            lcl: mean - CONTROL_LIMIT_SIGMAS * sigma_hat,
            uwl: mean + WARNING_LIMIT_SIGMAS * sigma_hat,
            lwl: mean - WARNING_LIMIT_SIGMAS * sigma_hat,
        }
    }

    /// Whether the window showed any variation at all
    ///
    /// Capability and defect forecasts are only defined when this holds.
    pub fn has_variation(&self) -> bool {
        self.sigma_hat > 0.0
    }
}

/// Derives [`ControlLimits`] from a sample window
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitEstimator;

impl LimitEstimator {
    /// Minimum readings before limits exist
    pub const MIN_READINGS: usize = 2;

    /// Recompute limits from scratch
    ///
    /// Returns `None` while the window holds fewer than two readings; that
    /// state means "not yet established", not a zero baseline.
    pub fn recompute<const W: usize>(buffer: &SampleBuffer<W>) -> Option<ControlLimits> {
        if buffer.len() < Self::MIN_READINGS {
            return None;
        }

        let mean = average(buffer.readings())?;
        let mr_mean = average(buffer.moving_ranges())?;
        let sigma_hat = mr_mean / D2_SUBGROUP_OF_TWO;

        Some(ControlLimits::from_mean_sigma(mean, sigma_hat))
    }
}

fn average(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    Some(values.sum::<f64>() / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_of<const W: usize>(values: &[f64]) -> SampleBuffer<W> {
        let mut window = SampleBuffer::new();
        for &value in values {
            window.push(value).unwrap();
        }
        window
    }

    #[test]
    fn undefined_below_two_readings() {
        let empty = SampleBuffer::<10>::new();
        assert_eq!(LimitEstimator::recompute(&empty), None);

        let single = window_of::<10>(&[42.0]);
        assert_eq!(LimitEstimator::recompute(&single), None);
    }

    #[test]
    fn three_point_worked_example() {
        let window = window_of::<60>(&[35.5, 36.0, 35.8]);
        let limits = LimitEstimator::recompute(&window).unwrap();

        assert!((limits.mean - 35.766_666_666).abs() < 1e-6);
        assert!((limits.sigma_hat - 0.35 / 1.128).abs() < 1e-12);
        assert!((limits.sigma_hat - 0.3103).abs() < 1e-4);
        assert!((limits.ucl - 36.70).abs() < 0.01);
        assert!((limits.lcl - 34.84).abs() < 0.01);
        assert!((limits.uwl - (limits.mean + 2.0 * limits.sigma_hat)).abs() < 1e-12);
        assert!((limits.lwl - (limits.mean - 2.0 * limits.sigma_hat)).abs() < 1e-12);
    }

    #[test]
    fn constant_window_has_zero_sigma() {
        let window = window_of::<10>(&[40.0, 40.0, 40.0]);
        let limits = LimitEstimator::recompute(&window).unwrap();

        assert_eq!(limits.mean, 40.0);
        assert_eq!(limits.sigma_hat, 0.0);
        assert!(!limits.has_variation());
        assert_eq!(limits.ucl, 40.0);
        assert_eq!(limits.lcl, 40.0);
    }

    #[test]
    fn uses_only_retained_window() {
        // 100.0 is evicted along with its range to 1.0
        let window = window_of::<3>(&[100.0, 1.0, 2.0, 3.0]);
        let limits = LimitEstimator::recompute(&window).unwrap();

        assert_eq!(limits.mean, 2.0);
        assert!((limits.sigma_hat - 1.0 / 1.128).abs() < 1e-12);
    }

    #[test]
    fn recompute_is_idempotent() {
        let window = window_of::<10>(&[1.0, 3.0, 2.0, 5.0]);
        assert_eq!(LimitEstimator::recompute(&window), LimitEstimator::recompute(&window));
    }
}

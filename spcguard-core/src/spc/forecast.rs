//! Defect rate and scrap forecast
//!
//! ## Model
//!
//! The process is assumed normal with the window's mean and σ̂. The share of
//! parts outside the specification band is the sum of the two tails:
//!
//! ```text
//! p_below = Φ(LSL; x̄, σ̂)
//! p_above = 1 - Φ(USL; x̄, σ̂)
//! p       = p_below + p_above      (disjoint because LSL < USL)
//! ```
//!
//! Φ is the A&S erf approximation from [`normal`](super::normal).
//!
//! ## Batch Projection
//!
//! `scrap = round(batch · p)` with round-half-away-from-zero, and
//! `good = batch - scrap`. The probability itself is never rounded or
//! clamped: a "< 0.01%" label is a display decision made by whoever formats
//! it, helped by [`DefectForecast::is_below_display_precision`].
//!
//! ## Long-Term Forecast
//!
//! Short-term σ̂ flatters a process that drifts. The long-term variant moves
//! the mean 1.5σ̂ towards the nearer specification limit before taking the
//! tails, the usual Six Sigma allowance for drift between windows.

use crate::{
    config::SpecLimits,
    constants::spc::{
        DISPLAY_PERCENT_RESOLUTION, LONG_TERM_SHIFT_SIGMAS, PPM_SCALE, SIGMA_LEVEL_LIMIT,
    },
    spc::{
        limits::ControlLimits,
        normal::{inverse_normal_cdf, normal_cdf, normal_sf},
    },
};

/// Expected defect rate and its projection onto a batch
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefectForecast {
    /// Probability of a part below the lower spec limit
    pub p_below: f64,
    /// Probability of a part above the upper spec limit
    pub p_above: f64,
    /// Total out-of-spec probability
    pub defect_probability: f64,
    /// Batch the counts were projected onto
    pub batch_size: u64,
    /// Expected good parts in the batch
    pub good_count: u64,
    /// Expected scrapped parts in the batch
    pub scrap_count: u64,
}

impl DefectForecast {
    /// Build a forecast from the two tail probabilities
    pub fn from_tails(p_below: f64, p_above: f64, batch_size: u64) -> Self {
        let defect_probability = p_below + p_above;
        let scrap_count = project_scrap(batch_size, defect_probability);

        Self {
            p_below,
            p_above,
            defect_probability,
            batch_size,
            good_count: batch_size - scrap_count,
            scrap_count,
        }
    }

    /// Same probabilities projected onto another batch size
    pub fn with_batch_size(&self, batch_size: u64) -> Self {
        Self::from_tails(self.p_below, self.p_above, batch_size)
    }

    /// Defect probability in percent
    pub fn defect_percent(&self) -> f64 {
        self.defect_probability * 100.0
    }

    /// Defects per million parts
    pub fn ppm(&self) -> f64 {
        self.defect_probability * PPM_SCALE
    }

    /// Expected share of good parts
    pub fn yield_fraction(&self) -> f64 {
        1.0 - self.defect_probability
    }

    /// Short-term sigma level `Φ⁻¹(yield) + 1.5`
    ///
    /// Saturates at +8 for a yield of exactly one and at -8 for a yield of
    /// zero, where the quantile diverges.
    pub fn short_term_z(&self) -> f64 {
        let yield_fraction = self.yield_fraction();
        if yield_fraction >= 1.0 {
            SIGMA_LEVEL_LIMIT
        } else if yield_fraction <= 0.0 {
            -SIGMA_LEVEL_LIMIT
        } else {
            inverse_normal_cdf(yield_fraction) + LONG_TERM_SHIFT_SIGMAS
        }
    }

    /// Positive probability that would print as "0.00%"
    pub fn is_below_display_precision(&self) -> bool {
        self.defect_probability > 0.0 && self.defect_percent() < DISPLAY_PERCENT_RESOLUTION
    }
}

fn project_scrap(batch_size: u64, defect_probability: f64) -> u64 {
    let expected = libm::round(batch_size as f64 * defect_probability);
    if expected <= 0.0 {
        0
    } else {
        (expected as u64).min(batch_size)
    }
}

/// Computes [`DefectForecast`]s from limits and spec
#[derive(Debug, Clone, Copy, Default)]
pub struct DefectForecaster;

impl DefectForecaster {
    /// Short-term forecast, or `None` when σ̂ is zero
    pub fn forecast(limits: &ControlLimits, spec: &SpecLimits, batch_size: u64) -> Option<DefectForecast> {
        if !limits.has_variation() {
            return None;
        }

        Some(Self::tails_around(limits.mean, limits.sigma_hat, spec, batch_size))
    }

    /// Forecast with the mean shifted 1.5σ̂ away from the nearer spec limit
    ///
    /// A mean closer to the upper limit moves down, anything else (including
    /// a mean exactly mid-band) moves up.
    pub fn forecast_long_term(
        limits: &ControlLimits,
        spec: &SpecLimits,
        batch_size: u64,
    ) -> Option<DefectForecast> {
        if !limits.has_variation() {
            return None;
        }

        let shift = LONG_TERM_SHIFT_SIGMAS * limits.sigma_hat;
        let shifted_mean = if spec.max() - limits.mean < limits.mean - spec.min() {
            limits.mean - shift
        } else {
            limits.mean + shift
        };

        Some(Self::tails_around(shifted_mean, limits.sigma_hat, spec, batch_size))
    }

    /// Probability that a part exceeds an arbitrary reference value
    pub fn exceedance_probability(limits: &ControlLimits, threshold: f64) -> Option<f64> {
        if !limits.has_variation() {
            return None;
        }

        Some(normal_sf(threshold, limits.mean, limits.sigma_hat))
    }

    fn tails_around(mean: f64, sigma: f64, spec: &SpecLimits, batch_size: u64) -> DefectForecast {
        let p_below = normal_cdf(spec.min(), mean, sigma);
        let p_above = normal_sf(spec.max(), mean, sigma);
        DefectForecast::from_tails(p_below, p_above, batch_size)
    }
}

//! Process capability against the specification band
//!
//! Capability compares the spread the process actually shows (σ̂ from the
//! control chart) with the spread the specification allows.
//!
//! | Index | Formula                         |
//! |-------|---------------------------------|
//! | Cp    | (USL - LSL) / 6σ̂                |
//! | Cpu   | (USL - x̄) / 3σ̂                  |
//! | Cpl   | (x̄ - LSL) / 3σ̂                  |
//! | Cpk   | min(Cpu, Cpl)                   |
//!
//! Cp ignores centring; Cpk penalises a mean that drifts towards either
//! limit. A window with zero observed variation has no capability at all,
//! which is reported as `None` rather than an infinite index.

use crate::{
    config::SpecLimits,
    constants::spc::{
        CAPABILITY_FULL_SPREAD_SIGMAS, CAPABILITY_HALF_SPREAD_SIGMAS, CAPABLE_CPK_THRESHOLD,
    },
    spc::limits::ControlLimits,
};

/// Capability indices of the current window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilitySnapshot {
    /// Minimum of the two one-sided ratios
    pub cpk: f64,
    /// Potential capability, ignoring centring
    pub cp: f64,
    /// Upper one-sided ratio
    pub cpu: f64,
    /// Lower one-sided ratio
    pub cpl: f64,
}

impl CapabilitySnapshot {
    /// Long-term sigma level, Z = 3·Cpk
    pub fn long_term_z(&self) -> f64 {
        CAPABILITY_HALF_SPREAD_SIGMAS * self.cpk
    }

    /// Whether Cpk reaches the usual 1.33 acceptance threshold
    pub fn is_capable(&self) -> bool {
        self.cpk >= CAPABLE_CPK_THRESHOLD
    }
}

/// Computes [`CapabilitySnapshot`] from limits and spec
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilityAnalyzer;

impl CapabilityAnalyzer {
    /// Capability indices, or `None` when σ̂ is zero
    pub fn capability(limits: &ControlLimits, spec: &SpecLimits) -> Option<CapabilitySnapshot> {
        if !limits.has_variation() {
            return None;
        }

        let half_spread = CAPABILITY_HALF_SPREAD_SIGMAS * limits.sigma_hat;
        let cpu = (spec.max() - limits.mean) / half_spread;
        let cpl = (limits.mean - spec.min()) / half_spread;

        Some(CapabilitySnapshot {
            cpk: cpu.min(cpl),
            cp: spec.width() / (CAPABILITY_FULL_SPREAD_SIGMAS * limits.sigma_hat),
            cpu,
            cpl,
        })
    }
}

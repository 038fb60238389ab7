//! Statistical Process Control Constants
//!
//! Control-chart factors, sigma multipliers and the coefficients of the
//! normal-distribution approximation used by the defect forecaster.

// ===== CONTROL CHART FACTORS =====

/// Unbiasing constant d2 for subgroups of size 2.
///
/// Individuals charts estimate sigma as `MR̄ / d2`, where MR̄ is the mean
/// moving range of consecutive pairs. Used verbatim, never re-derived.
///
/// Source: Montgomery, *Introduction to Statistical Quality Control*,
/// Appendix VI (d2 for n = 2)
pub const D2_SUBGROUP_OF_TWO: f64 = 1.128;

/// Sigma multiplier for the control limits (UCL/LCL).
///
/// Points beyond ±3σ̂ signal a special cause.
pub const CONTROL_LIMIT_SIGMAS: f64 = 3.0;

/// Sigma multiplier for the warning limits (UWL/LWL).
pub const WARNING_LIMIT_SIGMAS: f64 = 2.0;

/// Spread used by the one-sided capability ratios (Cpu, Cpl, Cpk).
pub const CAPABILITY_HALF_SPREAD_SIGMAS: f64 = 3.0;

/// Spread used by the potential capability Cp.
pub const CAPABILITY_FULL_SPREAD_SIGMAS: f64 = 6.0;

/// Cpk at or above which a process is called capable.
///
/// Source: Montgomery, Table 8.5 (existing two-sided process)
pub const CAPABLE_CPK_THRESHOLD: f64 = 1.33;

/// Long-term drift of the process mean, in sigmas.
///
/// Source: Six Sigma convention of a 1.5σ shift between short-term and
/// long-term performance
pub const LONG_TERM_SHIFT_SIGMAS: f64 = 1.5;

/// Parts per million.
pub const PPM_SCALE: f64 = 1_000_000.0;

// ===== ERROR FUNCTION APPROXIMATION =====
//
// erf(x) ≈ 1 - (a1·t + a2·t² + a3·t³ + a4·t⁴ + a5·t⁵)·e^(-x²), t = 1/(1 + p·x)
// Maximum absolute error 1.5e-7.
//
// Source: Abramowitz & Stegun, Handbook of Mathematical Functions, 7.1.26

/// Rational substitution coefficient p.
pub const ERF_P: f64 = 0.3275911;

/// Polynomial coefficient a1.
pub const ERF_A1: f64 = 0.254829592;

/// Polynomial coefficient a2.
pub const ERF_A2: f64 = -0.284496736;

/// Polynomial coefficient a3.
pub const ERF_A3: f64 = 1.421413741;

/// Polynomial coefficient a4.
pub const ERF_A4: f64 = -1.453152027;

/// Polynomial coefficient a5.
pub const ERF_A5: f64 = 1.061405429;

// ===== NORMAL QUANTILE APPROXIMATION =====
//
// Φ⁻¹(q) ≈ t - (c0 + c1·t + c2·t²) / (1 + d1·t + d2·t² + d3·t³),
// t = √(-2·ln q) for the upper tail q = 1 - p. Maximum absolute error 4.5e-4.
//
// Source: Abramowitz & Stegun, Handbook of Mathematical Functions, 26.2.23

/// Numerator coefficient c0.
pub const QUANTILE_C0: f64 = 2.515_517;

/// Numerator coefficient c1.
pub const QUANTILE_C1: f64 = 0.802_853;

/// Numerator coefficient c2.
pub const QUANTILE_C2: f64 = 0.010_328;

/// Denominator coefficient d1.
pub const QUANTILE_D1: f64 = 1.432_788;

/// Denominator coefficient d2.
pub const QUANTILE_D2: f64 = 0.189_269;

/// Denominator coefficient d3.
pub const QUANTILE_D3: f64 = 0.001_308;

/// Sigma level reported for a perfect or a totally failed yield.
///
/// Φ⁻¹ diverges at 0 and 1, so the short-term sigma level saturates at ±8.
pub const SIGMA_LEVEL_LIMIT: f64 = 8.0;

// ===== ATTRIBUTE CHARTS =====

/// Sigma multiplier for p-chart and u-chart limits.
///
/// Source: Montgomery, Chapter 7 (three-sigma attribute limits)
pub const ATTRIBUTE_LIMIT_SIGMAS: f64 = 3.0;

// ===== DISPLAY =====

/// Smallest defect percentage that survives two-decimal formatting.
///
/// Anything below renders as "0.00%"; consumers show "< 0.01%" instead when
/// the probability is positive.
pub const DISPLAY_PERCENT_RESOLUTION: f64 = 0.005;

// ===== DEFAULT CONFIGURATION =====

/// Default production batch size used by the forecast.
pub const DEFAULT_BATCH_SIZE: u64 = 1000;

/// Default lower specification limit of the bench rig (dB).
pub const DEFAULT_SPEC_MIN: f64 = 30.0;

/// Default upper specification limit of the bench rig (dB).
pub const DEFAULT_SPEC_MAX: f64 = 80.0;

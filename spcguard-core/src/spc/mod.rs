//! Individuals Control Chart Engine
//!
//! ## Overview
//!
//! The statistics of the engine, split into four stateless stages that all
//! read the same [`SampleBuffer`](crate::window::SampleBuffer):
//!
//! ```text
//!            ┌──────────────────┐
//! window ──▶ │  LimitEstimator  │ ──▶ ControlLimits
//!            └──────────────────┘          │
//!                 ┌────────────────────────┼──────────────────────┐
//!                 ▼                        ▼                      ▼
//!       CapabilityAnalyzer        DefectForecaster       ReadingClassifier
//!       (Cp, Cpk, Cpu, Cpl)     (tails, good / scrap)   (spec + control zone)
//! ```
//!
//! Lot-based attribute charts (p and u) live alongside in
//! [`AttributeLimits`]; they are calibrated from inspection counts, not from
//! the window.
//!
//! Every stage is a pure function of its inputs. Nothing is cached between
//! readings, so a result can never describe a window that no longer exists.
//!
//! ## Undefined States
//!
//! | Condition            | Limits | Capability | Forecast |
//! |----------------------|--------|------------|----------|
//! | fewer than 2 readings| `None` | `None`     | `None`   |
//! | σ̂ = 0                | `Some` | `None`     | `None`   |
//! | otherwise            | `Some` | `Some`     | `Some`   |
//!
//! ## Usage Example
//!
//! ```rust
//! use spcguard_core::config::SpecLimits;
//! use spcguard_core::spc::{LimitEstimator, ReadingClassifier, ControlZone};
//! use spcguard_core::window::SampleBuffer;
//!
//! let spec = SpecLimits::new(30.0, 80.0)?;
//! let mut window = SampleBuffer::<60>::new();
//! for value in [35.5, 36.0, 35.8] {
//!     window.push(value)?;
//! }
//!
//! let limits = LimitEstimator::recompute(&window).expect("two or more readings");
//! let verdict = ReadingClassifier::classify(35.8, &limits, &spec);
//! assert!(verdict.in_spec);
//! assert_eq!(verdict.control_zone, ControlZone::Stable);
//! # Ok::<(), spcguard_core::SpcError>(())
//! ```

mod attributes;
mod capability;
mod classify;
mod forecast;
mod limits;
pub mod normal;

pub use attributes::{AttributeChart, AttributeLimits, AttributeLot, LotLimits, LotVerdict};
pub use capability::{CapabilityAnalyzer, CapabilitySnapshot};
pub use classify::{Classification, ControlZone, ReadingClassifier};
pub use forecast::{DefectForecast, DefectForecaster};
pub use limits::{ControlLimits, LimitEstimator};

//! Attribute control charts
//!
//! Counts from inspected lots instead of measured readings. Two charts are
//! supported, both calibrated from a slice of lots and both with limits that
//! depend on each lot's own size:
//!
//! | Chart | Statistic                       | Center          | σ for a lot of size n |
//! |-------|---------------------------------|-----------------|-----------------------|
//! | p     | nonconforming / inspected       | p̄ = Σnp / Σn    | √(p̄(1 − p̄) / n)       |
//! | u     | defects / units                 | ū = Σc / Σn     | √(ū / n)              |
//!
//! `UCL = center + 3σ`, `LCL = max(0, center − 3σ)`. A lot is out of control
//! when its statistic is strictly above UCL or strictly below LCL.
//!
//! ```rust
//! use spcguard_core::spc::{AttributeLimits, AttributeLot};
//!
//! let calibration = [
//!     AttributeLot::new(2, 100),
//!     AttributeLot::new(3, 100),
//!     AttributeLot::new(5, 100),
//! ];
//! let chart = AttributeLimits::p_chart(&calibration)?;
//!
//! let verdict = chart.evaluate(&AttributeLot::new(12, 100)).expect("non-empty lot");
//! assert!(verdict.out_of_control);
//! assert_eq!(verdict.limits.lcl, 0.0);
//! # Ok::<(), spcguard_core::SpcError>(())
//! ```

use crate::{
    constants::spc::ATTRIBUTE_LIMIT_SIGMAS,
    errors::{SpcError, SpcResult},
};

/// Kind of attribute chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttributeChart {
    /// Proportion nonconforming
    P,
    /// Defects per unit
    U,
}

/// One inspected lot
///
/// `count` is the number of nonconforming items for a p-chart and the number
/// of defects for a u-chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeLot {
    /// Nonconforming items or defects found
    pub count: u64,
    /// Items or units inspected
    pub inspected: u64,
}

impl AttributeLot {
    /// Lot with `count` findings over `inspected` items
    pub const fn new(count: u64, inspected: u64) -> Self {
        Self { count, inspected }
    }

    /// Proportion or rate, `None` for an empty lot
    pub fn rate(&self) -> Option<f64> {
        if self.inspected == 0 {
            return None;
        }
        Some(self.count as f64 / self.inspected as f64)
    }
}

/// Center line and limits for a lot of a given size
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LotLimits {
    /// Center line (p̄ or ū)
    pub center: f64,
    /// Upper control limit
    pub ucl: f64,
    /// Lower control limit, never negative
    pub lcl: f64,
}

/// Verdict for one lot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LotVerdict {
    /// Lot proportion or rate
    pub value: f64,
    /// Limits at this lot's size
    pub limits: LotLimits,
    /// Strictly beyond either limit
    pub out_of_control: bool,
}

/// Calibrated p-chart or u-chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeLimits {
    chart: AttributeChart,
    center: f64,
    total_count: u64,
    total_inspected: u64,
}

impl AttributeLimits {
    /// Calibrate a p-chart, p̄ = Σnp / Σn
    pub fn p_chart(lots: &[AttributeLot]) -> SpcResult<Self> {
        Self::calibrate(AttributeChart::P, lots)
    }

    /// Calibrate a u-chart, ū = Σc / Σn
    pub fn u_chart(lots: &[AttributeLot]) -> SpcResult<Self> {
        Self::calibrate(AttributeChart::U, lots)
    }

    fn calibrate(chart: AttributeChart, lots: &[AttributeLot]) -> SpcResult<Self> {
        let (total_count, total_inspected) = lots.iter().fold((0u64, 0u64), |(count, inspected), lot| {
            (count.saturating_add(lot.count), inspected.saturating_add(lot.inspected))
        });

        if total_inspected == 0 {
            log_warn!("Attribute chart over {} lots has no inspected units", lots.len());
            return Err(SpcError::NoInspectedUnits);
        }

        let center = total_count as f64 / total_inspected as f64;
        log_debug!("{:?} chart center {} from {} lots", chart, center, lots.len());

        Ok(Self {
            chart,
            center,
            total_count,
            total_inspected,
        })
    }

    /// Chart kind
    pub fn chart(&self) -> AttributeChart {
        self.chart
    }

    /// Center line
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Findings summed over the calibration lots
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Items or units summed over the calibration lots
    pub fn total_inspected(&self) -> u64 {
        self.total_inspected
    }

    /// Limits for a lot of `inspected` items, `None` for an empty lot
    pub fn limits_for(&self, inspected: u64) -> Option<LotLimits> {
        if inspected == 0 {
            return None;
        }

        let n = inspected as f64;
        let variance = match self.chart {
            AttributeChart::P => self.center * (1.0 - self.center),
            AttributeChart::U => self.center,
        };
        let spread = ATTRIBUTE_LIMIT_SIGMAS * libm::sqrt(variance / n);

        Some(LotLimits {
            center: self.center,
            ucl: self.center + spread,
            lcl: libm::fmax(self.center - spread, 0.0),
        })
    }

    /// Judge one lot against the limits at its size
    pub fn evaluate(&self, lot: &AttributeLot) -> Option<LotVerdict> {
        let value = lot.rate()?;
        let limits = self.limits_for(lot.inspected)?;

        Some(LotVerdict {
            value,
            limits,
            out_of_control: value > limits.ucl || value < limits.lcl,
        })
    }

    /// Judge every lot in order; empty lots yield `None`
    pub fn evaluate_lots<'a>(
        &'a self,
        lots: &'a [AttributeLot],
    ) -> impl Iterator<Item = Option<LotVerdict>> + 'a {
        lots.iter().map(move |lot| self.evaluate(lot))
    }

    /// Number of lots beyond their limits
    pub fn out_of_control_count(&self, lots: &[AttributeLot]) -> usize {
        let flagged = self
            .evaluate_lots(lots)
            .flatten()
            .filter(|verdict| verdict.out_of_control)
            .count();

        if flagged > 0 {
            log_warn!("{:?} chart: {} of {} lots out of control", self.chart, flagged, lots.len());
        }
        flagged
    }
}

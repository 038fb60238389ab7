//! Fixed-layout text panel
//!
//! One block of labelled lines per snapshot, suitable for a console or a
//! serial terminal:
//!
//! ```text
//! Reading     #3  35.8 dB  [IN SPEC] [STABLE]
//! Spec        30.0 .. 80.0 dB
//! Center      mean 35.8 dB  sigma 0.31
//! Limits      LCL 34.8  LWL 35.1  UWL 36.4  UCL 36.7
//! Capability  Cpk 6.19  capable
//! Forecast    0.00% defective  1000 good / 0 scrap of 1000
//! Window      3 readings, 3 accepted
//! ```

use crate::{
    format::{format_defect_percent, spec_tag, zone_tag},
    Presenter, ReportResult,
};
use spcguard_core::{spc::LimitEstimator, ProcessSnapshot};
use std::fmt::Write;

/// Text panel renderer
#[derive(Debug, Clone)]
pub struct TextPanel {
    unit: String,
    decimals: usize,
}

impl TextPanel {
    /// Panel without a unit, one decimal for readings
    pub fn new() -> Self {
        Self {
            unit: String::new(),
            decimals: 1,
        }
    }

    /// Unit appended to readings and limits
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Decimals used for readings and limits
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    fn value(&self, value: f64) -> String {
        if self.unit.is_empty() {
            format!("{:.*}", self.decimals, value)
        } else {
            format!("{:.*} {}", self.decimals, value, self.unit)
        }
    }
}

impl Default for TextPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TextPanel {
    type Output = String;

    fn render<const W: usize>(&self, snapshot: &ProcessSnapshot<W>) -> ReportResult<String> {
        let mut out = String::new();
        let d = self.decimals;

        match (snapshot.latest, snapshot.classification) {
            (Some(reading), Some(verdict)) => writeln!(
                out,
                "Reading     #{}  {}  [{}] [{}]",
                reading.sequence,
                self.value(reading.value),
                spec_tag(&verdict),
                zone_tag(verdict.control_zone)
            )?,
            (Some(reading), None) => writeln!(
                out,
                "Reading     #{}  {}  [{}]",
                reading.sequence,
                self.value(reading.value),
                if snapshot.spec.contains(reading.value) { "IN SPEC" } else { "OUT OF SPEC" }
            )?,
            (None, _) => writeln!(out, "Reading     --")?,
        }

        writeln!(
            out,
            "Spec        {:.*} .. {}",
            d,
            snapshot.spec.min(),
            self.value(snapshot.spec.max())
        )?;

        match snapshot.limits {
            Some(limits) => {
                writeln!(
                    out,
                    "Center      mean {}  sigma {:.2}",
                    self.value(limits.mean),
                    limits.sigma_hat
                )?;
                writeln!(
                    out,
                    "Limits      LCL {:.*}  LWL {:.*}  UWL {:.*}  UCL {:.*}",
                    d, limits.lcl, d, limits.lwl, d, limits.uwl, d, limits.ucl
                )?;
            }
            None => writeln!(
                out,
                "Limits      collecting ({} of {} readings)",
                snapshot.window_len,
                LimitEstimator::MIN_READINGS
            )?,
        }

        match snapshot.capability {
            Some(capability) => writeln!(
                out,
                "Capability  Cpk {:.2}  {}",
                capability.cpk,
                if capability.is_capable() { "capable" } else { "not capable" }
            )?,
            None => writeln!(out, "Capability  undefined")?,
        }

        match snapshot.forecast {
            Some(forecast) => writeln!(
                out,
                "Forecast    {} defective  {} good / {} scrap of {}",
                format_defect_percent(forecast.defect_probability),
                forecast.good_count,
                forecast.scrap_count,
                forecast.batch_size
            )?,
            None => writeln!(out, "Forecast    undefined")?,
        }

        write!(
            out,
            "Window      {} readings, {} accepted",
            snapshot.window_len, snapshot.total_accepted
        )?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spcguard_core::{MonitorConfig, ProcessMonitor};

    fn render(values: &[f64]) -> String {
        let mut monitor = ProcessMonitor::<20>::new(MonitorConfig::new(30.0, 80.0)).unwrap();
        for &value in values {
            monitor.push(value).unwrap();
        }
        TextPanel::new().unit("dB").render(&monitor.snapshot()).unwrap()
    }

    #[test]
    fn empty_panel() {
        let panel = render(&[]);
        assert!(panel.starts_with("Reading     --"));
        assert!(panel.contains("collecting (0 of 2 readings)"));
        assert!(panel.contains("Capability  undefined"));
        assert!(panel.contains("Forecast    undefined"));
    }

    #[test]
    fn single_reading_has_spec_tag_only() {
        let panel = render(&[42.5]);
        assert!(panel.contains("#1  42.5 dB  [IN SPEC]\n"));
        assert!(panel.contains("collecting (1 of 2 readings)"));
    }

    #[test]
    fn worked_example() {
        let panel = render(&[35.5, 36.0, 35.8]);

        assert!(panel.contains("#3  35.8 dB  [IN SPEC] [STABLE]"));
        assert!(panel.contains("Spec        30.0 .. 80.0 dB"));
        assert!(panel.contains("sigma 0.31"));
        assert!(panel.contains("LCL 34.8"));
        assert!(panel.contains("UCL 36.7"));
        assert!(panel.contains("capable"));
        assert!(panel.contains("0.00% defective  1000 good / 0 scrap of 1000"));
        assert!(panel.ends_with("Window      3 readings, 3 accepted"));
    }

    #[test]
    fn out_of_spec_spike() {
        let panel = render(&[40.0, 41.0, 39.5, 40.5, 40.0, 90.2]);
        assert!(panel.contains("[OUT OF SPEC]"));
    }

    #[test]
    fn flat_line_has_limits_but_no_capability() {
        let panel = render(&[40.0, 40.0, 40.0]);
        assert!(panel.contains("sigma 0.00"));
        assert!(panel.contains("Capability  undefined"));
        assert!(panel.contains("Forecast    undefined"));
    }

    #[test]
    fn unitless_panel() {
        let mut monitor = ProcessMonitor::<8>::new(MonitorConfig::new(0.0, 10.0)).unwrap();
        monitor.push(5.0).unwrap();
        let panel = TextPanel::new().decimals(2).render(&monitor.snapshot()).unwrap();
        assert!(panel.contains("#1  5.00  [IN SPEC]"));
        assert!(panel.contains("Spec        0.00 .. 10.00\n"));
    }
}

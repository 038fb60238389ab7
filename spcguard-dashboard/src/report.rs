//! JSON response bodies
//!
//! Two bodies are offered. [`JsonReport`] carries the whole snapshot plus the
//! display-ready defect percentage. [`LatestValue`] is the minimal
//! `{"value": ...}` body for front ends that poll one reading at a time and
//! run their own chart.

use crate::{format::format_defect_percent, Presenter, ReportResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use spcguard_core::ProcessSnapshot;

/// Full snapshot report
#[derive(Debug, Clone, Copy)]
pub struct JsonReport {
    pretty: bool,
    include_chart: bool,
}

impl JsonReport {
    /// Compact report including the chart series
    pub fn new() -> Self {
        Self {
            pretty: false,
            include_chart: true,
        }
    }

    /// Indent the output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Include or omit the chart series
    pub fn include_chart(mut self, include: bool) -> Self {
        self.include_chart = include;
        self
    }

    /// Build the report as a JSON value
    pub fn to_value<const W: usize>(&self, snapshot: &ProcessSnapshot<W>) -> ReportResult<Value> {
        let mut body = serde_json::to_value(snapshot)?;

        if let Some(fields) = body.as_object_mut() {
            if !self.include_chart {
                fields.remove("chart");
            }

            let defect_percent = snapshot
                .forecast
                .map(|forecast| format_defect_percent(forecast.defect_probability));
            fields.insert("defect_percent".into(), json!(defect_percent));
            fields.insert(
                "short_term_z".into(),
                json!(snapshot.forecast.map(|forecast| forecast.short_term_z())),
            );
            fields.insert("ready".into(), json!(snapshot.is_ready()));
            fields.insert("version".into(), json!(spcguard_core::VERSION));
        }

        Ok(body)
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for JsonReport {
    type Output = String;

    fn render<const W: usize>(&self, snapshot: &ProcessSnapshot<W>) -> ReportResult<String> {
        let body = self.to_value(snapshot)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&body)?
        } else {
            serde_json::to_string(&body)?
        };

        log::debug!(
            "Rendered JSON report: {} readings, {} bytes",
            snapshot.window_len,
            text.len()
        );
        Ok(text)
    }
}

/// Latest-reading body, `null` before the first reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatestValue {
    /// Most recent accepted reading
    pub value: Option<f64>,
}

impl LatestValue {
    /// Take the latest reading from a snapshot
    pub fn from_snapshot<const W: usize>(snapshot: &ProcessSnapshot<W>) -> Self {
        Self {
            value: snapshot.latest.map(|reading| reading.value),
        }
    }

    /// Encode as a compact JSON body
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

//! Process Monitor - one engine per monitored stream
//!
//! ## Overview
//!
//! [`ProcessMonitor`] owns a [`SampleBuffer`] plus the fixed specification
//! band and the current batch size, and wires the statistics stages together:
//!
//! ```text
//! push(value) ──▶ SampleBuffer ──▶ LimitEstimator ──▶ ReadingClassifier
//!                                        │
//!                                        ├──▶ CapabilityAnalyzer
//!                                        └──▶ DefectForecaster (batch_size)
//! ```
//!
//! Nothing derived is stored. Every accessor recomputes from the window, so
//! a batch-size change or a new reading is visible on the very next read.
//!
//! Several monitors can run side by side, one per production line or sensor,
//! without sharing any hidden state.
//!
//! ## Usage Example
//!
//! ```rust
//! use spcguard_core::{MonitorConfig, ProcessMonitor, spc::ControlZone};
//!
//! let mut monitor: ProcessMonitor = ProcessMonitor::new(MonitorConfig::new(30.0, 80.0))?;
//!
//! assert!(monitor.push(35.5)?.is_none()); // limits not established yet
//! monitor.push(36.0)?;
//! let verdict = monitor.push(35.8)?.expect("limits established");
//! assert!(verdict.in_spec);
//! assert_eq!(verdict.control_zone, ControlZone::Stable);
//!
//! let snapshot = monitor.snapshot();
//! assert_eq!(snapshot.window_len, 3);
//! assert_eq!(snapshot.chart.readings.len(), snapshot.chart.ucl.len());
//! # Ok::<(), spcguard_core::SpcError>(())
//! ```

use heapless::Vec;

use crate::{
    config::{MonitorConfig, SpecLimits},
    constants::buffers::DEFAULT_WINDOW,
    errors::SpcResult,
    spc::{
        CapabilityAnalyzer, CapabilitySnapshot, Classification, ControlLimits, DefectForecast,
        DefectForecaster, LimitEstimator, ReadingClassifier,
    },
    traits::{Reading, ReadingSource, SequenceIndex},
    window::SampleBuffer,
};

/// SPC engine for a single stream of readings
#[derive(Debug, Clone)]
pub struct ProcessMonitor<const W: usize = DEFAULT_WINDOW> {
    buffer: SampleBuffer<W>,
    spec: SpecLimits,
    batch_size: u64,
}

impl<const W: usize> ProcessMonitor<W> {
    /// Build a monitor, validating the configuration
    pub fn new(config: MonitorConfig) -> SpcResult<Self> {
        let spec = config.spec_limits()?;
        Ok(Self::with_spec(spec, config.batch_size))
    }

    /// Build a monitor from an already validated spec band
    pub fn with_spec(spec: SpecLimits, batch_size: u64) -> Self {
        Self {
            buffer: SampleBuffer::new(),
            spec,
            batch_size,
        }
    }

    /// Accept a reading and classify it against the updated window
    ///
    /// Returns `None` while fewer than two readings are held. Non-finite
    /// readings are rejected and change nothing.
    pub fn push(&mut self, value: f64) -> SpcResult<Option<Classification>> {
        let reading = self.buffer.push(value).map_err(|err| {
            log_warn!("Rejected reading {}: {}", value, err);
            err
        })?;

        let verdict = self.limits().map(|limits| {
            log_debug!(
                "#{} = {}: mean {} sigma {} [{}, {}]",
                reading.sequence, reading.value, limits.mean, limits.sigma_hat, limits.lcl, limits.ucl
            );
            ReadingClassifier::classify(reading.value, &limits, &self.spec)
        });

        Ok(verdict)
    }

    /// Pull up to `max` readings from a source
    ///
    /// Stops early when the source runs dry. Rejected readings are skipped
    /// and not counted. Returns the number of readings accepted.
    pub fn ingest<S: ReadingSource>(&mut self, mut source: S, max: usize) -> usize {
        let mut accepted = 0;
        for _ in 0..max {
            let Some(value) = source.next_reading() else {
                break;
            };
            if self.push(value).is_ok() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Current control limits, `None` until two readings are held
    pub fn limits(&self) -> Option<ControlLimits> {
        LimitEstimator::recompute(&self.buffer)
    }

    /// Capability of the current window
    pub fn capability(&self) -> Option<CapabilitySnapshot> {
        self.limits()
            .and_then(|limits| CapabilityAnalyzer::capability(&limits, &self.spec))
    }

    /// Short-term defect forecast for the current batch size
    pub fn forecast(&self) -> Option<DefectForecast> {
        self.limits()
            .and_then(|limits| DefectForecaster::forecast(&limits, &self.spec, self.batch_size))
    }

    /// Long-term defect forecast (1.5σ̂ mean shift) for the current batch size
    pub fn forecast_long_term(&self) -> Option<DefectForecast> {
        self.limits().and_then(|limits| {
            DefectForecaster::forecast_long_term(&limits, &self.spec, self.batch_size)
        })
    }

    /// Probability of a part above `threshold`
    pub fn exceedance_probability(&self, threshold: f64) -> Option<f64> {
        self.limits()
            .and_then(|limits| DefectForecaster::exceedance_probability(&limits, threshold))
    }

    /// Verdict for the most recent reading against the current limits
    pub fn latest_classification(&self) -> Option<Classification> {
        let latest = self.buffer.latest()?;
        let limits = self.limits()?;
        Some(ReadingClassifier::classify(latest.value, &limits, &self.spec))
    }

    /// Series needed to draw the control chart
    pub fn chart(&self) -> ChartSeries<W> {
        ChartSeries::from_window(&self.buffer, self.limits().as_ref())
    }

    /// Everything a presentation layer shows, computed in one pass
    pub fn snapshot(&self) -> ProcessSnapshot<W> {
        let limits = self.limits();
        let latest = self.buffer.latest();

        ProcessSnapshot {
            latest,
            window_len: self.buffer.len(),
            total_accepted: self.buffer.total_accepted(),
            spec: self.spec,
            batch_size: self.batch_size,
            limits,
            classification: latest
                .zip(limits)
                .map(|(reading, limits)| ReadingClassifier::classify(reading.value, &limits, &self.spec)),
            capability: limits.and_then(|limits| CapabilityAnalyzer::capability(&limits, &self.spec)),
            forecast: limits
                .and_then(|limits| DefectForecaster::forecast(&limits, &self.spec, self.batch_size)),
            chart: ChartSeries::from_window(&self.buffer, limits.as_ref()),
        }
    }

    /// Change the production batch size used by the forecast
    pub fn set_batch_size(&mut self, batch_size: u64) {
        self.batch_size = batch_size;
    }

    /// Current production batch size
    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Specification band
    pub fn spec(&self) -> &SpecLimits {
        &self.spec
    }

    /// Read-only view of the window
    pub fn buffer(&self) -> &SampleBuffer<W> {
        &self.buffer
    }

    /// Forget the retained history
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

/// Control chart series aligned to the current window
///
/// `labels` and `readings` always have the window's length. The limit lines
/// have the same length once limits are established and are empty before.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSeries<const W: usize> {
    /// Sequence index of each reading
    pub labels: Vec<SequenceIndex, W>,
    /// Raw readings
    pub readings: Vec<f64, W>,
    /// Centre line
    pub mean: Vec<f64, W>,
    /// Upper control limit line
    pub ucl: Vec<f64, W>,
    /// Lower control limit line
    pub lcl: Vec<f64, W>,
    /// Upper warning limit line
    pub uwl: Vec<f64, W>,
    /// Lower warning limit line
    pub lwl: Vec<f64, W>,
}

impl<const W: usize> ChartSeries<W> {
    fn from_window(buffer: &SampleBuffer<W>, limits: Option<&ControlLimits>) -> Self {
        let len = buffer.len();
        let line = |level: Option<f64>| -> Vec<f64, W> {
            level
                .map(|value| core::iter::repeat(value).take(len).collect())
                .unwrap_or_default()
        };

        Self {
            labels: buffer.sequence_indices().collect(),
            readings: buffer.readings().collect(),
            mean: line(limits.map(|l| l.mean)),
            ucl: line(limits.map(|l| l.ucl)),
            lcl: line(limits.map(|l| l.lcl)),
            uwl: line(limits.map(|l| l.uwl)),
            lwl: line(limits.map(|l| l.lwl)),
        }
    }

    /// Number of points on the chart
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if the chart has no points
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Whether limit lines are present
    pub fn has_limits(&self) -> bool {
        !self.is_empty() && self.ucl.len() == self.readings.len()
    }
}

/// Point-in-time view of a monitor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessSnapshot<const W: usize> {
    /// Most recent reading
    pub latest: Option<Reading>,
    /// Readings currently in the window
    pub window_len: usize,
    /// Readings accepted since the monitor was built
    pub total_accepted: u64,
    /// Specification band
    pub spec: SpecLimits,
    /// Batch size the forecast is projected onto
    pub batch_size: u64,
    /// Control limits, `None` until established
    pub limits: Option<ControlLimits>,
    /// Verdict for the latest reading
    pub classification: Option<Classification>,
    /// Capability, `None` without limits or variation
    pub capability: Option<CapabilitySnapshot>,
    /// Short-term defect forecast, `None` without limits or variation
    pub forecast: Option<DefectForecast>,
    /// Control chart series
    pub chart: ChartSeries<W>,
}

impl<const W: usize> ProcessSnapshot<W> {
    /// Whether control limits have been established
    pub fn is_ready(&self) -> bool {
        self.limits.is_some()
    }
}

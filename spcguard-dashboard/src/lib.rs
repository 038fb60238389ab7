//! Presentation adapters for SpcGuard
//!
//! The engine in `spcguard-core` produces a [`ProcessSnapshot`]; everything in
//! this crate only formats that snapshot. Adapters never touch the window and
//! never recompute statistics, so any number of them can share one monitor.
//!
//! - [`JsonReport`]: response bodies for a polling front end
//! - [`TextPanel`]: fixed-layout text panel for consoles and serial terminals
//! - [`format_defect_percent`]: the percent display rule shared by both
//!
//! ```rust
//! use spcguard_core::{MonitorConfig, ProcessMonitor};
//! use spcguard_dashboard::{JsonReport, Presenter, TextPanel};
//!
//! let mut monitor: ProcessMonitor = ProcessMonitor::new(MonitorConfig::new(30.0, 80.0))?;
//! for value in [35.5, 36.0, 35.8] {
//!     monitor.push(value)?;
//! }
//!
//! let snapshot = monitor.snapshot();
//! let body = JsonReport::new().render(&snapshot)?;
//! let panel = TextPanel::new().unit("dB").render(&snapshot)?;
//! assert!(body.contains("\"defect_percent\""));
//! assert!(panel.contains("IN SPEC"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod format;
pub mod panel;
pub mod report;

pub use format::{format_defect_percent, spec_tag, zone_tag};
pub use panel::TextPanel;
pub use report::{JsonReport, LatestValue};

use spcguard_core::ProcessSnapshot;
use thiserror::Error;

/// Errors raised while rendering a snapshot
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing into the text buffer failed
    #[error("Formatting error")]
    Format(#[from] std::fmt::Error),
}

/// Result type for presentation adapters
pub type ReportResult<T> = Result<T, ReportError>;

/// Renders an engine snapshot into some output representation
///
/// Implementations are read-only consumers of the snapshot.
pub trait Presenter {
    /// Rendered form
    type Output;

    /// Render one snapshot
    fn render<const W: usize>(&self, snapshot: &ProcessSnapshot<W>) -> ReportResult<Self::Output>;
}

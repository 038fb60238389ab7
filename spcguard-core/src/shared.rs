//! Thread-safe monitor handle
//!
//! A sensor task pushes readings while an HTTP handler or UI thread asks for
//! the latest forecast. Both go through one mutex per monitor, so a reader
//! never sees the reading and moving-range sequences out of step in the
//! middle of an eviction, and a snapshot always describes one window.
//!
//! ```rust
//! use std::thread;
//! use spcguard_core::{MonitorConfig, shared::SharedMonitor};
//!
//! let monitor: SharedMonitor = SharedMonitor::new(MonitorConfig::new(30.0, 80.0))?;
//!
//! let producer = {
//!     let monitor = monitor.clone();
//!     thread::spawn(move || {
//!         for value in [35.5, 36.0, 35.8, 38.2] {
//!             monitor.push(value).ok();
//!         }
//!     })
//! };
//! producer.join().unwrap();
//!
//! assert_eq!(monitor.snapshot().window_len, 4);
//! # Ok::<(), spcguard_core::SpcError>(())
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    config::MonitorConfig,
    constants::buffers::DEFAULT_WINDOW,
    errors::SpcResult,
    monitor::{ProcessMonitor, ProcessSnapshot},
    spc::{Classification, DefectForecast},
};

/// Cloneable handle to a monitor shared between threads
#[derive(Debug, Clone)]
pub struct SharedMonitor<const W: usize = DEFAULT_WINDOW> {
    inner: Arc<Mutex<ProcessMonitor<W>>>,
}

impl<const W: usize> SharedMonitor<W> {
    /// Build a shared monitor, validating the configuration
    pub fn new(config: MonitorConfig) -> SpcResult<Self> {
        Ok(Self::from_monitor(ProcessMonitor::new(config)?))
    }

    /// Wrap an existing monitor
    pub fn from_monitor(monitor: ProcessMonitor<W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(monitor)),
        }
    }

    /// Push a reading under the lock
    pub fn push(&self, value: f64) -> SpcResult<Option<Classification>> {
        self.lock().push(value)
    }

    /// Consistent snapshot of the whole monitor
    pub fn snapshot(&self) -> ProcessSnapshot<W> {
        self.lock().snapshot()
    }

    /// Current short-term forecast
    pub fn forecast(&self) -> Option<DefectForecast> {
        self.lock().forecast()
    }

    /// Change the batch size; applies to the next read
    pub fn set_batch_size(&self, batch_size: u64) {
        self.lock().set_batch_size(batch_size);
    }

    /// Run a closure with exclusive access to the monitor
    pub fn with<R>(&self, f: impl FnOnce(&mut ProcessMonitor<W>) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, ProcessMonitor<W>> {
        // Monitor methods do not panic mid-update, so a poisoned lock still
        // guards a consistent window
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_producers_and_readers_see_consistent_windows() {
        let monitor = SharedMonitor::<16>::new(MonitorConfig::new(0.0, 1000.0)).unwrap();

        let producers: Vec<_> = (0..4)
            .map(|p| {
                let monitor = monitor.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        monitor.push((p * 250 + i) as f64 % 97.0).unwrap();
                    }
                })
            })
            .collect();

        let reader = {
            let monitor = monitor.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    monitor.with(|m| {
                        let window = m.buffer();
                        assert_eq!(window.moving_ranges().len(), window.len().saturating_sub(1));
                    });
                    let snapshot = monitor.snapshot();
                    assert_eq!(snapshot.chart.labels.len(), snapshot.window_len);
                }
            })
        };

        for handle in producers {
            handle.join().unwrap();
        }
        reader.join().unwrap();

        let snapshot = monitor.snapshot();
        assert_eq!(snapshot.window_len, 16);
        assert_eq!(snapshot.total_accepted, 1000);
    }

    #[test]
    fn batch_size_visible_to_other_handles() {
        let monitor = SharedMonitor::<8>::new(MonitorConfig::new(30.0, 80.0)).unwrap();
        for value in [50.0, 60.0, 45.0] {
            monitor.push(value).unwrap();
        }

        let other = monitor.clone();
        other.set_batch_size(250);
        assert_eq!(monitor.forecast().unwrap().batch_size, 250);
    }
}

//! Reading sources for bench tests and replay
//!
//! Real deployments read a sensor driver; the engine only needs something
//! that yields one scalar at a time. Two in-memory sources are provided:
//!
//! - [`MockSensor`] cycles forever through a fixed dataset, the way the
//!   bench rig is exercised without a microphone attached
//! - [`ReplaySource`] plays a recorded slice once, for tests and offline
//!   analysis

use crate::traits::ReadingSource;

/// Bench-test dataset of a sound-level line (dB)
///
/// Four phases: stable operation, a moderate drift into the warning band,
/// a critical spike outside the specification, and recovery.
pub const BENCH_DATASET: [f64; 20] = [
    // Stable
    35.5, 36.0, 35.8, 38.2, 40.1, 42.5, 45.0, 41.2, 39.5, 38.0,
    // Moderate drift
    55.0, 58.0, 59.5, 57.0,
    // Critical spike
    85.5, 90.2,
    // Recovery
    40.0, 38.5, 36.2, 35.0,
];

/// Endless source cycling through a dataset
///
/// ```rust
/// use spcguard_core::source::MockSensor;
/// use spcguard_core::traits::ReadingSource;
///
/// let mut sensor = MockSensor::new(&[1.0, 2.0]);
/// let first_four: Vec<_> = (0..4).filter_map(|_| sensor.next_reading()).collect();
/// assert_eq!(first_four, vec![1.0, 2.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct MockSensor<'a> {
    dataset: &'a [f64],
    position: usize,
}

impl<'a> MockSensor<'a> {
    /// Cycle through `dataset`
    pub fn new(dataset: &'a [f64]) -> Self {
        Self {
            dataset,
            position: 0,
        }
    }

    /// Index of the next value to be returned
    pub fn position(&self) -> usize {
        self.position
    }

    /// Restart from the first value
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl MockSensor<'static> {
    /// Cycle through [`BENCH_DATASET`]
    pub fn bench() -> Self {
        Self::new(&BENCH_DATASET)
    }
}

impl<'a> ReadingSource for MockSensor<'a> {
    fn next_reading(&mut self) -> Option<f64> {
        let value = *self.dataset.get(self.position)?;
        self.position = (self.position + 1) % self.dataset.len();
        Some(value)
    }
}

/// One-shot source over a recorded slice
#[derive(Debug, Clone)]
pub struct ReplaySource<'a> {
    values: &'a [f64],
    position: usize,
}

impl<'a> ReplaySource<'a> {
    /// Play `values` once, in order
    pub fn new(values: &'a [f64]) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Values not yet played
    pub fn remaining(&self) -> usize {
        self.values.len() - self.position
    }
}

impl<'a> ReadingSource for ReplaySource<'a> {
    fn next_reading(&mut self) -> Option<f64> {
        let value = *self.values.get(self.position)?;
        self.position += 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_sensor_wraps_around() {
        let mut sensor = MockSensor::bench();
        for _ in 0..BENCH_DATASET.len() {
            sensor.next_reading().unwrap();
        }
        assert_eq!(sensor.position(), 0);
        assert_eq!(sensor.next_reading(), Some(35.5));
    }

    #[test]
    fn empty_mock_sensor_yields_nothing() {
        let mut sensor = MockSensor::new(&[]);
        assert_eq!(sensor.next_reading(), None);
    }

    #[test]
    fn replay_stops_at_end() {
        let mut source = ReplaySource::new(&[1.0, 2.0]);
        assert_eq!(source.next_reading(), Some(1.0));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next_reading(), Some(2.0));
        assert_eq!(source.next_reading(), None);
        assert_eq!(source.remaining(), 0);
    }
}

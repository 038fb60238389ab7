//! Sliding Sample Window
//!
//! ## Overview
//!
//! [`SampleBuffer`] is the only mutable state of the engine. It keeps the last
//! `W` accepted readings together with the moving ranges between consecutive
//! readings, and everything else (limits, capability, forecast, zones) is
//! derived from it on demand.
//!
//! ## Invariants
//!
//! - `moving_ranges().len() == readings().len().saturating_sub(1)` after every
//!   call, including across eviction
//! - the retained readings are a contiguous suffix of the accepted stream
//! - sequence indices increase by one per accepted reading and are never reused
//!
//! ## Eviction
//!
//! ```text
//! W = 3
//! push 35.5  readings [35.5]              ranges []
//! push 36.0  readings [35.5, 36.0]        ranges [0.5]
//! push 35.8  readings [35.5, 36.0, 35.8]  ranges [0.5, 0.2]
//! push 38.2  readings [36.0, 35.8, 38.2]  ranges [0.2, 2.4]
//!                      ↑ 35.5 evicted             ↑ 0.5 evicted
//! ```
//!
//! The range between an evicted reading and its successor is dropped with it,
//! so every retained range is between two retained readings.

use crate::{
    buffer::CircularBuffer,
    constants::buffers::{DEFAULT_WINDOW, MIN_WINDOW},
    errors::{SpcError, SpcResult},
    traits::{Reading, SequenceIndex, Validatable},
};

/// Bounded window of readings and their moving ranges
///
/// ## Type Parameter
///
/// - `W`: window capacity, at least [`MIN_WINDOW`]. Checked at compile time.
///
/// ```rust
/// use spcguard_core::window::SampleBuffer;
///
/// let mut window = SampleBuffer::<3>::new();
/// for value in [35.5, 36.0, 35.8, 38.2] {
///     window.push(value)?;
/// }
///
/// assert_eq!(window.readings().collect::<Vec<_>>(), vec![36.0, 35.8, 38.2]);
/// assert_eq!(window.moving_ranges().count(), 2);
/// # Ok::<(), spcguard_core::SpcError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SampleBuffer<const W: usize = DEFAULT_WINDOW> {
    readings: CircularBuffer<Reading, W>,

    /// Moving ranges; one slot of headroom is used transiently during eviction
    moving_ranges: CircularBuffer<f64, W>,

    /// Sequence index handed to the next accepted reading
    next_sequence: SequenceIndex,
}

impl<const W: usize> SampleBuffer<W> {
    const CAPACITY_CHECK: () = assert!(W >= MIN_WINDOW, "sample window must hold at least two readings");

    /// Creates an empty window
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;

        Self {
            readings: CircularBuffer::new(),
            moving_ranges: CircularBuffer::new(),
            next_sequence: 1,
        }
    }

    /// Appends a reading, evicting the oldest one when the window is full
    ///
    /// Non-finite values are rejected and leave the window untouched.
    pub fn push(&mut self, value: f64) -> SpcResult<Reading> {
        if !value.is_valid() {
            return Err(SpcError::InvalidReading);
        }

        let reading = Reading {
            value,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        if let Some(previous) = self.readings.last() {
            // Range buffer holds at most W-1 here, so this never overwrites
            self.moving_ranges.push(libm::fabs(value - previous.value));
        }

        if self.readings.push(reading).is_some() {
            self.moving_ranges.pop_front();
        }

        Ok(reading)
    }

    /// Readings oldest to newest
    pub fn readings(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.readings.iter().map(|reading| reading.value)
    }

    /// Sequence indices of the retained readings, used as chart labels
    pub fn sequence_indices(&self) -> impl ExactSizeIterator<Item = SequenceIndex> + '_ {
        self.readings.iter().map(|reading| reading.sequence)
    }

    /// Absolute differences between consecutive retained readings
    pub fn moving_ranges(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.moving_ranges.iter().copied()
    }

    /// Most recent reading
    pub fn latest(&self) -> Option<Reading> {
        self.readings.last().copied()
    }

    /// Number of retained readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if no reading is retained
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Check if the next push will evict
    pub fn is_full(&self) -> bool {
        self.readings.is_full()
    }

    /// Window capacity `W`
    pub const fn capacity(&self) -> usize {
        W
    }

    /// Total number of readings ever accepted
    pub fn total_accepted(&self) -> u64 {
        self.next_sequence - 1
    }

    /// Drops the retained history
    ///
    /// The sequence counter keeps running so labels stay unique.
    pub fn clear(&mut self) {
        self.readings.clear();
        self.moving_ranges.clear();
    }
}

impl<const W: usize> Default for SampleBuffer<W> {
    fn default() -> Self {
        Self::new()
    }
}

//! Fixed-Size Circular Buffer for Sample History
//!
//! ## Overview
//!
//! A ring buffer with a compile-time capacity, used as backing storage for the
//! sampling window. The engine never allocates in the push path, so both the raw
//! readings and the moving ranges live in one of these.
//!
//! ## Design Rationale
//!
//! ### Why a Circular Buffer?
//!
//! The control chart only ever looks at the most recent `W` readings:
//! - Limits are recomputed over the live window
//! - The moving range needs the previous reading
//! - Older history is dropped first-in-first-out
//!
//! A circular buffer gives that with fixed memory:
//! - O(1) insertion (overwrites oldest when full)
//! - O(1) removal of the oldest entry
//! - O(n) iteration oldest to newest
//! - Zero heap allocations
//!
//! ### Why Not Use `heapless::Deque`?
//!
//! The overwrite-on-full behaviour is what a sensor window wants, and keeping the
//! logical/physical index mapping in one place makes the eviction order easy to
//! audit. `heapless` is still used for the chart series, where a plain bounded
//! vector is the right shape.
//!
//! ### Index Mapping
//!
//! ```text
//! Physical array:  [D, E, A, B, C]  (write_pos = 2, len = 5)
//!                   0  1  2  3  4
//!
//! Logical view:    [A, B, C, D, E]  (chronological order)
//!                   0  1  2  3  4
//!
//! head = (write_pos + N - len) % N
//! logical[i] = physical[(head + i) % N]
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use spcguard_core::buffer::CircularBuffer;
//!
//! let mut history: CircularBuffer<f64, 3> = CircularBuffer::new();
//! history.push(35.5);
//! history.push(36.0);
//! history.push(35.8);
//! history.push(38.2); // overwrites 35.5
//!
//! let values: Vec<f64> = history.iter().copied().collect();
//! assert_eq!(values, vec![36.0, 35.8, 38.2]);
//! assert_eq!(history.pop_front(), Some(36.0));
//! ```

/// Fixed-size circular buffer for time-series samples
///
/// ## Type Parameters
///
/// - `T`: the stored sample, `Copy` so slots can be initialised in a `const fn`.
/// - `N`: the maximum number of samples to store.
///
/// ## Internal Invariants
///
/// - `write_pos < N` whenever `N > 0`
/// - `len <= N`
/// - the `len` slots ending just before `write_pos` (wrapping) are occupied, in
///   chronological order
///
/// ## Thread Safety
///
/// This type is not thread-safe. Share it behind a mutex, as
/// [`SharedMonitor`](crate::shared::SharedMonitor) does.
#[derive(Clone)]
pub struct CircularBuffer<T: Copy, const N: usize> {
    /// Storage array using Option for unoccupied slots
    data: [Option<T>; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid samples
    len: usize,
}

impl<T: Copy, const N: usize> CircularBuffer<T, N> {
    /// Creates a new empty circular buffer
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds a sample, overwriting the oldest one when full
    ///
    /// Returns the overwritten sample, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        if N == 0 {
            return Some(item);
        }

        let evicted = if self.len == N {
            self.data[self.write_pos]
        } else {
            self.len += 1;
            None
        };

        self.data[self.write_pos] = Some(item);
        self.write_pos = (self.write_pos + 1) % N;

        evicted
    }

    /// Removes and returns the oldest sample
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let head = self.head();
        let item = self.data[head].take();
        self.len -= 1;
        item
    }

    /// Get number of stored samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of samples the buffer holds
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get the oldest sample
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Get the most recent sample
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.get(self.len - 1)
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, T, N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Clear all samples
    pub fn clear(&mut self) {
        self.data = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }

    /// Gets a sample by its logical index (0 = oldest, len-1 = newest)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.data[(self.head() + index) % N].as_ref()
    }

    /// Physical position of the oldest sample
    fn head(&self) -> usize {
        (self.write_pos + N - self.len) % N
    }
}

/// Iterator over circular buffer contents, oldest first
pub struct CircularBufferIter<'a, T: Copy, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
    index: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for CircularBufferIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, T: Copy, const N: usize> ExactSizeIterator for CircularBufferIter<'a, T, N> {}

impl<T: Copy, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + core::fmt::Debug, const N: usize> core::fmt::Debug for CircularBuffer<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

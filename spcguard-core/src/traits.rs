//! Core traits and the reading record
//!
//! Kept deliberately small: the engine consumes one scalar at a time, so the
//! only seams are "where do readings come from" and "is this number usable".

/// Sequence index assigned to each accepted reading
pub type SequenceIndex = u64;

/// Single accepted reading with its position in the stream
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Measured value
    pub value: f64,
    /// Monotonic counter, 1 for the first reading ever accepted
    pub sequence: SequenceIndex,
}

/// Producer of readings, one scalar at a time, in order
///
/// The engine does not care whether this is a real sensor driver, a network
/// poll or a canned dataset.
pub trait ReadingSource {
    /// Next reading, or `None` when the source is exhausted
    fn next_reading(&mut self) -> Option<f64>;
}

impl<S: ReadingSource + ?Sized> ReadingSource for &mut S {
    fn next_reading(&mut self) -> Option<f64> {
        (**self).next_reading()
    }
}

/// Trait for values that can be validated before entering the window
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl ReadingSource for Countdown {
        fn next_reading(&mut self) -> Option<f64> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(self.0 as f64)
        }
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }

    #[test]
    fn source_through_mutable_reference() {
        let mut source = Countdown(2);
        let by_ref = &mut source;
        assert_eq!(by_ref.next_reading(), Some(1.0));
        assert_eq!(source.next_reading(), Some(0.0));
        assert_eq!(source.next_reading(), None);
    }
}

//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if this interval contains the value, including both end points.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns true if the value lies within `[min, max)`.
    /// An interval with `max <= min` contains nothing.
    pub fn contains_half_open(&self, value: T) -> bool {
        value >= self.min && value < self.max
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;

    #[test]
    fn closed_contains_end_points() {
        let range = Interval::new(0.0, 1.0);
        assert!(range.contains(0.0));
        assert!(range.contains(0.5));
        assert!(range.contains(1.0));
        assert!(!range.contains(-0.0001));
        assert!(!range.contains(1.0001));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn half_open_excludes_max() {
        let range = Interval::new(0.0, 4.0);
        assert!(range.contains_half_open(0.0));
        assert!(range.contains_half_open(3.999));
        assert!(!range.contains_half_open(4.0));

        // Reversed and empty intervals contain nothing
        assert!(!Interval::new(4.0, 0.0).contains_half_open(2.0));
        assert!(!Interval::new(2.0, 2.0).contains_half_open(2.0));
    }
}

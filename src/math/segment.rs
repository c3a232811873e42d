use super::{Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The parameters which lie on a segment, end points included.
const UNIT: Interval<f64> = Interval::new(0.0, 1.0);

/// A straight line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSegment2d {
    /// The start of the segment.
    pub from: Point2d,
    /// The end of the segment.
    pub to: Point2d,
}

impl LineSegment2d {
    /// Creates a line segment from its two end points.
    pub const fn from_ends(from: Point2d, to: Point2d) -> Self {
        Self { from, to }
    }

    /// The vector from the start to the end of the segment.
    pub fn vector(&self) -> Vector2d {
        self.to - self.from
    }

    /// The length of the segment.
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Samples the point at the fraction `t` along the segment.
    pub fn lerp(&self, t: f64) -> Point2d {
        self.from + t * self.vector()
    }

    /// Finds where this segment crosses `other`.
    ///
    /// Returns the fraction along `self` of the crossing, provided the crossing
    /// lies within both segments. End points count as crossings, so a segment which
    /// only grazes a corner of `other` still returns `Some(0.0)` or `Some(1.0)`.
    ///
    /// Parallel and collinear segments never cross, even when they overlap;
    /// neither does a segment of zero length.
    pub fn intersect_at(&self, other: &Self) -> Option<f64> {
        let p1_vec = self.vector();
        let p2_vec = other.vector();
        let p1p2 = self.from - other.from;

        let det = p1_vec.perp_dot(p2_vec);
        if det == 0.0 {
            return None;
        }

        let p1_frac = p2_vec.perp_dot(p1p2) / det;
        if !UNIT.contains(p1_frac) {
            return None;
        }

        let p2_frac = p1_vec.perp_dot(p1p2) / det;
        if !UNIT.contains(p2_frac) {
            return None;
        }

        Some(p1_frac)
    }
}

//! Line-of-sight obstruction of radio paths.

use crate::debug::debug_query;
use crate::math::{LineSegment2d, Point2d, Polygon};
use crate::obstacle::{footprint, ObstacleAttributes, VehiclePose};
use log::trace;

/// The outcome of testing a radio path against an obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Obstruction {
    /// The path does not pass through the obstacle.
    Clear,
    /// The sender lies within the obstacle, so the path is blocked from its origin.
    SenderInside,
    /// The path enters the obstacle through one of its edges.
    Crossing {
        /// The distance from the sender to the first crossing, in m.
        distance: f64,
    },
    /// The path crosses no edge, yet the receiver lies within the obstacle.
    /// This can only arise for a receiver on the obstacle's boundary, where rounding
    /// lets the edge test and the containment test disagree.
    ReceiverInside {
        /// The distance from the sender to the receiver, in m.
        distance: f64,
    },
}

impl Obstruction {
    /// The distance along the path from the sender to the obstruction,
    /// or `None` if the path is clear.
    pub fn distance(&self) -> Option<f64> {
        match *self {
            Obstruction::Clear => None,
            Obstruction::SenderInside => Some(0.0),
            Obstruction::Crossing { distance } => Some(distance),
            Obstruction::ReceiverInside { distance } => Some(distance),
        }
    }

    /// Whether the obstacle blocks the path at all.
    pub fn is_blocked(&self) -> bool {
        !matches!(self, Obstruction::Clear)
    }
}

/// Determines whether, and where, a vehicle blocks the radio path from `sender` to `receiver`.
///
/// # Parameters
/// * `sender` - The position of the transmitting antenna
/// * `receiver` - The position of the receiving antenna
/// * `pose` - The pose of the obstructing vehicle at the time of transmission
/// * `attributes` - The dimensions of the obstructing vehicle
pub fn query_obstruction(
    sender: Point2d,
    receiver: Point2d,
    pose: &VehiclePose,
    attributes: &ObstacleAttributes,
) -> Obstruction {
    shape_obstruction(&footprint(pose, attributes), sender, receiver)
}

/// Determines whether, and where, an arbitrary polygon blocks the path from `sender` to `receiver`.
pub fn shape_obstruction(shape: &Polygon, sender: Point2d, receiver: Point2d) -> Obstruction {
    debug_query(shape, sender, receiver);
    if shape.contains(sender) {
        trace!("sender inside obstacle");
        return Obstruction::SenderInside;
    }

    // Find the first point at which the path crosses an edge
    let path = LineSegment2d::from_ends(sender, receiver);
    let first = shape
        .edges()
        .enumerate()
        .filter_map(|(idx, edge)| {
            let frac = path.intersect_at(&edge)?;
            trace!("path crosses edge {} at {}", idx, frac);
            Some(frac)
        })
        .fold(None, |first: Option<f64>, frac| {
            Some(first.map_or(frac, |f| f64::min(f, frac)))
        });

    let result = match first {
        Some(frac) => Obstruction::Crossing {
            distance: frac * path.length(),
        },
        None if shape.contains(receiver) => Obstruction::ReceiverInside {
            distance: path.length(),
        },
        None => Obstruction::Clear,
    };
    trace!("obstruction: {:?}", result);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// A vehicle occupying the rectangle from (0, 0) to (10, 4).
    fn rectangle() -> (VehiclePose, ObstacleAttributes) {
        let pose = VehiclePose::new(Point2d::new(0.0, 2.0), 0.0);
        let attributes = ObstacleAttributes {
            length: 10.0,
            width: 4.0,
            antenna_offset: 10.0,
        };
        (pose, attributes)
    }

    fn query(sender: (f64, f64), receiver: (f64, f64)) -> Obstruction {
        let (pose, attributes) = rectangle();
        query_obstruction(
            Point2d::new(sender.0, sender.1),
            Point2d::new(receiver.0, receiver.1),
            &pose,
            &attributes,
        )
    }

    #[test]
    fn path_through_obstacle() {
        let result = query((-5.0, 2.0), (15.0, 2.0));
        assert_eq!(result, Obstruction::Crossing { distance: 5.0 });
        assert_eq!(result.distance(), Some(5.0));
        assert!(result.is_blocked());
    }

    #[test]
    fn sender_inside() {
        for receiver in [(15.0, 2.0), (5.0, 3.0), (-100.0, 50.0)] {
            let result = query((5.0, 2.0), receiver);
            assert_eq!(result, Obstruction::SenderInside);
            assert_eq!(result.distance(), Some(0.0));
        }
    }

    #[test]
    fn path_above_obstacle() {
        let result = query((-5.0, 10.0), (15.0, 10.0));
        assert_eq!(result, Obstruction::Clear);
        assert_eq!(result.distance(), None);
        assert!(!result.is_blocked());
    }

    #[test]
    fn path_stops_short() {
        assert_eq!(query((-5.0, 2.0), (-1.0, 2.0)), Obstruction::Clear);
    }

    #[test]
    fn receiver_inside_crosses_edge() {
        let result = query((-6.0, 2.0), (2.0, 2.0));
        assert_eq!(result, Obstruction::Crossing { distance: 6.0 });
    }

    #[test]
    fn grazing_corner() {
        // The path touches the top-right corner and nothing else
        let result = query((8.0, 6.0), (12.0, 2.0));
        assert!(result.is_blocked());
        assert_approx_eq!(result.distance().unwrap(), 8.0_f64.sqrt());
    }

    #[test]
    fn path_along_edge() {
        // Runs along the top edge, touching both top corners
        assert_eq!(
            query((-5.0, 4.0), (15.0, 4.0)),
            Obstruction::Crossing { distance: 5.0 }
        );
    }

    #[test]
    fn degenerate_path() {
        assert_eq!(query((3.0, 3.0), (3.0, 3.0)), Obstruction::SenderInside);
        assert_eq!(query((-3.0, 3.0), (-3.0, 3.0)), Obstruction::Clear);
    }

    #[test]
    fn distance_of_each_outcome() {
        assert_eq!(Obstruction::Clear.distance(), None);
        assert_eq!(Obstruction::SenderInside.distance(), Some(0.0));
        assert_eq!(Obstruction::Crossing { distance: 3.5 }.distance(), Some(3.5));
        let enclosed = Obstruction::ReceiverInside { distance: 12.0 };
        assert_eq!(enclosed.distance(), Some(12.0));
        assert!(enclosed.is_blocked());
    }

    #[test]
    fn receiver_on_rotated_edge() {
        // The receiver sits on the boundary of a rotated vehicle, where rounding
        // puts it inside while the path just misses every edge
        let pose = VehiclePose::new(
            Point2d::new(-4.696826391348987, -1.929137166257593),
            -2.85886274639382,
        );
        let attributes = ObstacleAttributes {
            length: 4.5,
            width: 1.8,
            antenna_offset: 1.0,
        };
        let sender = Point2d::new(27.067878168128424, -19.472302185426443);
        let receiver = Point2d::new(-4.730651250439102, -2.8565202570886026);

        let result = query_obstruction(sender, receiver, &pose, &attributes);
        let total = LineSegment2d::from_ends(sender, receiver).length();
        assert_eq!(result, Obstruction::ReceiverInside { distance: total });
        assert_eq!(result.distance(), Some(total));
    }

    #[test]
    fn rotated_obstacle() {
        // A 4 x 2 vehicle centred on the origin, turned to face along the y-axis
        let pose = VehiclePose::new(Point2d::new(0.0, 0.0), -std::f64::consts::FRAC_PI_2);
        let attributes = ObstacleAttributes {
            length: 4.0,
            width: 2.0,
            antenna_offset: 2.0,
        };
        let sender = Point2d::new(-10.0, 1.5);
        let receiver = Point2d::new(10.0, 1.5);
        let result = query_obstruction(sender, receiver, &pose, &attributes);
        assert_approx_eq!(result.distance().unwrap(), 9.0);

        // Passes beyond the front of the vehicle
        let sender = Point2d::new(-10.0, 2.5);
        let receiver = Point2d::new(10.0, 2.5);
        let result = query_obstruction(sender, receiver, &pose, &attributes);
        assert_eq!(result, Obstruction::Clear);
    }
}

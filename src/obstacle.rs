use crate::error::ObstacleError;
use crate::math::{rotate, Point2d, Polygon, Vector2d};
use crate::obstruction::{shape_obstruction, Obstruction};
use crate::util::Interval;
use crate::ObstacleId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The attributes of a vehicle acting as an obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstacleAttributes {
    /// The vehicle length in m.
    pub length: f64,
    /// The vehicle width in m.
    pub width: f64,
    /// Longitudinal distance from the vehicle's reference point (where its antenna is
    /// mounted) forward to the front of the vehicle, in m. An offset of zero places
    /// the reference point on the front bumper.
    pub antenna_offset: f64,
}

/// The position and heading of a vehicle at one instant of the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehiclePose {
    /// The world space coordinates of the vehicle's reference point.
    pub position: Point2d,
    /// The heading in radians. The body is rotated clockwise by this angle,
    /// so a heading of zero faces along the positive x-axis.
    pub heading: f64,
}

/// A vehicle whose body may block radio transmissions.
#[derive(Clone, Debug)]
pub struct VehicleObstacle {
    /// The obstacle's ID.
    id: ObstacleId,
    /// The vehicle's dimensions.
    attributes: ObstacleAttributes,
    /// The most recent pose reported for the vehicle.
    pose: VehiclePose,
}

impl Default for ObstacleAttributes {
    fn default() -> Self {
        Self {
            length: 5.0,
            width: 1.8,
            antenna_offset: 0.0,
        }
    }
}

impl ObstacleAttributes {
    /// Checks that the dimensions describe a real vehicle body.
    pub fn validate(&self) -> Result<(), ObstacleError> {
        for (name, value) in [("length", self.length), ("width", self.width)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ObstacleError::InvalidDimension { name, value });
            }
        }
        if !Interval::new(0.0, self.length).contains(self.antenna_offset) {
            return Err(ObstacleError::InvalidAntennaOffset {
                offset: self.antenna_offset,
                length: self.length,
            });
        }
        Ok(())
    }
}

impl VehiclePose {
    /// Creates a new pose.
    pub const fn new(position: Point2d, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Checks that the pose is finite.
    pub fn validate(&self) -> Result<(), ObstacleError> {
        let finite = [self.position.x, self.position.y, self.heading]
            .iter()
            .all(|v| v.is_finite());
        if finite {
            Ok(())
        } else {
            Err(ObstacleError::InvalidPose)
        }
    }
}

/// Computes the outline of a vehicle body in world space.
///
/// The corners are emitted in the order rear-left, front-left, front-right, rear-right.
pub fn footprint(pose: &VehiclePose, attributes: &ObstacleAttributes) -> Polygon {
    let l = attributes.length;
    let o = attributes.antenna_offset;
    let w = 0.5 * attributes.width;

    let corners = [
        Vector2d::new(-(l - o), -w),
        Vector2d::new(o, -w),
        Vector2d::new(o, w),
        Vector2d::new(-(l - o), w),
    ];
    Polygon::from(corners.map(|c| pose.position + rotate(c, -pose.heading)))
}

impl VehicleObstacle {
    /// Creates a new vehicle obstacle.
    pub(crate) fn new(id: ObstacleId, attributes: &ObstacleAttributes, pose: VehiclePose) -> Self {
        Self {
            id,
            attributes: *attributes,
            pose,
        }
    }

    /// Gets the obstacle's ID.
    pub fn id(&self) -> ObstacleId {
        self.id
    }

    /// The vehicle's dimensions.
    pub fn attributes(&self) -> &ObstacleAttributes {
        &self.attributes
    }

    /// The vehicle's length in m.
    pub fn length(&self) -> f64 {
        self.attributes.length
    }

    /// The vehicle's width in m.
    pub fn width(&self) -> f64 {
        self.attributes.width
    }

    /// The most recent pose of the vehicle.
    pub fn pose(&self) -> VehiclePose {
        self.pose
    }

    /// The coordinates in world space of the vehicle's reference point.
    pub fn position(&self) -> Point2d {
        self.pose.position
    }

    /// The vehicle's heading in radians.
    pub fn heading(&self) -> f64 {
        self.pose.heading
    }

    /// The outline of the vehicle at its current pose.
    pub fn shape(&self) -> Polygon {
        footprint(&self.pose, &self.attributes)
    }

    /// Determines whether, and where, the vehicle blocks the path from `sender` to `receiver`.
    pub fn obstruction(&self, sender: Point2d, receiver: Point2d) -> Obstruction {
        shape_obstruction(&self.shape(), sender, receiver)
    }

    /// Moves the vehicle to a new pose.
    pub(crate) fn set_pose(&mut self, pose: VehiclePose) {
        self.pose = pose;
    }
}

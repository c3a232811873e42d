use crate::ObstacleId;
use thiserror::Error;

/// An error raised when validating or looking up an obstacle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObstacleError {
    #[error("invalid {name}: {value} (must be finite and positive)")]
    InvalidDimension { name: &'static str, value: f64 },
    #[error("invalid antenna offset: {offset} (must lie within the vehicle length of {length})")]
    InvalidAntennaOffset { offset: f64, length: f64 },
    #[error("invalid pose: position and heading must be finite")]
    InvalidPose,
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("unknown obstacle: {0:?}")]
    UnknownObstacle(ObstacleId),
}

use super::Vector2d;
use cgmath::{Basis2, Rad, Rotation, Rotation2};

/// Rotates a vector counter-clockwise by `angle` radians.
pub fn rotate(vec: Vector2d, angle: f64) -> Vector2d {
    Basis2::from_angle(Rad(angle)).rotate_vector(vec)
}

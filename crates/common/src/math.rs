//! Vector and rotation value types exchanged with the game engine.
//!
//! These are plain `f32` tuples with just enough geometry for the
//! approximate-equality checks in [`crate::approx`].

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Two-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared length, avoiding the square root.
    pub fn sqr_magnitude(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Three-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared length, avoiding the square root.
    pub fn sqr_magnitude(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Rotation quaternion stored as `x, y, z, w` (w is the scalar part).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// Dot products above `1 - IDENTITY_EPSILON` count as the same rotation.
    const IDENTITY_EPSILON: f32 = 0.000_001;

    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle_degrees` around a unit-length `axis`.
    pub fn from_axis_angle(axis: Vec3, angle_degrees: f32) -> Self {
        let half = angle_degrees.to_radians() * 0.5;
        let (sin, cos) = half.sin_cos();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Angle in degrees between two rotations, in `[0, 180]`.
    ///
    /// `q` and `-q` describe the same rotation, so the absolute dot product
    /// is used. NaN components give a NaN angle.
    pub fn angle(self, other: Self) -> f32 {
        let dot = self.dot(other);
        // f32::min would turn NaN into 1.0
        if dot.is_nan() {
            return f32::NAN;
        }
        let dot = dot.abs().min(1.0);
        if dot > 1.0 - Self::IDENTITY_EPSILON {
            return 0.0;
        }
        (dot.acos() * 2.0).to_degrees()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_sqr_magnitude_of_difference() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0, 0.0, 1.0);
        assert_eq!((a - b).sqr_magnitude(), 8.0);
    }

    #[test]
    fn test_vec2_sqr_magnitude_of_difference() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!((a - Vec2::ZERO).sqr_magnitude(), 25.0);
    }

    #[test]
    fn test_angle_identical_rotation_is_zero() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 35.0);
        assert_eq!(q.angle(q), 0.0);
    }

    #[test]
    fn test_angle_between_axis_rotations() {
        let up = Vec3::new(0.0, 1.0, 0.0);
        let a = Quaternion::from_axis_angle(up, 10.0);
        let b = Quaternion::from_axis_angle(up, 40.0);
        assert!((a.angle(b) - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_angle_ignores_quaternion_sign() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), 90.0);
        let negated = Quaternion::new(-q.x, -q.y, -q.z, -q.w);
        assert_eq!(q.angle(negated), 0.0);
        assert_eq!(negated.angle(q), 0.0);
    }

    #[test]
    fn test_angle_with_nan_component_is_nan() {
        let nan = Quaternion::new(f32::NAN, 0.0, 0.0, 1.0);
        assert!(nan.angle(Quaternion::IDENTITY).is_nan());
        assert!(Quaternion::IDENTITY.angle(nan).is_nan());
    }

    #[test]
    fn test_default_quaternion_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    }
}

//! Approximate equality for engine values.
//!
//! Every comparison uses a strictly exclusive tolerance, so a tolerance of
//! zero (or below) never matches, and NaN never matches anything.

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;
use crate::math::{Quaternion, Vec2, Vec3};

/// Equality within a tolerance whose meaning depends on the type.
///
/// | Type | Compared quantity |
/// |---|---|
/// | [`Vec3`], [`Vec2`] | squared distance |
/// | [`Quaternion`] | angle in degrees |
/// | `f32` | absolute difference |
pub trait AlmostEquals {
    fn almost_equals(&self, other: &Self, tolerance: f32) -> bool;
}

impl AlmostEquals for Vec3 {
    fn almost_equals(&self, other: &Self, sqr_magnitude_precision: f32) -> bool {
        (*self - *other).sqr_magnitude() < sqr_magnitude_precision
    }
}

impl AlmostEquals for Vec2 {
    fn almost_equals(&self, other: &Self, sqr_magnitude_precision: f32) -> bool {
        (*self - *other).sqr_magnitude() < sqr_magnitude_precision
    }
}

impl AlmostEquals for Quaternion {
    fn almost_equals(&self, other: &Self, max_angle: f32) -> bool {
        self.angle(*other) < max_angle
    }
}

impl AlmostEquals for f32 {
    fn almost_equals(&self, other: &Self, max_difference: f32) -> bool {
        (self - other).abs() < max_difference
    }
}

/// Free-function form of [`AlmostEquals::almost_equals`].
///
/// # Examples
///
/// ```
/// use netprops_common::{almost_equals, Vec3};
///
/// let a = Vec3::new(0.0, 0.0, 0.0);
/// let b = Vec3::new(0.01, 0.0, 0.0);
/// assert!(almost_equals(&a, &b, 0.001));
/// assert!(!almost_equals(&a, &b, 0.0));
/// ```
pub fn almost_equals<T: AlmostEquals>(a: &T, b: &T, tolerance: f32) -> bool {
    a.almost_equals(b, tolerance)
}

fn default_position_sqr_magnitude() -> f32 {
    0.001
}

fn default_scale_sqr_magnitude() -> f32 {
    0.001
}

fn default_rotation_degrees() -> f32 {
    1.0
}

fn default_scalar() -> f32 {
    0.001
}

/// Thresholds used to decide whether a synced value changed enough to send.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyncTolerances {
    /// Squared distance a position must move
    #[serde(default = "default_position_sqr_magnitude")]
    pub position_sqr_magnitude: f32,

    /// Squared distance a scale vector must change
    #[serde(default = "default_scale_sqr_magnitude")]
    pub scale_sqr_magnitude: f32,

    /// Degrees a rotation must turn
    #[serde(default = "default_rotation_degrees")]
    pub rotation_degrees: f32,

    /// Absolute difference a plain float must change
    #[serde(default = "default_scalar")]
    pub scalar: f32,
}

impl Default for SyncTolerances {
    fn default() -> Self {
        Self {
            position_sqr_magnitude: default_position_sqr_magnitude(),
            scale_sqr_magnitude: default_scale_sqr_magnitude(),
            rotation_degrees: default_rotation_degrees(),
            scalar: default_scalar(),
        }
    }
}

impl SyncTolerances {
    /// Checks that every tolerance is finite and not negative.
    pub fn validate(&self) -> Result<(), PropertyError> {
        let fields = [
            ("position_sqr_magnitude", self.position_sqr_magnitude),
            ("scale_sqr_magnitude", self.scale_sqr_magnitude),
            ("rotation_degrees", self.rotation_degrees),
            ("scalar", self.scalar),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PropertyError::invalid_tolerance(field, value));
            }
        }
        Ok(())
    }

    pub fn position_changed(&self, last: Vec3, current: Vec3) -> bool {
        !last.almost_equals(&current, self.position_sqr_magnitude)
    }

    pub fn scale_changed(&self, last: Vec3, current: Vec3) -> bool {
        !last.almost_equals(&current, self.scale_sqr_magnitude)
    }

    pub fn rotation_changed(&self, last: Quaternion, current: Quaternion) -> bool {
        !last.almost_equals(&current, self.rotation_degrees)
    }

    pub fn scalar_changed(&self, last: f32, current: f32) -> bool {
        !last.almost_equals(&current, self.scalar)
    }
}

//! Axis-angle construction

use nalgebra as na;
use nalgebra::{RealField, Scalar, Vector3};
use serde::{Deserialize, Serialize};

use super::quaternion::Quaternion;

/// Rotation axis and angle [rad]
///
/// The axis may have any nonzero length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct AxisAngle<T> {
    /// Rotation axis, not necessarily unit length
    pub axis: Vector3<T>,
    /// Rotation angle [rad]
    pub angle: T,
}

impl<T: RealField + Copy> PartialEq for AxisAngle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.axis == other.axis && self.angle == other.angle
    }
}

impl<T: RealField + Copy> AxisAngle<T> {
    /// Create an axis-angle pair; the axis is normalized only on conversion
    pub fn new(axis: Vector3<T>, angle: T) -> Self {
        Self { axis, angle }
    }
}

/// Compute quaternion from axis-angle representation
///
/// # Arguments
/// * `axis` - Rotation axis, normalized here; must be nonzero
/// * `angle` - Rotation angle [rad]
///
/// The axis is taken by value and the local copy is normalized in place, so
/// the caller's vector is left as it was. A zero axis yields NaN components.
pub fn quaternion_from_axis_angle<T: RealField + Copy>(mut axis: Vector3<T>, angle: T) -> Quaternion<T> {
    axis.normalize_mut();

    let half: T = na::convert(0.5);
    let (sin_a, cos_a) = (angle * half).sin_cos();

    Quaternion::new(cos_a, axis.x * sin_a, axis.y * sin_a, axis.z * sin_a)
}

impl<T: RealField + Copy> Quaternion<T> {
    /// Construction from an axis angle pair
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        quaternion_from_axis_angle(axis, angle)
    }
}

impl<T: RealField + Copy> From<AxisAngle<T>> for Quaternion<T> {
    fn from(axis_angle: AxisAngle<T>) -> Self {
        quaternion_from_axis_angle(axis_angle.axis, axis_angle.angle)
    }
}

//! Euler angle construction
//!
//! One fixed convention: roll about X, pitch about Y, yaw about Z, composed
//! as q = q_z(yaw) ⊗ q_y(pitch) ⊗ q_x(roll). Applied to a vector, roll acts
//! first and yaw last.

use nalgebra as na;
use nalgebra::RealField;
use serde::{Deserialize, Serialize};

use super::quaternion::Quaternion;

/// Pitch/yaw/roll triple [rad]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles<T> {
    /// Rotation about Y [rad]
    pub pitch: T,
    /// Rotation about Z [rad]
    pub yaw: T,
    /// Rotation about X [rad]
    pub roll: T,
}

impl<T: RealField + Copy> EulerAngles<T> {
    /// Create a triple from angles in radians
    pub fn new(pitch: T, yaw: T, roll: T) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// Quaternion from Euler angles
///
/// # Arguments
/// * `pitch` - Rotation about Y [rad]
/// * `yaw` - Rotation about Z [rad]
/// * `roll` - Rotation about X [rad]
///
/// # Returns
/// Unit quaternion, up to rounding
pub fn quaternion_from_euler<T: RealField + Copy>(pitch: T, yaw: T, roll: T) -> Quaternion<T> {
    let half: T = na::convert(0.5);

    let (sin_pitch, cos_pitch) = (pitch * half).sin_cos();
    let (sin_yaw, cos_yaw) = (yaw * half).sin_cos();
    let (sin_roll, cos_roll) = (roll * half).sin_cos();

    let cos_pitch_cos_yaw = cos_pitch * cos_yaw;
    let sin_pitch_sin_yaw = sin_pitch * sin_yaw;

    Quaternion::new(
        cos_roll * cos_pitch_cos_yaw + sin_roll * sin_pitch_sin_yaw,
        sin_roll * cos_pitch_cos_yaw - cos_roll * sin_pitch_sin_yaw,
        cos_roll * sin_pitch * cos_yaw + sin_roll * cos_pitch * sin_yaw,
        cos_roll * cos_pitch * sin_yaw - sin_roll * sin_pitch * cos_yaw,
    )
}

impl<T: RealField + Copy> Quaternion<T> {
    /// Construction from euler angles
    pub fn from_euler(pitch: T, yaw: T, roll: T) -> Self {
        quaternion_from_euler(pitch, yaw, roll)
    }
}

impl<T: RealField + Copy> From<EulerAngles<T>> for Quaternion<T> {
    fn from(angles: EulerAngles<T>) -> Self {
        quaternion_from_euler(angles.pitch, angles.yaw, angles.roll)
    }
}

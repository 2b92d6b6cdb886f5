//! Quaternion value type
//!
//! A rotation stored as `w + xi + yj + zk`. The type is a plain aggregate:
//! nothing keeps it at unit norm, and the conversion constructors only
//! produce unit quaternions when their inputs are valid rotations.
//!
//! Quaternion algebra (products, interpolation) is left to `nalgebra`;
//! convert with [`From`] or [`Quaternion::to_unit`].

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra as na;
use nalgebra::RealField;
use serde::{Deserialize, Serialize};

/// Rotation quaternion with components (w, x, y, z)
///
/// `Default` is the zero quaternion `(0, 0, 0, 0)`, which is *not* a
/// rotation. It marks an unset value; use [`Quaternion::identity`] for
/// "no rotation".
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    /// Scalar part
    pub w: T,
    /// i component
    pub x: T,
    /// j component
    pub y: T,
    /// k component
    pub z: T,
}

impl<T: RealField + Copy> Default for Quaternion<T> {
    fn default() -> Self {
        let zero = na::zero::<T>();
        Self::new(zero, zero, zero, zero)
    }
}

impl<T: RealField + Copy> Quaternion<T> {
    /// Create a quaternion from its components
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Identity rotation (1, 0, 0, 0)
    pub fn identity() -> Self {
        let zero = na::zero::<T>();
        Self::new(na::one::<T>(), zero, zero, zero)
    }

    /// Scalar part
    pub fn w(&self) -> T {
        self.w
    }

    /// i component
    pub fn x(&self) -> T {
        self.x
    }

    /// j component
    pub fn y(&self) -> T {
        self.y
    }

    /// k component
    pub fn z(&self) -> T {
        self.z
    }

    /// Components as `[w, x, y, z]`
    pub fn to_array(&self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// w² + x² + y² + z²
    pub fn norm_squared(&self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm. Reported only; nothing here renormalizes.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Check if the quaternion has unit norm within `tolerance`
    pub fn is_unit(&self, tolerance: T) -> bool {
        let deviation = self.norm() - na::one::<T>();
        deviation < tolerance && -deviation < tolerance
    }

    /// The other representative of the same rotation, `-q`
    pub fn antipode(&self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }

    /// Whether `self` and `other` encode the same rotation
    ///
    /// Quaternions double-cover the rotation group, so `q` and `-q` compare
    /// equal here even though their components differ.
    pub fn same_rotation(&self, other: &Self, epsilon: T) -> bool {
        self.abs_diff_eq(other, epsilon) || self.abs_diff_eq(&other.antipode(), epsilon)
    }

    /// Convert to a `nalgebra` unit quaternion
    ///
    /// Unlike every other conversion in this crate, this normalizes.
    pub fn to_unit(&self) -> na::UnitQuaternion<T> {
        na::UnitQuaternion::from_quaternion((*self).into())
    }
}

impl<T: RealField + Copy> From<Quaternion<T>> for na::Quaternion<T> {
    fn from(q: Quaternion<T>) -> Self {
        na::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl<T: RealField + Copy> From<na::Quaternion<T>> for Quaternion<T> {
    fn from(q: na::Quaternion<T>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl<T: RealField + Copy> From<na::UnitQuaternion<T>> for Quaternion<T> {
    fn from(q: na::UnitQuaternion<T>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl<T: RealField + Copy> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        <T as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: RealField + Copy> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        <T as RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T: RealField + Copy> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        <T as UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps)
            && self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

//! Rotation matrix conversions
//!
//! Matrix → quaternion uses Shepperd's method: the direct trace formula when
//! `1 + trace` is comfortably positive, otherwise a pivot on the largest
//! diagonal element so the divisor never gets small.
//!
//! Matrices act on column vectors (`v' = R v`), matching `nalgebra`'s
//! `Rotation3`.

use nalgebra as na;
use nalgebra::{Matrix3, RealField, Vector3};
use tracing::trace;

use super::quaternion::Quaternion;
use crate::config::ExtractionConfig;
use crate::TRACE_EPSILON;

/// Which formula the matrix extraction uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionBranch {
    /// `1 + trace` above the threshold
    Trace,
    /// Pivot on `m[(0, 0)]`
    PivotX,
    /// Pivot on `m[(1, 1)]`
    PivotY,
    /// Pivot on `m[(2, 2)]`
    PivotZ,
}

/// Select the extraction formula for `m`
///
/// Comparisons are strict. A tie for the largest diagonal element never
/// selects `PivotX`, and `m[(1, 1)] == m[(2, 2)]` falls through to `PivotZ`.
pub fn extraction_branch<T: RealField + Copy>(m: &Matrix3<T>, threshold: T) -> ExtractionBranch {
    let (m00, m11, m22) = (m[(0, 0)], m[(1, 1)], m[(2, 2)]);
    let t = na::one::<T>() + m00 + m11 + m22;

    if t > threshold {
        ExtractionBranch::Trace
    } else if m00 > m11 && m00 > m22 {
        ExtractionBranch::PivotX
    } else if m11 > m22 {
        ExtractionBranch::PivotY
    } else {
        ExtractionBranch::PivotZ
    }
}

/// Quaternion from rotation matrix
///
/// The result is undefined if `m` is not orthonormal: it is still computed,
/// just meaningless. Near 180° the pivot branches return the representative
/// whose pivot component is negative.
pub fn quaternion_from_matrix<T: RealField + Copy>(m: &Matrix3<T>) -> Quaternion<T> {
    quaternion_from_matrix_with_threshold(m, na::convert(TRACE_EPSILON))
}

fn quaternion_from_matrix_with_threshold<T: RealField + Copy>(
    m: &Matrix3<T>,
    threshold: T,
) -> Quaternion<T> {
    let one = na::one::<T>();
    let two: T = na::convert(2.0);
    let quarter: T = na::convert(0.25);

    let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

    match extraction_branch(m, threshold) {
        ExtractionBranch::Trace => {
            // s = 4w
            let s = (one + m00 + m11 + m22).sqrt() * two;
            Quaternion::new(
                quarter * s,
                (m21 - m12) / s,
                (m02 - m20) / s,
                (m10 - m01) / s,
            )
        }
        ExtractionBranch::PivotX => {
            trace!(pivot = "x", "near-half-turn matrix extraction");
            // s = 4|x|
            let s = (one + m00 - m11 - m22).sqrt() * two;
            Quaternion::new(
                (m12 - m21) / s,
                -quarter * s,
                -(m01 + m10) / s,
                -(m02 + m20) / s,
            )
        }
        ExtractionBranch::PivotY => {
            trace!(pivot = "y", "near-half-turn matrix extraction");
            let s = (one + m11 - m00 - m22).sqrt() * two;
            Quaternion::new(
                (m20 - m02) / s,
                -(m01 + m10) / s,
                -quarter * s,
                -(m12 + m21) / s,
            )
        }
        ExtractionBranch::PivotZ => {
            trace!(pivot = "z", "near-half-turn matrix extraction");
            let s = (one + m22 - m00 - m11).sqrt() * two;
            Quaternion::new(
                (m01 - m10) / s,
                -(m02 + m20) / s,
                -(m12 + m21) / s,
                -quarter * s,
            )
        }
    }
}

/// Rotation matrix from quaternion
///
/// Closed-form expansion with no normalization. A non-unit quaternion gives
/// a scaled, non-orthonormal matrix.
pub fn matrix_from_quaternion<T: RealField + Copy>(q: &Quaternion<T>) -> Matrix3<T> {
    let one = na::one::<T>();
    let two: T = na::convert(2.0);
    let Quaternion { w, x, y, z } = *q;

    Matrix3::new(
        one - two * (y * y + z * z), two * (x * y - z * w),       two * (x * z + y * w),
        two * (x * y + z * w),       one - two * (x * x + z * z), two * (y * z - x * w),
        two * (x * z - y * w),       two * (y * z + x * w),       one - two * (x * x + y * y),
    )
}

/// Rotate a vector by quaternion
///
/// v' = R(q) * v
pub fn rotate_vector<T: RealField + Copy>(q: &Quaternion<T>, v: &Vector3<T>) -> Vector3<T> {
    matrix_from_quaternion(q) * v
}

impl<T: RealField + Copy> Quaternion<T> {
    /// Construct from a rotation matrix. Result is undefined if the matrix is
    /// not orthonormal.
    pub fn from_matrix(m: &Matrix3<T>) -> Self {
        quaternion_from_matrix(m)
    }

    /// Construct from a rotation matrix using the threshold in `config`
    pub fn from_matrix_with(m: &Matrix3<T>, config: &ExtractionConfig) -> Self {
        quaternion_from_matrix_with_threshold(m, na::convert(config.trace_threshold()))
    }

    /// Returns a matrix representation of the quaternion
    pub fn to_matrix(&self) -> Matrix3<T> {
        matrix_from_quaternion(self)
    }

    /// Rotate `v` by this quaternion
    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        rotate_vector(self, v)
    }
}

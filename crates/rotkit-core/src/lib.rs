//! # rotkit Core
//!
//! Conversions between the four common representations of a 3D rotation:
//! unit quaternions, orthonormal 3×3 rotation matrices, pitch/yaw/roll Euler
//! angles and axis-angle pairs.
//!
//! ## Modules
//!
//! - [`math`]: The [`Quaternion`](math::Quaternion) value type and the conversions
//! - [`config`]: Tuning for the matrix → quaternion extraction
//!
//! Matrices and vectors are `nalgebra` types. A matrix rotates a column
//! vector as `m * v`.
//!
//! ```
//! use rotkit_core::{Quatf, Vec3f};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let q = Quatf::from_axis_angle(Vec3f::new(0.0, 0.0, 1.0), FRAC_PI_2);
//! let v = q.to_matrix() * Vec3f::new(1.0, 0.0, 0.0);
//! assert!((v.y - 1.0).abs() < 1e-6);
//! ```

pub mod config;
pub mod math;

pub use config::{ConfigError, ExtractionConfig, MAX_TRACE_THRESHOLD, MIN_TRACE_THRESHOLD};
pub use math::{AxisAngle, EulerAngles, Quaternion};

use nalgebra::{Matrix3, Vector3};

/// Single-precision quaternion
pub type Quatf = Quaternion<f32>;

/// Single-precision 3x3 matrix type
pub type Mat3f = Matrix3<f32>;

/// Single-precision 3D vector type
pub type Vec3f = Vector3<f32>;

/// Double-precision quaternion
pub type Quat = Quaternion<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// Default threshold on `1 + trace` below which matrix extraction pivots
/// on the largest diagonal element
pub const TRACE_EPSILON: f64 = 1e-5;

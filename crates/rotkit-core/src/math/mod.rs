//! Rotation representations and the conversions between them
//!
//! Implements the quaternion value type, matrix extraction and expansion,
//! Euler angle construction and axis-angle construction.

pub mod quaternion;
pub mod rotation;
pub mod euler;
pub mod axis_angle;

pub use quaternion::*;
pub use rotation::*;
pub use euler::*;
pub use axis_angle::*;

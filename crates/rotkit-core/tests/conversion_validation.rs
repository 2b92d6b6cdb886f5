//! Conversion Validation Tests
//!
//! Checks that the four rotation representations agree with each other:
//! 1. Matrix → quaternion → matrix round trips on every extraction branch
//! 2. Quaternion → matrix → quaternion returns q or -q
//! 3. Axis-angle rotations fix their own axis
//! 4. Reference scenarios with known values

use approx::assert_relative_eq;
use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use rotkit_core::math::{extraction_branch, ExtractionBranch};
use rotkit_core::{AxisAngle, EulerAngles, ExtractionConfig, Quaternion, Quatf, Vec3f};

fn rotation(axis: [f64; 3], angle: f64) -> Matrix3<f64> {
    let axis = Unit::new_normalize(Vector3::new(axis[0], axis[1], axis[2]));
    *Rotation3::from_axis_angle(&axis, angle).matrix()
}

/// Axes spread over the sphere, including the coordinate axes
fn sample_axes() -> Vec<[f64; 3]> {
    vec![
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, -2.0, 0.5],
        [-0.3, 0.2, 0.9],
        [0.05, 1.0, -0.02],
        [1.0, 1.0, 1.0],
    ]
}

mod matrix_round_trip_tests {
    use super::*;

    #[test]
    fn test_trace_branch() {
        for axis in sample_axes() {
            for angle in [0.1, 1.0, 2.0, -2.5] {
                let m = rotation(axis, angle);
                assert_eq!(extraction_branch(&m, 1e-5), ExtractionBranch::Trace);

                let back = Quaternion::from_matrix(&m).to_matrix();
                assert_relative_eq!(back, m, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_each_pivot_branch() {
        let cases = [
            ([1.0, 0.1, -0.1], ExtractionBranch::PivotX),
            ([0.1, 1.0, 0.2], ExtractionBranch::PivotY),
            ([-0.2, 0.1, 1.0], ExtractionBranch::PivotZ),
        ];

        for (axis, branch) in cases {
            let m = rotation(axis, PI);
            assert_eq!(extraction_branch(&m, 1e-5), branch);

            let q = Quaternion::from_matrix(&m);
            assert!(q.is_unit(1e-10));
            assert_relative_eq!(q.to_matrix(), m, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_pivot_component_is_negative() {
        let m = rotation([0.1, 1.0, 0.2], PI);
        let q = Quaternion::from_matrix(&m);

        assert!(q.y < 0.0);
    }

    #[test]
    fn test_near_half_turn_within_threshold() {
        // 1 + trace = 4cos²(θ/2) stays below 1e-5 for θ this close to π
        let angle = PI - 1e-4;
        for axis in sample_axes() {
            let m = rotation(axis, angle);
            assert!(1.0 + m.trace() <= 1e-5);
            assert_ne!(extraction_branch(&m, 1e-5), ExtractionBranch::Trace);

            assert_relative_eq!(Quaternion::from_matrix(&m).to_matrix(), m, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_threshold_config_keeps_rotation() {
        let config = ExtractionConfig::with_trace_threshold(0.5).unwrap();

        for axis in sample_axes() {
            let m = rotation(axis, 2.9);
            let default_q = Quaternion::from_matrix(&m);
            let configured_q = Quaternion::from_matrix_with(&m, &config);

            assert!(default_q.same_rotation(&configured_q, 1e-10));
        }
    }
}

mod quaternion_round_trip_tests {
    use super::*;

    #[test]
    fn test_returns_q_or_antipode() {
        let quaternions = [
            Quaternion::identity(),
            Quaternion::new(0.5, 0.5, 0.5, 0.5),
            Quaternion::new(0.0, 0.0, 0.0, 1.0),
            Quaternion::new(0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0),
            Quaternion::from_axis_angle(Vector3::new(0.3, -0.4, 0.8), 1.7),
            Quaternion::from_axis_angle(Vector3::new(-1.0, 0.0, 0.1), PI),
            Quaternion::from_euler(0.5, -2.0, 3.0),
        ];

        for q in quaternions {
            let back = Quaternion::from_matrix(&q.to_matrix());
            assert!(
                back.same_rotation(&q, 1e-10),
                "{:?} came back as {:?}",
                q,
                back
            );
        }
    }

    #[test]
    fn test_negative_scalar_part_comes_back_as_antipode() {
        // Trace branch always yields w > 0
        let q = Quaternion::new(-0.8, 0.6, 0.0, 0.0);
        let back = Quaternion::from_matrix(&q.to_matrix());

        assert_relative_eq!(back, q.antipode(), epsilon = 1e-12);
    }
}

mod axis_angle_consistency_tests {
    use super::*;

    #[test]
    fn test_rotation_fixes_its_axis() {
        for axis in sample_axes() {
            let axis = Vector3::new(axis[0], axis[1], axis[2]);
            for angle in [0.3, PI / 2.0, PI, -2.0] {
                let m = Quaternion::from_axis_angle(axis, angle).to_matrix();
                assert_relative_eq!(m * axis, axis, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_value_type_matches_function() {
        let aa = AxisAngle::new(Vector3::new(2.0, 0.0, -1.0), 0.9);

        assert_relative_eq!(
            Quaternion::from(aa),
            Quaternion::from_axis_angle(aa.axis, aa.angle),
            epsilon = 1e-15
        );
    }
}

mod reference_scenario_tests {
    use super::*;

    #[test]
    fn test_quarter_turn_about_z() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), PI / 2.0);

        assert_relative_eq!(q, Quaternion::new(0.7071, 0.0, 0.0, 0.7071), epsilon = 1e-4);

        let m = q.to_matrix();
        assert_relative_eq!(m * Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(m, rotation([0.0, 0.0, 1.0], PI / 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_identity_matrix_gives_identity_quaternion() {
        let q = Quaternion::from_matrix(&Matrix3::identity());

        assert_relative_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_euler_is_identity_but_default_is_zero() {
        let from_euler = Quaternion::from(EulerAngles::new(0.0, 0.0, 0.0));
        let default = Quaternion::<f64>::default();

        assert_relative_eq!(from_euler, Quaternion::identity(), epsilon = 1e-12);
        assert_eq!(default, Quaternion::new(0.0, 0.0, 0.0, 0.0));
        assert!(!from_euler.same_rotation(&default, 1e-3));
    }

    #[test]
    fn test_euler_matches_sequential_rotation() {
        // Roll first (X), then pitch (Y), then yaw (Z)
        let (pitch, yaw, roll) = (0.6, 1.2, -0.4);
        let q = Quaternion::from_euler(pitch, yaw, roll);

        let sequential = rotation([0.0, 0.0, 1.0], yaw)
            * rotation([0.0, 1.0, 0.0], pitch)
            * rotation([1.0, 0.0, 0.0], roll);

        assert_relative_eq!(q.to_matrix(), sequential, epsilon = 1e-12);
    }

    #[test]
    fn test_single_precision() {
        let q = Quatf::from_axis_angle(Vec3f::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
        let v = q.rotate(&Vec3f::new(1.0, 0.0, 0.0));

        assert_relative_eq!(v, Vec3f::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(Quatf::from_matrix(&q.to_matrix()), q, epsilon = 1e-6);
    }
}

mod serialization_tests {
    use super::*;

    #[test]
    fn test_quaternion_field_names() {
        let q: Quaternion<f64> = serde_json::from_str(r#"{"w": 1.0, "x": 0.0, "y": 0.0, "z": 0.0}"#).unwrap();

        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn test_euler_angles_from_json() {
        let angles: EulerAngles<f64> =
            serde_json::from_str(r#"{"pitch": 0.0, "yaw": 1.5707963267948966, "roll": 0.0}"#).unwrap();
        let q = Quaternion::from(angles);

        assert_relative_eq!(q, Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2), epsilon = 1e-12);
    }
}

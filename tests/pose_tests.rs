mod support;

use crate::support::approx_eq;
use nalgebra::{Matrix2, Point2, Vector2};
use sdfield::Pose;
use sdfield::float_types::{FRAC_PI_2, PI};
use sdfield::pose::rotation_2x2;

#[test]
fn rotation_matrix_basics() {
    let r0 = rotation_2x2(0.0);
    assert!(approx_eq((r0 - Matrix2::identity()).norm(), 0.0, 1e-12));

    // Quarter turn counter-clockwise sends +x to +y.
    let r = rotation_2x2(FRAC_PI_2);
    let p = r * Vector2::new(1.0, 0.0);
    assert!(approx_eq(p.x, 0.0, 1e-12));
    assert!(approx_eq(p.y, 1.0, 1e-12));
}

#[test]
fn apply_rotates_then_translates() {
    let pose = Pose::from_angle(FRAC_PI_2, Vector2::new(3.0, -1.0));
    let p = pose.apply(&Point2::new(1.0, 0.0));
    assert!(approx_eq(p.x, 3.0, 1e-12));
    assert!(approx_eq(p.y, 0.0, 1e-12));
}

#[test]
fn inverse_identity_property() {
    // applyPose(inverse(pose), applyPose(pose, p)) == p for sampled poses.
    let angles = [0.0, 0.7, 2.3, -1.1, PI, -PI / 3.0];
    let translations = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.5, -2.25),
        Vector2::new(-100.0, 42.0),
    ];
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(-3.7, 9.1),
        Point2::new(0.001, -0.002),
    ];
    for &theta in &angles {
        for &t in &translations {
            let pose = Pose::from_angle(theta, t);
            let inv = pose.inverse_orthonormal();
            for &p in &points {
                let roundtrip = inv.apply(&pose.apply(&p));
                assert!(approx_eq(roundtrip.x, p.x, 1e-9));
                assert!(approx_eq(roundtrip.y, p.y, 1e-9));
            }
        }
    }
}

#[test]
fn inverse_of_identity_is_identity() {
    let inv = Pose::identity().inverse_orthonormal();
    assert_eq!(inv, Pose::identity());
}

#[test]
fn orthonormality_check() {
    assert!(Pose::from_angle(1.234, Vector2::new(5.0, 6.0)).is_orthonormal());

    // A scaled linear part is not a pure rotation.
    let skewed = Pose {
        linear: Matrix2::new(2.0, 0.0, 0.0, 2.0),
        translation: Vector2::zeros(),
    };
    assert!(!skewed.is_orthonormal());
}

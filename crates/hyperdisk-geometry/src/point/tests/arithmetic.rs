//! Arithmetic, norm, and comparison tests for DiskPoint.

use crate::point::DiskPoint;

#[test]
fn test_add_sub_neg() {
    let a = DiskPoint::new(1.0, 2.0);
    let b = DiskPoint::new(0.5, -1.0);
    assert_eq!(a + b, DiskPoint::new(1.5, 1.0));
    assert_eq!(a - b, DiskPoint::new(0.5, 3.0));
    assert_eq!(-a, DiskPoint::new(-1.0, -2.0));
    assert_eq!(a * 2.0, DiskPoint::new(2.0, 4.0));
}

#[test]
fn test_norm_and_norm_squared() {
    let p = DiskPoint::new(0.6, 0.8);
    assert!((p.norm_squared() - 1.0).abs() < 1e-12);
    assert!((p.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn test_dot_and_cross() {
    let a = DiskPoint::new(1.0, 0.0);
    let b = DiskPoint::new(0.0, 1.0);
    assert_eq!(a.dot(&b), 0.0);
    assert_eq!(a.cross(&b), 1.0);
    assert_eq!(b.cross(&a), -1.0);
}

#[test]
fn test_distance_to_is_symmetric() {
    let a = DiskPoint::new(0.1, 0.2);
    let b = DiskPoint::new(-0.3, 0.5);
    assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-15);
    assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
}

#[test]
fn test_orientation_sign() {
    let a = DiskPoint::new(0.0, 0.0);
    let b = DiskPoint::new(1.0, 0.0);
    assert!(DiskPoint::new(0.5, 1.0).orientation(&a, &b) > 0.0);
    assert!(DiskPoint::new(0.5, -1.0).orientation(&a, &b) < 0.0);
    assert_eq!(DiskPoint::new(2.0, 0.0).orientation(&a, &b), 0.0);
}

#[test]
fn test_approx_eq_uses_tolerance() {
    let a = DiskPoint::new(0.5, 0.5);
    assert!(a.approx_eq(&DiskPoint::new(0.5 + 5e-7, 0.5 - 5e-7)));
    assert!(!a.approx_eq(&DiskPoint::new(0.5 + 2e-6, 0.5)));
    assert!(a.approx_eq_within(&DiskPoint::new(0.51, 0.5), 0.02));
}

#[test]
fn test_is_finite_detects_nan_and_infinity() {
    assert!(DiskPoint::new(0.1, 0.2).is_finite());
    assert!(!DiskPoint::new(f64::NAN, 0.0).is_finite());
    assert!(!DiskPoint::new(0.0, f64::INFINITY).is_finite());
}

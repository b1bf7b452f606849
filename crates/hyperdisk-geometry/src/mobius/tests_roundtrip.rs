//! Inverse and invariance properties of Mobius maps.

use num_complex::Complex64;

use super::*;
use crate::distance::hyperbolic_distance;

const EPS: f64 = DEFAULT_MOBIUS_EPS;

const SAMPLES: [(f64, f64); 5] = [(0.0, 0.0), (0.5, 0.1), (-0.3, 0.7), (0.85, -0.4), (-0.6, -0.6)];

fn samples() -> impl Iterator<Item = Complex64> {
    SAMPLES.iter().map(|&(re, im)| Complex64::new(re, im))
}

#[test]
fn test_rotation_then_negative_angle_is_identity() {
    for angle in [0.3, 1.7, -2.9, 3.0] {
        let rotation = MobiusRotation::new(Complex64::new(0.2, -0.45), angle, EPS).unwrap();
        let undo = MobiusRotation::new(Complex64::new(0.2, -0.45), -angle, EPS).unwrap();
        for z in samples() {
            let back = undo.apply(rotation.apply(z));
            assert!((back - z).norm() < 1e-10, "angle {}: {} -> {}", angle, z, back);
        }
    }
}

#[test]
fn test_rotation_inverse_undoes_rotation() {
    let rotation = MobiusRotation::new(Complex64::new(-0.5, 0.3), 0.9, EPS).unwrap();
    let inverse = rotation.inverse();
    assert_eq!(inverse.angle(), -0.9);
    for z in samples() {
        assert!((inverse.apply(rotation.apply(z)) - z).norm() < 1e-10);
    }
}

#[test]
fn test_translation_inverse_undoes_translation() {
    let translation = MobiusTranslation::new(Complex64::new(0.6, 0.2), EPS).unwrap();
    let inverse = translation.inverse();
    for z in samples() {
        assert!((inverse.apply(translation.apply(z)) - z).norm() < 1e-10);
    }
}

#[test]
fn test_translations_preserve_hyperbolic_distance() {
    let translation = MobiusTranslation::new(Complex64::new(-0.35, 0.5), EPS).unwrap();
    let points: Vec<DiskPoint> = samples().map(DiskPoint::from_complex).collect();
    for u in &points {
        for v in &points {
            let before = hyperbolic_distance(u, v);
            let after =
                hyperbolic_distance(&translation.apply_point(u), &translation.apply_point(v));
            assert!((before - after).abs() < 1e-8, "{} {}: {} vs {}", u, v, before, after);
        }
    }
}

#[test]
fn test_rotations_preserve_hyperbolic_distance() {
    let rotation = MobiusRotation::new(Complex64::new(0.3, 0.3), 2.0, EPS).unwrap();
    let u = DiskPoint::new(0.1, -0.7);
    let v = DiskPoint::new(-0.4, 0.2);
    let before = hyperbolic_distance(&u, &v);
    let after = hyperbolic_distance(&rotation.apply_point(&u), &rotation.apply_point(&v));
    assert!((before - after).abs() < 1e-9);
}

#[test]
fn test_rotation_preserves_distance_to_center_of_rotation() {
    let p = Complex64::new(0.25, 0.5);
    let rotation = MobiusRotation::new(p, 1.3, EPS).unwrap();
    let center = DiskPoint::from_complex(p);
    let z = DiskPoint::new(-0.3, 0.1);
    let before = hyperbolic_distance(&center, &z);
    let after = hyperbolic_distance(&center, &rotation.apply_point(&z));
    assert!((before - after).abs() < 1e-9);
}

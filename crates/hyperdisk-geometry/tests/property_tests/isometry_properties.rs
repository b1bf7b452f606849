//! Isometries preserve hyperbolic distance and compose as expected.

use num_complex::Complex64;

use hyperdisk_geometry::{
    hyperbolic_distance, CircleInversion, DiskAutomorphism, DiskPoint, GeodesicReflection,
    MobiusRotation, MobiusTranslation,
};

use crate::common::fixtures::generate_disk_point;

const EPS: f64 = 1e-9;

fn sample_points(count: u64) -> Vec<DiskPoint> {
    (0..count).map(|seed| generate_disk_point(seed + 100, 1.0, 0.9)).collect()
}

#[test]
fn test_rotation_identity_and_round_trip() {
    for seed in 0..10 {
        let center = generate_disk_point(seed, 1.0, 0.8).to_complex();
        let zero = MobiusRotation::new(center, 0.0, EPS).unwrap();
        let rotation = MobiusRotation::new(center, 0.4 + seed as f64, EPS).unwrap();
        for p in sample_points(10) {
            let z = p.to_complex();
            assert!((zero.apply(z) - z).norm() < 1e-12);
            assert!((rotation.inverse().apply(rotation.apply(z)) - z).norm() < 1e-9);
        }
    }
}

#[test]
fn test_translation_by_zero_is_identity() {
    let translation = MobiusTranslation::new(Complex64::new(0.0, 0.0), EPS).unwrap();
    for p in sample_points(20) {
        assert_eq!(translation.apply_point(&p), p);
    }
}

#[test]
fn test_isometries_preserve_distance() {
    let points = sample_points(8);
    let rotation = MobiusRotation::new(Complex64::new(0.3, -0.2), 1.2, EPS).unwrap();
    let translation = MobiusTranslation::new(Complex64::new(-0.5, 0.4), EPS).unwrap();
    let reflection =
        GeodesicReflection::through(&DiskPoint::new(0.6, 0.1), &DiskPoint::new(-0.2, 0.7))
            .unwrap();

    for u in &points {
        for v in &points {
            let d = hyperbolic_distance(u, v);
            let rotated = hyperbolic_distance(&rotation.apply_point(u), &rotation.apply_point(v));
            let translated =
                hyperbolic_distance(&translation.apply_point(u), &translation.apply_point(v));
            let reflected =
                hyperbolic_distance(&reflection.apply(u).unwrap(), &reflection.apply(v).unwrap());
            let tol = 1e-7 * d.max(1.0);
            assert!((d - rotated).abs() < tol, "rotation: {} vs {}", d, rotated);
            assert!((d - translated).abs() < tol, "translation: {} vs {}", d, translated);
            assert!((d - reflected).abs() < tol, "reflection: {} vs {}", d, reflected);
        }
    }
}

#[test]
fn test_circle_inversion_is_involution_off_center() {
    let inversion =
        CircleInversion::for_geodesic_center(DiskPoint::new(-1.1, 0.9), 1.0, 1e-12).unwrap();
    for p in sample_points(30) {
        let once = inversion.apply(&p);
        assert!(!once.singular);
        let twice = inversion.apply(&once.point);
        assert!(twice.point.approx_eq_within(&p, 1e-9), "{} -> {}", p, twice.point);
    }
}

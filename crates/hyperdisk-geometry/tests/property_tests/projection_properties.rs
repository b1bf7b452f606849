//! Hyperboloid projection and model properties.

use hyperdisk_geometry::projection::{hyperboloid_from_polar, lift_to_hyperboloid};
use hyperdisk_geometry::{
    disk_to_hyperboloid, hyperbolic_distance_to_center, hyperboloid_to_disk, GeometryError,
    HyperboloidPoint, Projection,
};

use crate::common::fixtures::generate_disk_point;

const EPS: f64 = 1e-8;

#[test]
fn test_hyperboloid_round_trip() {
    for i in 0..40 {
        let u = i as f64 * 0.1;
        let v = i as f64 * 0.7;
        let h = hyperboloid_from_polar(u, v);
        let back = disk_to_hyperboloid(&hyperboloid_to_disk(&h, EPS).unwrap(), EPS).unwrap();
        let tol = 1e-9 * h.z;
        assert!(back.approx_eq_within(&h, tol), "u = {}: {} -> {}", u, h, back);
    }
}

#[test]
fn test_lifted_plane_points_project_inside() {
    for &(x, y) in &[(0.0, 0.0), (1.0, 2.0), (-30.0, 4.0), (1e3, -1e3)] {
        let p = hyperboloid_to_disk(&lift_to_hyperboloid(x, y), EPS).unwrap();
        assert!(p.norm() < 1.0);
    }
}

#[test]
fn test_lower_sheet_is_out_of_domain() {
    let result = hyperboloid_to_disk(&HyperboloidPoint::new(0.0, 0.0, -2.0), EPS);
    assert!(matches!(result, Err(GeometryError::OutOfDomain { .. })));
}

#[test]
fn test_models_preserve_direction() {
    for seed in 0..20 {
        let p = generate_disk_point(seed, 1.0, 0.95);
        for projection in Projection::ALL {
            let q = projection.apply(&p);
            assert!(p.cross(&q).abs() < 1e-9, "{} moved {} off its ray", projection, p);
            assert!(p.dot(&q) >= 0.0);
        }
    }
}

#[test]
fn test_gnomonic_radius_is_distance_to_center() {
    for seed in 0..20 {
        let p = generate_disk_point(seed, 1.0, 0.95);
        let g = Projection::Gnomonic.apply(&p);
        assert!((g.norm() - hyperbolic_distance_to_center(&p)).abs() < 1e-9);
    }
}

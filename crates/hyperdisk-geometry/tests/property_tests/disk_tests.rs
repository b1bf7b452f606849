//! `PoincareDisk` validation and rescaling.

use hyperdisk_geometry::{DiskConfig, DiskPoint, GeometryError, PoincareDisk, Projection};

#[test]
fn test_points_outside_disk_are_rejected() {
    let disk = PoincareDisk::new(DiskConfig::with_radius(2.0));
    let outside = DiskPoint::new(2.0, 0.1);
    match disk.geodesic(&outside, &DiskPoint::ORIGIN) {
        Err(GeometryError::PointOutsideDisk { radius, .. }) => assert_eq!(radius, 2.0),
        other => panic!("Expected PointOutsideDisk, got {:?}", other),
    }
    assert!(disk.distance(&DiskPoint::ORIGIN, &outside).is_err());
    assert!(disk.rotate(&DiskPoint::ORIGIN, &outside, 1.0).is_err());
    assert!(disk.lift(&outside).is_err());
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(matches!(
        PoincareDisk::validated(DiskConfig::with_radius(-1.0)),
        Err(GeometryError::InvalidConfig(_))
    ));
}

#[test]
fn test_distance_is_scale_invariant() {
    let unit = PoincareDisk::new(DiskConfig::default());
    let big = PoincareDisk::new(DiskConfig::with_radius(5.0));
    let u = DiskPoint::new(0.2, 0.3);
    let v = DiskPoint::new(-0.6, 0.1);
    let d_unit = unit.distance(&u, &v).unwrap();
    let d_big = big.distance(&u.scale(5.0), &v.scale(5.0)).unwrap();
    assert!((d_unit - d_big).abs() < 1e-12);
}

#[test]
fn test_rotation_in_scaled_disk() {
    let disk = PoincareDisk::new(DiskConfig::with_radius(3.0));
    let center = DiskPoint::new(1.0, 1.0);
    let p = DiskPoint::new(-0.5, 2.0);
    let rotated = disk.rotate(&p, &center, 0.8).unwrap();
    assert!(rotated.norm() < 3.0);
    let back = disk.rotate(&rotated, &center, -0.8).unwrap();
    assert!(back.approx_eq_within(&p, 1e-9));
    let d_before = disk.distance(&center, &p).unwrap();
    let d_after = disk.distance(&center, &rotated).unwrap();
    assert!((d_before - d_after).abs() < 1e-9);
}

#[test]
fn test_translate_moves_center_to_offset() {
    let disk = PoincareDisk::new(DiskConfig::with_radius(4.0));
    let by = DiskPoint::new(1.0, -2.0);
    let moved = disk.translate(&DiskPoint::ORIGIN, &by).unwrap();
    assert!(moved.approx_eq_within(&by, 1e-12));
}

#[test]
fn test_reflect_across_geodesic_through_points() {
    let disk = PoincareDisk::new(DiskConfig::with_radius(2.0));
    let a = DiskPoint::new(1.0, 0.2);
    let b = DiskPoint::new(-0.4, 1.4);
    assert!(disk.reflect_across(&a, &a, &b).unwrap().approx_eq_within(&a, 1e-9));
    let p = DiskPoint::new(0.1, -0.3);
    let image = disk.reflect_across(&p, &a, &b).unwrap();
    assert!(image.norm() < 2.0);
    let back = disk.reflect_across(&image, &a, &b).unwrap();
    assert!(back.approx_eq_within(&p, 1e-9));
}

#[test]
fn test_reflect_in_geodesic_circle() {
    let disk = PoincareDisk::new(DiskConfig::default());
    let reflection = disk.reflect(&DiskPoint::ORIGIN, &DiskPoint::new(1.25, 1.25)).unwrap();
    assert!(!reflection.singular);
    assert!(reflection.point.approx_eq_within(&DiskPoint::new(0.4, 0.4), 1e-12));
    assert!(matches!(
        disk.reflect(&DiskPoint::ORIGIN, &DiskPoint::new(0.2, 0.0)),
        Err(GeometryError::InvalidInput(_))
    ));
}

#[test]
fn test_projection_and_lift_respect_radius() {
    let disk = PoincareDisk::new(DiskConfig::with_radius(2.0));
    let p = DiskPoint::new(1.0, 0.0);
    let h = disk.lift(&p).unwrap();
    let back = disk.project_hyperboloid(&h).unwrap();
    assert!(back.approx_eq_within(&p, 1e-12));

    let klein = disk.project(&p, Projection::Klein).unwrap();
    assert!((klein.x - 1.6).abs() < 1e-12);
}

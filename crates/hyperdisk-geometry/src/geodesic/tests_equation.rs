//! Tests for the equation form of geodesics.

use crate::config::DiskConfig;
use crate::geodesic::{construct_segment, Geodesic};
use crate::point::DiskPoint;

#[test]
fn test_geodesic_contains_defining_points() {
    let u = DiskPoint::new(0.3, 0.1);
    let v = DiskPoint::new(-0.2, 0.6);
    let g = Geodesic::from_two_points(&u, &v);
    assert!(!g.diameter);
    assert!(g.contains(&u));
    assert!(g.contains(&v));
    assert!(!g.contains(&DiskPoint::ORIGIN));
}

#[test]
fn test_collinear_points_give_diameter() {
    let u = DiskPoint::new(0.25, 0.5);
    let v = DiskPoint::new(-0.1, -0.2);
    let g = Geodesic::from_two_points(&u, &v);
    assert!(g.diameter);
    assert!(g.contains(&u));
    assert!(g.contains(&v));
    assert!(g.contains(&DiskPoint::ORIGIN));
    assert_eq!(g.euclidean_center(), None);
    assert_eq!(g.euclidean_radius(), None);
}

#[test]
fn test_circle_is_orthogonal_to_unit_circle() {
    let g = Geodesic::from_two_points(&DiskPoint::new(0.5, 0.0), &DiskPoint::new(0.0, 0.5));
    let c = g.euclidean_center().unwrap();
    let r = g.euclidean_radius().unwrap();
    assert!((c.norm_squared() - (1.0 + r * r)).abs() < 1e-12);
}

#[test]
fn test_equation_matches_segment_constructor() {
    let u = DiskPoint::new(-0.35, 0.4);
    let v = DiskPoint::new(0.6, 0.15);
    let g = Geodesic::from_two_points(&u, &v);
    let seg = construct_segment(&u, &v, &DiskConfig::default()).unwrap();
    let arc = seg.curve.as_arc().unwrap();

    assert!(g.euclidean_center().unwrap().approx_eq_within(&arc.center, 1e-9));
    assert!((g.euclidean_radius().unwrap() - arc.radius).abs() < 1e-9);
    assert!(g.contains(&arc.point_at(0.37)));
}

#[test]
fn test_ideal_points_lie_on_unit_circle_and_geodesic() {
    let g = Geodesic::from_two_points(&DiskPoint::new(0.1, 0.7), &DiskPoint::new(0.5, -0.2));
    for p in g.ideal_points() {
        assert!((p.norm() - 1.0).abs() < 1e-9, "ideal point {} not on unit circle", p);
        assert!(g.contains(&p), "ideal point {} not on geodesic", p);
    }
    let [p, q] = g.ideal_points();
    assert!(!p.approx_eq(&q));
}

#[test]
fn test_ideal_points_of_diameter_are_antipodal() {
    let g = Geodesic::from_two_points(&DiskPoint::new(0.3, 0.3), &DiskPoint::new(-0.5, -0.5));
    let [p, q] = g.ideal_points();
    assert!((p.norm() - 1.0).abs() < 1e-12);
    assert!(p.approx_eq_within(&(-q), 1e-12));
    assert!((p.x.abs() - p.y.abs()).abs() < 1e-12);
}

#[test]
fn test_residual_is_zero_on_geodesic() {
    let g = Geodesic::circle(-2.5, 0.0);
    // Circle centred at (1.25, 0) with r² = 1.5625 - 1
    let on = DiskPoint::new(1.25 - 0.5625_f64.sqrt(), 0.0);
    assert!(g.residual(&on).abs() < 1e-12);
    assert!(g.residual(&DiskPoint::ORIGIN) > 0.0);
}

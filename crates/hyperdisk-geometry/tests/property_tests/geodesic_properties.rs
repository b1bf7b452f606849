//! Geodesic construction properties.

use hyperdisk_geometry::{
    construct_segment, Degeneracy, DiskConfig, DiskPoint, Geodesic, GeodesicCurve,
};

use crate::common::fixtures::{generate_arc_pairs, generate_disk_point};

#[test]
fn test_arcs_are_orthogonal_to_boundary_for_many_radii() {
    for radius in [0.5, 1.0, 3.0, 100.0] {
        let config = DiskConfig::with_radius(radius);
        for (p1, p2) in generate_arc_pairs(50, radius) {
            let seg = construct_segment(&p1, &p2, &config).unwrap();
            let arc = seg
                .curve
                .as_arc()
                .unwrap_or_else(|| panic!("R = {}: {} -> {} gave {:?}", radius, p1, p2, seg));
            let expected = (radius * radius + arc.radius * arc.radius).sqrt();
            let rel = (arc.center.norm() - expected).abs() / expected;
            assert!(rel < 1e-6, "R = {}: relative error {}", radius, rel);
        }
    }
}

#[test]
fn test_arc_endpoints_match_inputs() {
    let config = DiskConfig::with_radius(3.0);
    for (p1, p2) in generate_arc_pairs(50, 3.0) {
        let seg = construct_segment(&p1, &p2, &config).unwrap();
        let (start, end) = seg.curve.endpoints().unwrap();
        assert!(start.approx_eq_within(&p1, 1e-8), "{} vs {}", start, p1);
        assert!(end.approx_eq_within(&p2, 1e-8), "{} vs {}", end, p2);
    }
}

#[test]
fn test_sampled_arcs_stay_inside_disk() {
    let config = DiskConfig::default();
    for (p1, p2) in generate_arc_pairs(25, 1.0) {
        let points = construct_segment(&p1, &p2, &config).unwrap().curve.sample(32).unwrap();
        assert_eq!(points.len(), 33);
        assert!(points.iter().all(|p| p.norm() < 1.0));
    }
}

#[test]
fn test_coincident_points_are_empty_for_any_radius() {
    for radius in [0.1, 1.0, 50.0] {
        let p = generate_disk_point(7, radius, 0.9);
        let seg = construct_segment(&p, &p, &DiskConfig::with_radius(radius)).unwrap();
        assert_eq!(seg.curve, GeodesicCurve::Empty);
    }
}

#[test]
fn test_diameters_keep_exact_endpoints() {
    let config = DiskConfig::with_radius(3.0);
    for seed in 0..20 {
        let p1 = generate_disk_point(seed, 3.0, 0.9);
        let p2 = p1.scale(-0.5);
        let seg = construct_segment(&p1, &p2, &config).unwrap();
        assert_eq!(seg.degeneracy, Some(Degeneracy::CollinearWithOrigin));
        assert_eq!(seg.curve, GeodesicCurve::Line { start: p1, end: p2 });
    }
}

#[test]
fn test_unit_disk_arcs_agree_with_equation_form() {
    let config = DiskConfig::default();
    for (p1, p2) in generate_arc_pairs(30, 1.0) {
        let geodesic = Geodesic::from_two_points(&p1, &p2);
        if geodesic.diameter {
            continue;
        }
        let arc = *construct_segment(&p1, &p2, &config).unwrap().curve.as_arc().unwrap();
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let p = arc.point_at(t);
            let residual = geodesic.residual(&p);
            assert!(residual.abs() < 1e-6, "t = {}: residual {}", t, residual);
        }
    }
}

#[test]
fn test_known_unit_disk_arc() {
    println!("\n=== TEST: Known Arc (0.5,0)-(0,0.5) ===");
    let seg = construct_segment(
        &DiskPoint::new(0.5, 0.0),
        &DiskPoint::new(0.0, 0.5),
        &DiskConfig::default(),
    )
    .unwrap();
    let arc = seg.curve.as_arc().unwrap();
    println!("center = {}, radius = {}", arc.center, arc.radius);
    assert!(arc.center.approx_eq_within(&DiskPoint::new(1.25, 1.25), 1e-12));
    assert!((arc.radius * arc.radius - 2.125).abs() < 1e-12);
}

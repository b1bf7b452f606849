//! Deterministic point generators.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use hyperdisk_geometry::DiskPoint;

/// Interior point of the disk of radius `radius`, at most `max_fraction`
/// of the radius from the center. Same seed, same point.
pub fn generate_disk_point(seed: u64, radius: f64, max_fraction: f64) -> DiskPoint {
    let mut hasher = DefaultHasher::new();
    (seed, "r").hash(&mut hasher);
    let r_unit = hasher.finish() as f64 / u64::MAX as f64;

    let mut hasher = DefaultHasher::new();
    (seed, "theta").hash(&mut hasher);
    let theta = hasher.finish() as f64 / u64::MAX as f64 * std::f64::consts::TAU;

    DiskPoint::from_polar(r_unit * max_fraction * radius, theta)
}

/// `count` pairs of interior points that are neither coincident nor
/// collinear with the center.
pub fn generate_arc_pairs(count: usize, radius: f64) -> Vec<(DiskPoint, DiskPoint)> {
    (0..)
        .map(|i: u64| {
            (
                generate_disk_point(2 * i, radius, 0.95),
                generate_disk_point(2 * i + 1, radius, 0.95),
            )
        })
        .filter(|(a, b)| {
            a.distance_to(b) > 1e-3 * radius && a.cross(b).abs() > 1e-3 * radius * radius
        })
        .take(count)
        .collect()
}

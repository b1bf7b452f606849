//! Euclidean and hyperbolic distances in the unit Poincare disk.
//!
//! d(u, v) = arcosh(1 + 2|u - v|² / ((1 - |u|²)(1 - |v|²)))

use crate::point::DiskPoint;

/// Euclidean distance between two points.
#[inline]
pub fn euclidean_distance(u: &DiskPoint, v: &DiskPoint) -> f64 {
    u.distance_to(v)
}

/// Euclidean distance from the disk center.
#[inline]
pub fn euclidean_distance_to_center(point: &DiskPoint) -> f64 {
    point.norm()
}

/// Hyperbolic distance from the disk center.
///
/// Returns `f64::INFINITY` for points on or outside the unit circle.
pub fn hyperbolic_distance_to_center(point: &DiskPoint) -> f64 {
    let r_sq = point.norm_squared();
    if r_sq >= 1.0 {
        return f64::INFINITY;
    }
    (1.0 + 2.0 * r_sq / (1.0 - r_sq)).acosh()
}

/// Hyperbolic distance between two points of the unit disk.
///
/// Returns `f64::INFINITY` if either point is on or outside the unit circle
/// and `NaN` for non-finite input.
pub fn hyperbolic_distance(u: &DiskPoint, v: &DiskPoint) -> f64 {
    let denominator = (1.0 - u.norm_squared()) * (1.0 - v.norm_squared());
    if denominator <= 0.0 {
        return f64::INFINITY;
    }
    let numerator = (*u - *v).norm_squared();
    // Rounding can push the argument a hair below 1 for u == v
    (1.0 + 2.0 * numerator / denominator).max(1.0).acosh()
}

/// Euclidean radius at which a point sits at hyperbolic distance `d` from
/// the center. Inverse of [`hyperbolic_distance_to_center`].
pub fn euclidean_radius_for(d: f64) -> f64 {
    let cosh_d = d.cosh();
    ((cosh_d - 1.0) / (cosh_d + 1.0)).sqrt()
}

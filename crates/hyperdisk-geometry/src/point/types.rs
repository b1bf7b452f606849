//! Point type definitions.

use serde::{Deserialize, Serialize};

/// Absolute per-coordinate tolerance used by `approx_eq`.
pub const POINT_TOLERANCE: f64 = 1e-6;

/// Point in the (radius-scaled) Poincare disk.
///
/// Plain value type with no identity beyond its coordinates. Whether the
/// point is strictly inside a given disk is checked by
/// `DiskConfig::validate_point`, not on construction.
///
/// # Example
///
/// ```
/// use hyperdisk_geometry::point::DiskPoint;
///
/// let p = DiskPoint::new(0.6, 0.8);
/// assert!((p.norm() - 1.0).abs() < 1e-12);
/// assert_eq!(p.to_complex().im, 0.8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskPoint {
    pub x: f64,
    pub y: f64,
}

/// Point on (or near) the upper sheet of the two-sheeted hyperboloid
/// `x² + y² - z² = -1`, `z >= 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HyperboloidPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

static_assertions::assert_impl_all!(DiskPoint: Send, Sync, Copy);
static_assertions::assert_impl_all!(HyperboloidPoint: Send, Sync, Copy);

//! Hyperboloid <-> Poincare disk projection (unit disk).
//!
//! The projection is the central projection from `(0, 0, -1)` onto the
//! plane `z = 0`. Both directions refuse inputs where the denominator falls
//! below `eps` rather than producing `NaN` or infinities.

use crate::error::{GeometryError, GeometryResult};
use crate::point::{DiskPoint, HyperboloidPoint};

/// Project a point of the hyperboloid's upper sheet onto the unit disk.
///
/// # Errors
///
/// `GeometryError::OutOfDomain` when `1 + z < eps` (the point is at or past
/// the asymptotic boundary, or on the lower sheet), or when `z` is not finite.
///
/// # Example
///
/// ```
/// use hyperdisk_geometry::point::HyperboloidPoint;
/// use hyperdisk_geometry::projection::hyperboloid_to_disk;
///
/// let p = hyperboloid_to_disk(&HyperboloidPoint::apex(), 1e-8).unwrap();
/// assert_eq!((p.x, p.y), (0.0, 0.0));
///
/// let below = HyperboloidPoint::new(0.0, 0.0, -1.0);
/// assert!(hyperboloid_to_disk(&below, 1e-8).is_err());
/// ```
pub fn hyperboloid_to_disk(point: &HyperboloidPoint, eps: f64) -> GeometryResult<DiskPoint> {
    let denom = 1.0 + point.z;
    if !point.is_finite() || denom < eps {
        return Err(GeometryError::OutOfDomain { z: point.z });
    }
    Ok(DiskPoint::new(point.x / denom, point.y / denom))
}

/// Inverse of [`hyperboloid_to_disk`] for a unit-disk point.
///
/// # Errors
///
/// `GeometryError::OutOfDomain` when `1 - |p|² < eps`. The reported `z` is
/// `+inf`, the height the point would be lifted to.
pub fn disk_to_hyperboloid(point: &DiskPoint, eps: f64) -> GeometryResult<HyperboloidPoint> {
    let r_sq = point.norm_squared();
    let denom = 1.0 - r_sq;
    if !point.is_finite() || denom < eps {
        return Err(GeometryError::OutOfDomain { z: f64::INFINITY });
    }
    Ok(HyperboloidPoint::new(
        2.0 * point.x / denom,
        2.0 * point.y / denom,
        (1.0 + r_sq) / denom,
    ))
}

/// Vertical lift of the plane point `(x, y)` onto the upper sheet.
#[inline]
pub fn lift_to_hyperboloid(x: f64, y: f64) -> HyperboloidPoint {
    HyperboloidPoint::new(x, y, (x * x + y * y + 1.0).sqrt())
}

/// Polar parametrisation `(sinh u cos v, sinh u sin v, cosh u)` of the upper
/// sheet. `u` is the hyperbolic distance from the apex.
#[inline]
pub fn hyperboloid_from_polar(u: f64, v: f64) -> HyperboloidPoint {
    let s = u.sinh();
    HyperboloidPoint::new(s * v.cos(), s * v.sin(), u.cosh())
}

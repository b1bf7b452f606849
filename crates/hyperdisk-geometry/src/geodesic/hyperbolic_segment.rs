//! Bounded pieces of geodesics in the unit disk.

use serde::{Deserialize, Serialize};

use crate::distance::hyperbolic_distance;
use crate::error::{GeometryError, GeometryResult};
use crate::point::DiskPoint;

use super::equation::{Geodesic, GEODESIC_TOLERANCE};

/// True when the straight chords `a-b` and `c-d` cross.
///
/// Strict orientation tests: touching at an endpoint or overlapping
/// collinear chords do not count.
pub fn chords_intersect(a: &DiskPoint, b: &DiskPoint, c: &DiskPoint, d: &DiskPoint) -> bool {
    let ccw = |p: &DiskPoint, q: &DiskPoint, r: &DiskPoint| r.orientation(p, q) > 0.0;
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

/// Geodesic segment between two distinct unit-disk points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperbolicSegment {
    start: DiskPoint,
    end: DiskPoint,
}

impl HyperbolicSegment {
    /// # Errors
    ///
    /// `GeometryError::InvalidInput` if the endpoints coincide or are not
    /// finite.
    pub fn new(start: DiskPoint, end: DiskPoint) -> GeometryResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GeometryError::InvalidInput(format!(
                "segment endpoints must be finite (got {:?}, {:?})",
                start, end
            )));
        }
        if start.approx_eq_within(&end, f64::EPSILON) {
            return Err(GeometryError::InvalidInput(format!(
                "segment endpoints must differ (both {:?})",
                start
            )));
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> DiskPoint {
        self.start
    }

    #[inline]
    pub fn end(&self) -> DiskPoint {
        self.end
    }

    /// The full geodesic carrying this segment.
    pub fn geodesic(&self) -> Geodesic {
        Geodesic::from_two_points(&self.start, &self.end)
    }

    /// Hyperbolic length.
    pub fn length(&self) -> f64 {
        hyperbolic_distance(&self.start, &self.end)
    }

    /// True if `point` lies on the carrying geodesic between the endpoints.
    pub fn contains(&self, point: &DiskPoint) -> bool {
        let length = self.length() + GEODESIC_TOLERANCE;
        self.geodesic().contains(point)
            && hyperbolic_distance(point, &self.start) <= length
            && hyperbolic_distance(point, &self.end) <= length
    }

    /// Whether the straight chords of the two segments cross.
    pub fn intersects(&self, other: &HyperbolicSegment) -> bool {
        chords_intersect(&self.start, &self.end, &other.start, &other.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(a: (f64, f64), b: (f64, f64)) -> HyperbolicSegment {
        HyperbolicSegment::new(DiskPoint::new(a.0, a.1), DiskPoint::new(b.0, b.1)).unwrap()
    }

    #[test]
    fn test_rejects_coincident_endpoints() {
        let p = DiskPoint::new(0.2, 0.1);
        assert!(HyperbolicSegment::new(p, p).is_err());
        assert!(HyperbolicSegment::new(DiskPoint::new(f64::NAN, 0.0), p).is_err());
    }

    #[test]
    fn test_length_from_center() {
        let seg = segment((0.0, 0.0), (0.5, 0.0));
        assert!((seg.length() - 3f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_contains_endpoints_and_interior() {
        let seg = segment((-0.5, 0.0), (0.5, 0.0));
        assert!(seg.contains(&seg.start()));
        assert!(seg.contains(&seg.end()));
        assert!(seg.contains(&DiskPoint::new(0.1, 0.0)));
        // on the geodesic, past the end
        assert!(!seg.contains(&DiskPoint::new(0.7, 0.0)));
        // off the geodesic
        assert!(!seg.contains(&DiskPoint::new(0.1, 0.1)));
    }

    #[test]
    fn test_contains_point_on_arc() {
        let seg = segment((0.5, 0.0), (0.0, 0.5));
        let geodesic = seg.geodesic();
        let center = geodesic.euclidean_center().unwrap();
        let radius = geodesic.euclidean_radius().unwrap();
        // closest point of the supporting circle to the origin
        let mid = center.scale(1.0 - radius / center.norm());
        assert!(seg.contains(&mid));
    }

    #[test]
    fn test_intersects() {
        let horizontal = segment((-0.5, 0.0), (0.5, 0.0));
        let vertical = segment((0.0, -0.5), (0.0, 0.5));
        let apart = segment((0.6, 0.1), (0.6, 0.4));
        assert!(horizontal.intersects(&vertical));
        assert!(vertical.intersects(&horizontal));
        assert!(!horizontal.intersects(&apart));
    }
}

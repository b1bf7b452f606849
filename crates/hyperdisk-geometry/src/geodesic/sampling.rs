//! Polyline sampling of geodesic curves for renderers.

use crate::error::{GeometryError, GeometryResult};
use crate::point::DiskPoint;

use super::segment::GeodesicCurve;

impl GeodesicCurve {
    /// Sample the curve as a polyline.
    ///
    /// - `Empty` yields no points
    /// - `Line` yields its two endpoints regardless of `segments`
    /// - `Arc` yields `segments + 1` evenly spaced points from the start
    ///   angle through the sweep
    ///
    /// # Errors
    ///
    /// `GeometryError::InvalidInput` if `segments == 0`.
    pub fn sample(&self, segments: usize) -> GeometryResult<Vec<DiskPoint>> {
        if segments == 0 {
            return Err(GeometryError::InvalidInput(
                "sample count must be at least 1".to_string(),
            ));
        }

        let points = match self {
            GeodesicCurve::Empty => Vec::new(),
            GeodesicCurve::Line { start, end } => vec![*start, *end],
            GeodesicCurve::Arc(arc) => (0..=segments)
                .map(|i| arc.point_at(i as f64 / segments as f64))
                .collect(),
        };
        Ok(points)
    }
}

//! Geodesic segment construction between two interior points.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{DiskConfig, FallbackPolicy};
use crate::error::{GeometryError, GeometryResult};
use crate::point::DiskPoint;

/// Circular arc with signed sweep.
///
/// The arc starts at `center + radius·e^{i·start_angle}` and turns through
/// `sweep_angle` radians (positive = counter-clockwise). The sweep is always
/// in `(-π, π]`, i.e. the short way around the supporting circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    pub center: DiskPoint,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl ArcDescriptor {
    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Point at fraction `t` of the sweep (`t = 0` start, `t = 1` end).
    pub fn point_at(&self, t: f64) -> DiskPoint {
        let angle = self.start_angle + t * self.sweep_angle;
        self.center + DiskPoint::from_polar(self.radius, angle)
    }

    pub fn start_point(&self) -> DiskPoint {
        self.point_at(0.0)
    }

    pub fn end_point(&self) -> DiskPoint {
        self.point_at(1.0)
    }

    /// Euclidean arc length.
    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle.abs()
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.start_angle.is_finite()
            && self.sweep_angle.is_finite()
    }
}

/// Renderable geodesic curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeodesicCurve {
    /// Nothing to draw (the endpoints coincide).
    Empty,
    /// Straight chord; a diameter segment or a numerical fallback.
    Line { start: DiskPoint, end: DiskPoint },
    /// Arc of a circle orthogonal to the disk boundary.
    Arc(ArcDescriptor),
}

impl GeodesicCurve {
    pub fn is_empty(&self) -> bool {
        matches!(self, GeodesicCurve::Empty)
    }

    pub fn is_line(&self) -> bool {
        matches!(self, GeodesicCurve::Line { .. })
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, GeodesicCurve::Arc(_))
    }

    pub fn as_arc(&self) -> Option<&ArcDescriptor> {
        match self {
            GeodesicCurve::Arc(arc) => Some(arc),
            _ => None,
        }
    }

    /// First and last point of the curve, `None` when empty.
    pub fn endpoints(&self) -> Option<(DiskPoint, DiskPoint)> {
        match self {
            GeodesicCurve::Empty => None,
            GeodesicCurve::Line { start, end } => Some((*start, *end)),
            GeodesicCurve::Arc(arc) => Some((arc.start_point(), arc.end_point())),
        }
    }

    /// Euclidean length of the drawn curve.
    pub fn euclidean_length(&self) -> f64 {
        match self {
            GeodesicCurve::Empty => 0.0,
            GeodesicCurve::Line { start, end } => start.distance_to(end),
            GeodesicCurve::Arc(arc) => arc.length(),
        }
    }
}

/// Why a segment is not a regular arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degeneracy {
    /// Endpoints closer than `eps`.
    CoincidentPoints,
    /// Endpoints collinear with the disk center: the geodesic is a diameter.
    CollinearWithOrigin,
    /// `|D| < eps` in the circle fit.
    UnstableDeterminant,
    /// Arc radius squared below `eps`.
    DegenerateRadius,
    /// The circle fit produced NaN or infinite parameters.
    NonFiniteArc,
}

impl Degeneracy {
    /// True for fallbacks forced by floating-point precision rather than
    /// by the geometry itself.
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            Degeneracy::UnstableDeterminant
                | Degeneracy::DegenerateRadius
                | Degeneracy::NonFiniteArc
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Degeneracy::CoincidentPoints => "coincident points",
            Degeneracy::CollinearWithOrigin => "points collinear with the disk center",
            Degeneracy::UnstableDeterminant => "near-zero determinant in circle fit",
            Degeneracy::DegenerateRadius => "near-zero arc radius",
            Degeneracy::NonFiniteArc => "non-finite arc parameters",
        }
    }
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Geodesic between two points together with the reason for any
/// degenerate shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicSegment {
    pub curve: GeodesicCurve,
    pub degeneracy: Option<Degeneracy>,
}

impl GeodesicSegment {
    fn empty() -> Self {
        Self {
            curve: GeodesicCurve::Empty,
            degeneracy: Some(Degeneracy::CoincidentPoints),
        }
    }

    fn line(start: DiskPoint, end: DiskPoint, reason: Degeneracy) -> Self {
        Self {
            curve: GeodesicCurve::Line { start, end },
            degeneracy: Some(reason),
        }
    }

    fn arc(arc: ArcDescriptor) -> Self {
        Self {
            curve: GeodesicCurve::Arc(arc),
            degeneracy: None,
        }
    }

    /// True when the curve is a straight-line stand-in for an arc that could
    /// not be computed reliably.
    pub fn is_fallback(&self) -> bool {
        self.degeneracy.is_some_and(|d| d.is_numerical())
    }
}

/// Build the geodesic between `p1` and `p2` in a disk of radius
/// `config.radius`.
///
/// Cases, checked in order:
/// 1. `|p1 - p2| < eps` -> [`GeodesicCurve::Empty`]
/// 2. `|x1·y2 - y1·x2| < eps·R²` -> straight chord (diameter segment)
/// 3. circle fit orthogonal to the boundary; numerically unstable fits fall
///    back to the chord, or fail under [`FallbackPolicy::Strict`].
///
/// The points are not checked against the disk; use
/// `DiskConfig::validate_point` (or `PoincareDisk::geodesic`) for that.
///
/// # Errors
///
/// Only `GeometryError::PrecisionLoss`, and only under the strict policy.
///
/// # Example
///
/// ```
/// use hyperdisk_geometry::config::DiskConfig;
/// use hyperdisk_geometry::geodesic::{construct_segment, GeodesicCurve};
/// use hyperdisk_geometry::point::DiskPoint;
///
/// let config = DiskConfig::default();
/// let (a, b) = (DiskPoint::new(0.5, 0.0), DiskPoint::new(0.0, 0.5));
/// let seg = construct_segment(&a, &b, &config).unwrap();
/// let arc = seg.curve.as_arc().unwrap();
/// assert!((arc.center.x - 1.25).abs() < 1e-12);
/// assert!((arc.radius - 2.125_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn construct_segment(
    p1: &DiskPoint,
    p2: &DiskPoint,
    config: &DiskConfig,
) -> GeometryResult<GeodesicSegment> {
    let eps = config.eps;
    let r_sq = config.radius_squared();

    if p1.distance_to(p2) < eps {
        return Ok(GeodesicSegment::empty());
    }

    let cross = p1.cross(p2);
    if cross.abs() < eps * r_sq {
        debug!(%p1, %p2, "Geodesic is a diameter segment");
        return Ok(GeodesicSegment::line(*p1, *p2, Degeneracy::CollinearWithOrigin));
    }

    let d = 2.0 * cross;
    if d.abs() < eps {
        return numerical_fallback(p1, p2, Degeneracy::UnstableDeterminant, config);
    }

    let (x1, y1, x2, y2) = (p1.x, p1.y, p2.x, p2.y);
    let n1 = p1.norm_squared();
    let n2 = p2.norm_squared();

    let cx = (y2 * (n1 + r_sq) - y1 * (n2 + r_sq)) / d;
    let cy = (x1 * (n2 + r_sq) - x2 * (n1 + r_sq)) / d;

    let arc_r_sq = (x1 - cx).powi(2) + (y1 - cy).powi(2);
    if arc_r_sq < eps {
        return numerical_fallback(p1, p2, Degeneracy::DegenerateRadius, config);
    }

    let start_angle = (y1 - cy).atan2(x1 - cx);
    let end_angle = (y2 - cy).atan2(x2 - cx);
    let arc = ArcDescriptor {
        center: DiskPoint::new(cx, cy),
        radius: arc_r_sq.sqrt(),
        start_angle,
        sweep_angle: normalize_sweep(end_angle - start_angle),
    };

    if !arc.is_finite() {
        return numerical_fallback(p1, p2, Degeneracy::NonFiniteArc, config);
    }

    Ok(GeodesicSegment::arc(arc))
}

/// Fold a difference of two `atan2` angles into `(-π, π]`.
fn normalize_sweep(sweep: f64) -> f64 {
    if sweep > PI {
        sweep - 2.0 * PI
    } else if sweep <= -PI {
        sweep + 2.0 * PI
    } else {
        sweep
    }
}

fn numerical_fallback(
    p1: &DiskPoint,
    p2: &DiskPoint,
    reason: Degeneracy,
    config: &DiskConfig,
) -> GeometryResult<GeodesicSegment> {
    match config.fallback {
        FallbackPolicy::StraightLine => {
            warn!(
                %p1,
                %p2,
                radius = config.radius,
                %reason,
                "Geodesic arc unavailable, using straight line"
            );
            Ok(GeodesicSegment::line(*p1, *p2, reason))
        }
        FallbackPolicy::Strict => Err(GeometryError::PrecisionLoss {
            reason: format!("{} between {} and {}", reason, p1, p2),
        }),
    }
}

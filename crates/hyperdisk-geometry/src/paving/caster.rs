//! Rays cast from the disk origin through the paving.
//!
//! A ray is the Euclidean chord from the origin to the boundary point at its
//! angle. It is followed tile by tile: in each chunk the edge whose chord it
//! crosses is either a wall, which ends the ray on that edge's geodesic, or
//! a doorway into the neighbour. Rays give up after [`MAX_RAY_STEPS`] chunks.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::hyperbolic_distance_to_center;
use crate::error::{GeometryError, GeometryResult};
use crate::geodesic::{chords_intersect, Geodesic};
use crate::point::DiskPoint;

use super::board::Paving;
use super::chunk::Chunk;
use super::direction::Direction;

/// Chunks a ray may visit before it is reported as unobstructed.
pub const MAX_RAY_STEPS: usize = 6;

/// Default field of view for [`cast_rays`], in radians.
pub const DEFAULT_FOV: f64 = 2.0;

static_assertions::assert_impl_all!(Ray: Send, Sync, Copy);
static_assertions::assert_impl_all!(RayHit: Send, Sync, Clone);

/// Which chunk edges stop a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walls {
    /// Edges for which [`Chunk::edge_hash`] with this seed is true.
    Seeded(u64),
    /// Every edge.
    Solid,
    /// No edge.
    Open,
}

impl Walls {
    pub fn blocks(&self, chunk: &Chunk, direction: Direction) -> GeometryResult<bool> {
        match self {
            Walls::Seeded(seed) => chunk.edge_hash(*seed, direction),
            Walls::Solid => Ok(true),
            Walls::Open => Ok(false),
        }
    }
}

/// Where a ray stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    pub angle: f64,
    /// Hyperbolic distance from the origin; infinite when no wall was met.
    pub distance: f64,
    /// Hit point on the wall geodesic, or the ray's boundary end.
    pub point: DiskPoint,
    /// Word of the chunk owning the wall; `None` when no wall was met.
    pub chunk: Option<String>,
    pub wall: Option<Direction>,
}

impl RayHit {
    pub fn is_blocked(&self) -> bool {
        self.wall.is_some()
    }
}

/// Ray from the origin of the unit disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    angle: f64,
    end: DiskPoint,
}

impl Ray {
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            end: DiskPoint::from_polar(1.0, angle),
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Boundary point the ray heads for.
    #[inline]
    pub fn end(&self) -> DiskPoint {
        self.end
    }

    fn crosses(&self, a: &DiskPoint, b: &DiskPoint) -> bool {
        chords_intersect(a, b, &DiskPoint::ORIGIN, &self.end)
    }

    /// Parameter `t` of the first point `t·end` where the ray meets
    /// `geodesic`. Diameters meet it at the origin.
    ///
    /// # Errors
    ///
    /// `GeometryError::NumericalFailure` when the ray's line misses the
    /// geodesic's circle.
    pub fn parameter_on(&self, geodesic: &Geodesic) -> GeometryResult<f64> {
        let (Some(center), Some(radius)) =
            (geodesic.euclidean_center(), geodesic.euclidean_radius())
        else {
            return Ok(0.0);
        };

        let a = self.end.norm_squared();
        let b = -2.0 * self.end.dot(&center);
        let c = center.norm_squared() - radius * radius;
        let det = b * b - 4.0 * a * c;
        if det < 0.0 || !det.is_finite() {
            return Err(GeometryError::NumericalFailure(format!(
                "ray at angle {} misses geodesic circle centred at {:?} (discriminant {})",
                self.angle, center, det
            )));
        }
        Ok((-b - det.sqrt()) / (2.0 * a))
    }

    /// Follow the ray from `start`, which must contain the origin.
    ///
    /// # Errors
    ///
    /// `GeometryError::NumericalFailure` if the ray leaves a chunk through no
    /// edge (it runs exactly through a vertex) or misses the wall's circle,
    /// and any error from stepping into a neighbour.
    pub fn trace(&self, start: &Chunk, walls: &Walls) -> GeometryResult<RayHit> {
        let mut chunk = start.clone();

        for step in 0..MAX_RAY_STEPS {
            // After the first hop the ray enters through the backward edge
            let exit = Direction::ALL
                .into_iter()
                .filter(|&d| step == 0 || d != Direction::Backward)
                .find(|&d| {
                    let (a, b) = chunk.edge(d);
                    self.crosses(&a, &b)
                });
            let Some(direction) = exit else {
                return Err(GeometryError::NumericalFailure(format!(
                    "ray at angle {} leaves chunk {} through no edge",
                    self.angle, chunk
                )));
            };

            if walls.blocks(&chunk, direction)? {
                let (a, b) = chunk.edge(direction);
                let t = self.parameter_on(&Geodesic::from_two_points(&a, &b))?;
                let point = self.end.scale(t);
                debug!(angle = self.angle, %chunk, %direction, step, "Ray hit wall");
                return Ok(RayHit {
                    angle: self.angle,
                    distance: hyperbolic_distance_to_center(&point),
                    point,
                    chunk: Some(chunk.word()),
                    wall: Some(direction),
                });
            }
            chunk = chunk.neighbor(direction)?;
        }

        Ok(RayHit {
            angle: self.angle,
            distance: f64::INFINITY,
            point: self.end,
            chunk: None,
            wall: None,
        })
    }

    /// Hyperbolic distance to the first wall, `f64::INFINITY` if none is met
    /// within [`MAX_RAY_STEPS`] chunks.
    pub fn cast(&self, start: &Chunk, walls: &Walls) -> GeometryResult<f64> {
        Ok(self.trace(start, walls)?.distance)
    }

    /// Point where the ray meets the first wall, or the ray's boundary end.
    pub fn intersection(&self, start: &Chunk, walls: &Walls) -> GeometryResult<DiskPoint> {
        Ok(self.trace(start, walls)?.point)
    }
}

/// Cast `width` rays spread evenly over `fov` radians around the upward
/// direction, left-most first.
///
/// # Errors
///
/// `GeometryError::InvalidInput` for zero rays or a non-finite field of
/// view, then any [`Ray::trace`] error.
pub fn cast_rays(
    paving: &Paving,
    width: usize,
    fov: f64,
    walls: &Walls,
) -> GeometryResult<Vec<RayHit>> {
    if width == 0 {
        return Err(GeometryError::InvalidInput("ray count must be at least 1".to_string()));
    }
    if !fov.is_finite() {
        return Err(GeometryError::InvalidInput(format!(
            "field of view must be finite (got {})",
            fov
        )));
    }

    (0..width)
        .map(|i| {
            let angle = fov * (0.5 - i as f64 / width as f64) + FRAC_PI_2;
            Ray::new(angle).trace(paving.center_chunk(), walls)
        })
        .collect()
}

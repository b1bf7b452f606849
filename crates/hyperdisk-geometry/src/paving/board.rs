//! Viewer-centred paving.

use std::collections::HashSet;

use num_complex::Complex64;
use tracing::{debug, warn};

use crate::error::GeometryResult;
use crate::mobius::{MobiusRotation, MobiusTranslation, DEFAULT_MOBIUS_EPS};
use crate::point::DiskPoint;

use super::chunk::Chunk;
use super::direction::Direction;

/// Upper bound on tile hops during one movement.
pub const MAX_MOVEMENT_STEPS: usize = 64;

/// The paving as seen from the disk origin.
///
/// Tracks the chunk containing the origin; movements and rotations move the
/// chunk's vertices and hop to a neighbour whenever the origin leaves it.
#[derive(Debug, Clone)]
pub struct Paving {
    center: Chunk,
    eps: f64,
}

impl Default for Paving {
    fn default() -> Self {
        Self::new()
    }
}

impl Paving {
    pub fn new() -> Self {
        Self {
            center: Chunk::origin(),
            eps: DEFAULT_MOBIUS_EPS,
        }
    }

    pub fn with_eps(eps: f64) -> Self {
        Self {
            center: Chunk::origin(),
            eps,
        }
    }

    /// The chunk containing the origin.
    #[inline]
    pub fn center_chunk(&self) -> &Chunk {
        &self.center
    }

    /// Move the viewer a distance `speed` (unit-disk Euclidean) toward
    /// `angle`: the point `speed·e^{i·angle}` is translated to the origin.
    ///
    /// # Errors
    ///
    /// `GeometryError::InvalidMobiusParameter` for `speed >= 1`, and any
    /// reflection error raised while stepping into a neighbour.
    pub fn apply_movement(&mut self, angle: f64, speed: f64) -> GeometryResult<()> {
        let target = Complex64::from_polar(speed, angle);
        let translation = MobiusTranslation::to_origin(target, self.eps)?;
        self.center.transform(&translation);

        for _ in 0..MAX_MOVEMENT_STEPS {
            let Some(direction) = self.find_exit_edge() else {
                return Ok(());
            };
            let next = self.center.neighbor(direction)?;
            debug!(from = %self.center, to = %next, %direction, "Crossed chunk edge");
            self.center = next;
        }

        warn!(
            steps = MAX_MOVEMENT_STEPS,
            chunk = %self.center,
            "Origin still outside center chunk after maximum steps"
        );
        Ok(())
    }

    /// Edge of the center chunk separating it from the origin, if any.
    ///
    /// Uses the straight chord between consecutive vertices: the edge whose
    /// chord has the chunk center and the origin on opposite sides.
    pub fn find_exit_edge(&self) -> Option<Direction> {
        let vertices = self.center.vertices();
        let center = self.center.center();

        (0..4).find_map(|i| {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % 4];
            let inside = center.orientation(&p1, &p2);
            let outside = DiskPoint::ORIGIN.orientation(&p1, &p2);
            if inside * outside < 0.0 {
                self.center.direction_of_edge(&p1, &p2)
            } else {
                None
            }
        })
    }

    /// Rotate the view about the origin by `angle` radians.
    pub fn apply_rotation(&mut self, angle: f64) {
        self.center.transform(&MobiusRotation::about_origin(angle));
    }

    /// The center chunk and every chunk within `depth` steps of it, in
    /// breadth-first order without duplicates.
    pub fn neighbors_within(&self, depth: usize) -> GeometryResult<Vec<Chunk>> {
        let mut seen: HashSet<Vec<Direction>> = HashSet::new();
        seen.insert(self.center.directions().to_vec());

        let mut chunks = vec![self.center.clone()];
        let mut frontier_start = 0;

        for _ in 0..depth {
            let frontier_end = chunks.len();
            for index in frontier_start..frontier_end {
                for direction in Direction::ALL {
                    let next = chunks[index].neighbor(direction)?;
                    if seen.insert(next.directions().to_vec()) {
                        chunks.push(next);
                    }
                }
            }
            frontier_start = frontier_end;
        }

        Ok(chunks)
    }
}

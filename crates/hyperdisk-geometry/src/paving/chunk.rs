//! Tiles of the {4,5} paving.

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::GeometryResult;
use crate::geodesic::Geodesic;
use crate::inversion::GeodesicReflection;
use crate::mobius::DiskAutomorphism;
use crate::point::DiskPoint;

use super::direction::Direction;
use super::simplify::simplify;

/// Half the side of the origin tile: the square centred at the origin whose
/// corners have interior angle `2π/5`.
pub fn origin_half_side() -> f64 {
    let t = (PI / 2.0 - PI / 5.0).tan();
    let one = (PI / 4.0).tan();
    ((t - one) / ((t + one) * 2.0)).sqrt()
}

/// One quadrilateral tile.
///
/// Vertices are ordered top-right, top-left, bottom-left, bottom-right in
/// the tile's own frame. Two chunks are equal when their simplified words
/// are equal, wherever their vertices currently sit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    directions: Vec<Direction>,
    holonomy: Direction,
    vertices: [DiskPoint; 4],
}

impl Chunk {
    /// Chunk reached by `directions`, simplified with an initial `Forward`
    /// holonomy.
    pub fn new(directions: Vec<Direction>, vertices: [DiskPoint; 4]) -> Self {
        let (directions, holonomy) = simplify(directions, Direction::Forward);
        Self {
            directions,
            holonomy,
            vertices,
        }
    }

    /// The tile centred at the origin.
    pub fn origin() -> Self {
        let s = origin_half_side();
        Self::new(
            Vec::new(),
            [
                DiskPoint::new(s, s),
                DiskPoint::new(-s, s),
                DiskPoint::new(-s, -s),
                DiskPoint::new(s, -s),
            ],
        )
    }

    /// Walk `path` from the origin tile.
    pub fn follow(path: &[Direction]) -> GeometryResult<Self> {
        path.iter()
            .try_fold(Self::origin(), |chunk, &direction| chunk.neighbor(direction))
    }

    #[inline]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    #[inline]
    pub fn holonomy(&self) -> Direction {
        self.holonomy
    }

    #[inline]
    pub fn vertices(&self) -> &[DiskPoint; 4] {
        &self.vertices
    }

    pub fn is_origin(&self) -> bool {
        self.directions.is_empty()
    }

    /// Word as a string of `L`/`R`/`F`/`B`; empty for the origin.
    pub fn word(&self) -> String {
        self.directions.iter().map(|d| d.as_char()).collect()
    }

    /// Base-4 encoding of the word, least significant step first.
    ///
    /// Wraps on overflow, so long words are not uniquely encoded.
    pub fn encode(&self) -> u64 {
        self.directions
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, d)| {
                let place = 4u64.wrapping_pow(i as u32);
                acc.wrapping_add(d.ordinal().wrapping_mul(place))
            })
    }

    /// Deterministic coin flip for the edge shared with the neighbour in
    /// `direction`. Both tiles sharing an edge get the same value.
    pub fn edge_hash(&self, seed: u64, direction: Direction) -> GeometryResult<bool> {
        let here = self.encode();
        let there = self.neighbor(direction)?.encode();
        let (a, b) = (here.min(there), here.max(there));

        let mut hash = seed ^ 0x9E37_79B9_7F4A_7C15;
        hash ^= (a << 32) | (b & 0xFFFF_FFFF);
        hash = hash.wrapping_mul(0xBF58_476D_1CE4_E5B9).rotate_left(31);
        hash = hash.wrapping_mul(0x94D0_49BB_1331_11EB);
        hash ^= hash >> 33;

        Ok(hash & 1 == 1)
    }

    fn edge_index(direction: Direction) -> usize {
        match direction {
            Direction::Forward => 0,
            Direction::Left => 1,
            Direction::Backward => 2,
            Direction::Right => 3,
        }
    }

    fn edge_direction(index: usize) -> Direction {
        match index % 4 {
            0 => Direction::Forward,
            1 => Direction::Left,
            2 => Direction::Backward,
            _ => Direction::Right,
        }
    }

    /// The two vertices bounding the edge crossed by `direction`.
    pub fn edge(&self, direction: Direction) -> (DiskPoint, DiskPoint) {
        let i = Self::edge_index(direction);
        (self.vertices[i], self.vertices[(i + 1) % 4])
    }

    /// Direction of the edge running from `a` to `b`, if it is one.
    pub fn direction_of_edge(&self, a: &DiskPoint, b: &DiskPoint) -> Option<Direction> {
        (0..4)
            .find(|&i| self.vertices[i].approx_eq(a) && self.vertices[(i + 1) % 4].approx_eq(b))
            .map(Self::edge_direction)
    }

    /// Adjacent tile across the edge for `direction`.
    ///
    /// The vertices are permuted so the new tile's frame faces away from
    /// this one, then reflected across the shared edge's geodesic.
    pub fn neighbor(&self, direction: Direction) -> GeometryResult<Chunk> {
        let (a, b) = self.edge(direction);
        let reflection = GeodesicReflection::new(Geodesic::from_two_points(&a, &b))?;

        let v = &self.vertices;
        let permuted = match direction {
            Direction::Forward => [v[3], v[2], v[1], v[0]],
            Direction::Backward => [v[1], v[0], v[3], v[2]],
            Direction::Left => [v[0], v[3], v[2], v[1]],
            Direction::Right => [v[2], v[1], v[0], v[3]],
        };

        let mut vertices = [DiskPoint::ORIGIN; 4];
        for (slot, vertex) in vertices.iter_mut().zip(permuted.iter()) {
            *slot = reflection.apply(vertex)?;
        }

        let mut directions = self.directions.clone();
        directions.push(self.holonomy.add(direction));
        Ok(Chunk::new(directions, vertices))
    }

    /// All four neighbours in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> GeometryResult<[Chunk; 4]> {
        Ok([
            self.neighbor(Direction::Left)?,
            self.neighbor(Direction::Right)?,
            self.neighbor(Direction::Forward)?,
            self.neighbor(Direction::Backward)?,
        ])
    }

    /// Euclidean mean of the vertices.
    pub fn center(&self) -> DiskPoint {
        let sum = self
            .vertices
            .iter()
            .fold(DiskPoint::ORIGIN, |acc, &v| acc + v);
        sum.scale(0.25)
    }

    /// Move the vertices by a disk isometry; the word is unchanged.
    pub fn transform<M: DiskAutomorphism>(&mut self, map: &M) {
        for vertex in self.vertices.iter_mut() {
            *vertex = map.apply_point(vertex);
        }
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.directions == other.directions
    }
}

impl Eq for Chunk {}

impl Hash for Chunk {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directions.hash(state);
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_origin() {
            return f.write_str("origin");
        }
        for direction in &self.directions {
            write!(f, "{}", direction)?;
        }
        Ok(())
    }
}

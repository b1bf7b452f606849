//! The {4,5} paving of the hyperbolic plane.
//!
//! Five quadrilaterals meet at every vertex. Each tile ("chunk") is named by
//! the word of [`Direction`] steps that reaches it from the origin tile,
//! reduced to a canonical form by a fixed set of rewrite rules, plus a
//! holonomy recording how the tile's frame is turned relative to the path.
//!
//! - [`direction`]: step algebra (opposite, quarter turns, composition)
//! - [`simplify`]: word rewriting to a fixed point
//! - [`chunk`]: tiles, their vertices and neighbours
//! - [`board`]: a viewer-centred paving that follows translations and
//!   rotations of the disk
//! - [`caster`]: rays from the viewer stopped by walls on tile edges

mod board;
mod caster;
mod chunk;
mod direction;
mod simplify;


pub use self::board::{Paving, MAX_MOVEMENT_STEPS};
pub use self::caster::{cast_rays, Ray, RayHit, Walls, DEFAULT_FOV, MAX_RAY_STEPS};
pub use self::chunk::{origin_half_side, Chunk};
pub use self::direction::Direction;
pub use self::simplify::{simplify, MAX_SIMPLIFY_PASSES};

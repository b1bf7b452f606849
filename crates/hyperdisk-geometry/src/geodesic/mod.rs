//! Hyperbolic geodesics in the Poincare disk.
//!
//! Geodesics of the Poincare disk are either diameters or arcs of circles
//! orthogonal to the boundary circle. Two representations are provided:
//!
//! - [`GeodesicSegment`]: the curve between two interior points of a disk of
//!   radius `R`, as a renderable descriptor (empty, straight chord, or arc).
//!   Built by [`construct_segment`], recomputed on demand, never stored.
//! - [`Geodesic`]: the full geodesic through two unit-disk points in
//!   equation form `x² + y² + ax + by + 1 = 0` (or `ax + by = 0` for
//!   diameters), with membership tests and ideal endpoints.
//! - [`HyperbolicSegment`]: a bounded piece of a unit-disk geodesic with
//!   hyperbolic length and containment.
//!
//! # Orthogonality
//!
//! A circle of center `c` and radius `r` is orthogonal to the boundary
//! circle of radius `R` iff `|c|² = R² + r²`. The closed-form center used by
//! `construct_segment` satisfies this by construction.

mod equation;
mod hyperbolic_segment;
mod sampling;
mod segment;

#[cfg(test)]
mod tests_equation;

pub use equation::{Geodesic, GEODESIC_TOLERANCE};
pub use hyperbolic_segment::{chords_intersect, HyperbolicSegment};
pub use segment::{construct_segment, ArcDescriptor, Degeneracy, GeodesicCurve, GeodesicSegment};

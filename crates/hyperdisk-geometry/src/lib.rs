//! Poincare Disk Geometry
//!
//! Numeric core for drawing and animating the Poincare disk model of the
//! hyperbolic plane: projections from the hyperboloid, geodesic arcs between
//! interior points, Mobius isometries, reflections and the {4,5} paving.
//!
//! # Architecture
//!
//! - **config**: disk radius, tolerances and fallback policy
//! - **error**: `GeometryError` and `GeometryResult`
//! - **point**: `DiskPoint` and `HyperboloidPoint`
//! - **projection**: hyperboloid <-> disk, Klein and gnomonic models
//! - **distance**: Euclidean and hyperbolic distances
//! - **geodesic**: arc construction, equation form, polyline sampling
//! - **mobius**: rotations about interior points and translations
//! - **inversion**: circle inversion and reflection across geodesics
//! - **paving**: {4,5} tiles addressed by direction words, and rays cast
//!   through them
//! - **disk**: `PoincareDisk`, validating and rescaling for any radius
//!
//! Everything is synchronous and allocation-light; no function panics on
//! degenerate input. Near-singular cases fall back to a documented value and
//! are logged through `tracing`.
//!
//! # Example
//!
//! ```
//! use hyperdisk_geometry::{construct_segment, DiskConfig, DiskPoint, GeodesicCurve};
//!
//! let config = DiskConfig::default();
//! let seg = construct_segment(&DiskPoint::new(0.5, 0.0), &DiskPoint::new(0.0, 0.5), &config)?;
//! match seg.curve {
//!     GeodesicCurve::Arc(arc) => {
//!         let c = arc.center.norm_squared();
//!         assert!((c - (1.0 + arc.radius * arc.radius)).abs() < 1e-12);
//!     }
//!     other => panic!("expected an arc, got {:?}", other),
//! }
//! # Ok::<(), hyperdisk_geometry::GeometryError>(())
//! ```

pub mod config;
pub mod disk;
pub mod distance;
pub mod error;
pub mod geodesic;
pub mod inversion;
pub mod mobius;
pub mod paving;
pub mod point;
pub mod projection;

// Re-exports for convenience
pub use config::{DiskConfig, FallbackPolicy};
pub use disk::PoincareDisk;
pub use distance::{hyperbolic_distance, hyperbolic_distance_to_center};
pub use error::{GeometryError, GeometryResult};
pub use geodesic::{
    construct_segment, ArcDescriptor, Degeneracy, Geodesic, GeodesicCurve, GeodesicSegment,
    HyperbolicSegment,
};
pub use inversion::{CircleInversion, GeodesicReflection, Reflection};
pub use mobius::{DiskAutomorphism, DiskScale, MobiusRotation, MobiusTranslation};
pub use paving::{cast_rays, Chunk, Direction, Paving, Ray, RayHit, Walls};
pub use point::{DiskPoint, HyperboloidPoint};
pub use projection::{disk_to_hyperboloid, hyperboloid_to_disk, Projection};

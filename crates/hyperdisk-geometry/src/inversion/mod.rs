//! Reflections of the Poincare disk.
//!
//! - [`CircleInversion`]: inversion in a circle, `c + (R2 / |p - c|²)(p - c)`
//! - [`GeodesicReflection`]: the hyperbolic reflection across a geodesic;
//!   a Euclidean mirror for diameters, circle inversion otherwise
//!
//! Both maps are involutions away from their singular point.

mod circle;
mod reflection;


pub use self::circle::{CircleInversion, Reflection, DEFAULT_INVERSION_EPS};
pub use self::reflection::GeodesicReflection;

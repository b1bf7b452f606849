//! Point types for the Poincare disk and the hyperboloid model.
//!
//! # Module Structure
//!
//! - [`types`]: `DiskPoint` and `HyperboloidPoint` definitions
//! - [`ops`]: construction, norms, complex conversion, arithmetic

mod ops;
mod types;

#[cfg(test)]
mod tests;

pub use types::{DiskPoint, HyperboloidPoint, POINT_TOLERANCE};

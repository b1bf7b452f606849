//! Projections between models of the hyperbolic plane.
//!
//! - [`hyperboloid`]: central projection from the hyperboloid's upper sheet
//!   onto the Poincare disk, and its inverse
//! - [`models`]: re-projection of Poincare disk points into the Klein and
//!   gnomonic models
//!
//! # Mathematics
//!
//! - Hyperboloid -> disk: `(x, y, z) -> (x, y) / (1 + z)`
//! - Disk -> hyperboloid: `(x, y) -> (2x, 2y, 1 + r²) / (1 - r²)`
//! - Klein: `p -> 2p / (1 + |p|²)`
//! - Gnomonic: `p -> d(0, p) · p / |p|`

mod hyperboloid;
mod models;


pub use hyperboloid::{
    disk_to_hyperboloid, hyperboloid_from_polar, hyperboloid_to_disk, lift_to_hyperboloid,
};
pub use models::Projection;

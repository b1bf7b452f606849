//! Tests for DiskPoint and HyperboloidPoint.
//!
//! # Test Modules
//!
//! - [`construction`]: constructors and complex conversion
//! - [`arithmetic`]: operators, norms, orientation
//! - [`hyperboloid`]: hyperboloid point helpers

mod arithmetic;

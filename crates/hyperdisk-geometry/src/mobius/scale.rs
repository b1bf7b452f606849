//! Conversion between a disk of radius `R` and the unit disk.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::point::DiskPoint;

/// Rescales points of a radius-`R` disk to the unit disk and back.
///
/// A zero radius collapses everything to the origin rather than dividing by
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskScale {
    pub radius: f64,
}

impl DiskScale {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Disk coordinates divided by `R`.
    pub fn to_unit(&self, point: &DiskPoint) -> Complex64 {
        if self.radius == 0.0 {
            return Complex64::new(0.0, 0.0);
        }
        point.to_complex() / self.radius
    }

    /// Unit-disk value multiplied by `R`.
    pub fn from_unit(&self, z: Complex64) -> DiskPoint {
        if self.radius == 0.0 {
            return DiskPoint::ORIGIN;
        }
        DiskPoint::from_complex(z * self.radius)
    }
}

impl Default for DiskScale {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

//! Mobius automorphisms of the unit disk.
//!
//! Every orientation-preserving isometry of the Poincare disk is a Mobius map
//! `z -> e^{iθ} (z - p) / (1 - conj(p) z)`. Two families are exposed:
//!
//! - [`MobiusRotation`]: rotation by `θ` about an interior point `p`
//! - [`MobiusTranslation`]: `z -> (z + w) / (1 + conj(w) z)`, which moves the
//!   origin to `w`
//!
//! Both work on unit-disk complex numbers. [`DiskScale`] converts between a
//! disk of radius `R` and the unit disk.
//!
//! # Numerical guards
//!
//! A denominator with modulus below `eps` (default `1e-9`) short-circuits the
//! map instead of dividing; see each type for the value returned.

mod rotation;
mod scale;
mod translation;

#[cfg(test)]
mod tests_roundtrip;

use num_complex::Complex64;

use crate::point::DiskPoint;

pub use self::rotation::MobiusRotation;
pub use self::scale::DiskScale;
pub use self::translation::MobiusTranslation;

/// Default modulus below which Mobius denominators count as zero.
pub const DEFAULT_MOBIUS_EPS: f64 = 1e-9;

/// Isometry of the unit Poincare disk.
pub trait DiskAutomorphism {
    /// Image of a unit-disk point.
    fn apply(&self, z: Complex64) -> Complex64;

    /// The map undoing `self`.
    fn inverse(&self) -> Self
    where
        Self: Sized;

    /// [`apply`](Self::apply) for points.
    fn apply_point(&self, point: &DiskPoint) -> DiskPoint {
        DiskPoint::from_complex(self.apply(point.to_complex()))
    }
}

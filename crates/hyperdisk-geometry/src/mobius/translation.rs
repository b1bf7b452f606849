//! Hyperbolic translations.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GeometryError, GeometryResult};

use super::{DiskAutomorphism, DEFAULT_MOBIUS_EPS};

/// `z -> (z + w) / (1 + conj(w) z)`; sends the origin to `w` along the
/// diameter through `w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobiusTranslation {
    offset: Complex64,
    eps: f64,
}

impl MobiusTranslation {
    /// Translation by `offset`, which must satisfy `|offset| < 1`.
    ///
    /// # Errors
    ///
    /// `GeometryError::InvalidMobiusParameter` for `|offset| >= 1` or a
    /// non-finite offset.
    pub fn new(offset: Complex64, eps: f64) -> GeometryResult<Self> {
        let modulus = offset.norm();
        if !modulus.is_finite() || modulus >= 1.0 {
            return Err(GeometryError::InvalidMobiusParameter { modulus });
        }
        Ok(Self { offset, eps })
    }

    /// Translation taking `target` to the origin.
    pub fn to_origin(target: Complex64, eps: f64) -> GeometryResult<Self> {
        Self::new(-target, eps)
    }

    pub fn identity() -> Self {
        Self {
            offset: Complex64::new(0.0, 0.0),
            eps: DEFAULT_MOBIUS_EPS,
        }
    }

    #[inline]
    pub fn offset(&self) -> Complex64 {
        self.offset
    }
}

impl DiskAutomorphism for MobiusTranslation {
    fn apply(&self, z: Complex64) -> Complex64 {
        let w = self.offset;
        let denominator = Complex64::new(1.0, 0.0) + w.conj() * z;
        if denominator.norm() < self.eps {
            warn!(
                z = %z,
                offset = %w,
                "Translation denominator vanished, input returned unchanged"
            );
            return z;
        }
        (z + w) / denominator
    }

    fn inverse(&self) -> Self {
        Self {
            offset: -self.offset,
            eps: self.eps,
        }
    }
}

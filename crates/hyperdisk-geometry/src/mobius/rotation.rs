//! Rotation about an interior point.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};

use super::{DiskAutomorphism, DEFAULT_MOBIUS_EPS};

/// Hyperbolic rotation by `angle` radians about `center`.
///
/// Conjugates the Euclidean rotation `z -> e^{iθ} z` by the Mobius map that
/// sends `center` to the origin:
///
/// ```text
/// z'  = (z - p) / (1 - conj(p) z)
/// z'' = e^{iθ} z'
/// out = (z'' + p) / (1 + conj(p) z'')
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobiusRotation {
    center: Complex64,
    angle: f64,
    eps: f64,
}

impl MobiusRotation {
    /// Rotation about `center`, which must satisfy `|center| < 1`.
    ///
    /// # Errors
    ///
    /// `GeometryError::InvalidMobiusParameter` if `center` is on or outside
    /// the unit circle or not finite.
    pub fn new(center: Complex64, angle: f64, eps: f64) -> GeometryResult<Self> {
        let modulus = center.norm();
        if !modulus.is_finite() || modulus >= 1.0 {
            return Err(GeometryError::InvalidMobiusParameter { modulus });
        }
        Ok(Self { center, angle, eps })
    }

    /// Euclidean rotation about the disk center.
    pub fn about_origin(angle: f64) -> Self {
        Self {
            center: Complex64::new(0.0, 0.0),
            angle,
            eps: DEFAULT_MOBIUS_EPS,
        }
    }

    #[inline]
    pub fn center(&self) -> Complex64 {
        self.center
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl DiskAutomorphism for MobiusRotation {
    fn apply(&self, z: Complex64) -> Complex64 {
        let p = self.center;
        let turn = Complex64::from_polar(1.0, self.angle);

        if p.norm() < self.eps {
            return turn * z;
        }

        let to_origin = Complex64::new(1.0, 0.0) - p.conj() * z;
        if to_origin.norm() < self.eps {
            debug!(z = %z, center = %p, "Rotation input at pole, returned unchanged");
            return z;
        }
        let rotated = turn * ((z - p) / to_origin);

        let back = Complex64::new(1.0, 0.0) + p.conj() * rotated;
        if back.norm() < self.eps {
            debug!(z = %z, center = %p, "Rotation image at pole, returning center");
            return p;
        }
        (rotated + p) / back
    }

    fn inverse(&self) -> Self {
        Self {
            angle: -self.angle,
            ..*self
        }
    }
}

//! Inversion in a circle.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GeometryError, GeometryResult};
use crate::point::DiskPoint;

/// Default squared distance below which a point counts as the center.
pub const DEFAULT_INVERSION_EPS: f64 = 1e-12;

/// Image of a point under [`CircleInversion::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    pub point: DiskPoint,
    /// The input sat at the center of inversion and was returned unchanged.
    pub singular: bool,
}

/// Inversion in the circle of center `center` and squared radius
/// `radius_squared`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleInversion {
    center: DiskPoint,
    radius_squared: f64,
    eps: f64,
}

impl CircleInversion {
    /// # Errors
    ///
    /// `GeometryError::InvalidInput` unless `radius_squared` is finite and
    /// positive and `center` is finite.
    pub fn new(center: DiskPoint, radius_squared: f64, eps: f64) -> GeometryResult<Self> {
        if !center.is_finite() {
            return Err(GeometryError::InvalidInput(format!(
                "inversion center {} is not finite",
                center
            )));
        }
        if !radius_squared.is_finite() || radius_squared <= 0.0 {
            return Err(GeometryError::InvalidInput(format!(
                "inversion radius squared must be positive, got {}",
                radius_squared
            )));
        }
        Ok(Self {
            center,
            radius_squared,
            eps,
        })
    }

    /// Inversion in the supporting circle of the geodesic whose circle is
    /// centered at `center`, for a disk of radius `disk_radius`.
    ///
    /// Orthogonality to the boundary fixes the squared radius at
    /// `|center|² - disk_radius²`.
    ///
    /// # Errors
    ///
    /// `GeometryError::InvalidInput` if `center` is not outside the disk.
    pub fn for_geodesic_center(
        center: DiskPoint,
        disk_radius: f64,
        eps: f64,
    ) -> GeometryResult<Self> {
        let radius_squared = center.norm_squared() - disk_radius * disk_radius;
        if radius_squared <= 0.0 {
            return Err(GeometryError::InvalidInput(format!(
                "geodesic circle center {} must lie outside the disk of radius {}",
                center, disk_radius
            )));
        }
        Self::new(center, radius_squared, eps)
    }

    #[inline]
    pub fn center(&self) -> DiskPoint {
        self.center
    }

    #[inline]
    pub fn radius_squared(&self) -> f64 {
        self.radius_squared
    }

    /// Invert `point`.
    ///
    /// A point within `sqrt(eps)` of the center is returned unchanged with
    /// `singular` set.
    pub fn apply(&self, point: &DiskPoint) -> Reflection {
        let offset = *point - self.center;
        let dist_sq = offset.norm_squared();
        if dist_sq < self.eps {
            warn!(%point, center = %self.center, "Inversion at center, point returned unchanged");
            return Reflection {
                point: *point,
                singular: true,
            };
        }
        Reflection {
            point: self.center + offset.scale(self.radius_squared / dist_sq),
            singular: false,
        }
    }

    /// Invert `point`, failing at the center.
    ///
    /// # Errors
    ///
    /// `GeometryError::SingularInversion` where [`apply`](Self::apply) would
    /// flag the result as singular.
    pub fn try_apply(&self, point: &DiskPoint) -> GeometryResult<DiskPoint> {
        let offset = *point - self.center;
        if offset.norm_squared() < self.eps {
            return Err(GeometryError::SingularInversion {
                x: point.x,
                y: point.y,
            });
        }
        Ok(self.center + offset.scale(self.radius_squared / offset.norm_squared()))
    }
}

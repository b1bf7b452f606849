//! Hyperbolic reflection across a geodesic.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::geodesic::Geodesic;
use crate::point::DiskPoint;

use super::circle::{CircleInversion, DEFAULT_INVERSION_EPS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum Mirror {
    /// Line through the origin with this normal.
    Line(DiskPoint),
    Circle(CircleInversion),
}

/// Reflection of the unit disk across a [`Geodesic`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicReflection {
    geodesic: Geodesic,
    mirror: Mirror,
}

impl GeodesicReflection {
    pub fn new(geodesic: Geodesic) -> GeometryResult<Self> {
        Self::with_eps(geodesic, DEFAULT_INVERSION_EPS)
    }

    /// # Errors
    ///
    /// `GeometryError::InvalidInput` when `geodesic` has a zero normal or its
    /// coefficients describe no circle (`a² + b² <= 4`).
    pub fn with_eps(geodesic: Geodesic, eps: f64) -> GeometryResult<Self> {
        let mirror = match (geodesic.euclidean_center(), geodesic.euclidean_radius()) {
            (Some(center), Some(radius)) if radius.is_finite() && radius > 0.0 => {
                Mirror::Circle(CircleInversion::new(center, radius * radius, eps)?)
            }
            (Some(_), _) => {
                return Err(GeometryError::InvalidInput(format!(
                    "coefficients ({}, {}) do not describe a geodesic",
                    geodesic.a, geodesic.b
                )))
            }
            (None, _) => {
                let normal = DiskPoint::new(geodesic.a, geodesic.b);
                if normal.norm_squared() < eps {
                    return Err(GeometryError::InvalidInput(
                        "diameter normal is zero".to_string(),
                    ));
                }
                Mirror::Line(normal)
            }
        };
        Ok(Self { geodesic, mirror })
    }

    /// Reflection across the geodesic through `u` and `v`.
    pub fn through(u: &DiskPoint, v: &DiskPoint) -> GeometryResult<Self> {
        Self::new(Geodesic::from_two_points(u, v))
    }

    #[inline]
    pub fn geodesic(&self) -> &Geodesic {
        &self.geodesic
    }

    /// Reflect `point` across the geodesic.
    ///
    /// # Errors
    ///
    /// `GeometryError::SingularInversion` for the center of the geodesic's
    /// supporting circle.
    pub fn apply(&self, point: &DiskPoint) -> GeometryResult<DiskPoint> {
        match &self.mirror {
            Mirror::Line(normal) => {
                let along = normal.dot(point) / normal.norm_squared();
                Ok(*point - normal.scale(2.0 * along))
            }
            Mirror::Circle(inversion) => inversion.try_apply(point),
        }
    }
}

//! Disk model re-projections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::distance::hyperbolic_distance_to_center;
use crate::point::DiskPoint;

/// Model in which a unit Poincare disk point is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Conformal; geodesics are circular arcs orthogonal to the boundary.
    #[default]
    Poincare,
    /// Non-conformal; geodesics are straight chords.
    Klein,
    /// Radial rescaling so that Euclidean distance from the origin equals
    /// hyperbolic distance from the origin.
    Gnomonic,
}

impl Projection {
    pub const ALL: [Projection; 3] =
        [Projection::Poincare, Projection::Klein, Projection::Gnomonic];

    /// Parse a projection name case-insensitively.
    ///
    /// Unknown names log a warning and fall back to [`Projection::Poincare`].
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(projection) => projection,
            Err(_) => {
                warn!(name, "Unknown projection, using default");
                Projection::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Poincare => "poincare",
            Projection::Klein => "klein",
            Projection::Gnomonic => "gnomonic",
        }
    }

    /// Map a unit Poincare disk point into this model.
    ///
    /// The gnomonic image of a point at or past the boundary has infinite
    /// coordinates; the origin maps to itself in every model.
    pub fn apply(&self, point: &DiskPoint) -> DiskPoint {
        match self {
            Projection::Poincare => *point,
            Projection::Klein => point.scale(2.0 / (1.0 + point.norm_squared())),
            Projection::Gnomonic => {
                let norm = point.norm();
                if norm == 0.0 {
                    return DiskPoint::ORIGIN;
                }
                point.scale(hyperbolic_distance_to_center(point) / norm)
            }
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Projection::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown projection '{}'", s))
    }
}

//! Numerical fallback policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Behaviour of the geodesic constructor when a circle fit is numerically
/// unstable (near-zero determinant, vanishing arc radius, non-finite arc).
///
/// Exact degeneracies (coincident points, points collinear with the disk
/// center) are geometry, not precision problems, and succeed under both
/// policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Substitute the straight chord and log a warning.
    #[default]
    StraightLine,
    /// Return `GeometryError::PrecisionLoss`.
    Strict,
}

impl FallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::StraightLine => "straight_line",
            FallbackPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "straight_line" | "line" => Ok(FallbackPolicy::StraightLine),
            "strict" => Ok(FallbackPolicy::Strict),
            other => Err(GeometryError::InvalidConfig(format!(
                "unknown fallback policy '{}' (expected straight_line or strict)",
                other
            ))),
        }
    }
}

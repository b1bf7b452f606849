//! Error types for Poincare disk geometry operations.
//!
//! Three kinds of failure exist:
//!
//! - **Domain violations** (point outside the disk, Mobius parameter with
//!   modulus >= 1, hyperboloid point past the asymptotic boundary). These are
//!   raised at the API boundary and returned to the caller.
//! - **Numerical degeneracies** (near-zero denominators, coincident points).
//!   These are handled locally with epsilon-gated fallbacks and only surface as
//!   errors when the strict fallback policy is configured.
//! - **Configuration errors** from validation or loading.

use thiserror::Error;

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Error type for all geometry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    // ========== Domain Errors ==========
    /// Point is not strictly inside the disk.
    #[error("Point outside disk: norm {norm} >= radius {radius}")]
    PointOutsideDisk { norm: f64, radius: f64 },

    /// Mobius center or translation parameter is not strictly inside the unit disk.
    #[error("Invalid Mobius parameter: modulus {modulus} (must be < 1)")]
    InvalidMobiusParameter { modulus: f64 },

    /// Hyperboloid point at or beyond the asymptotic boundary (1 + z below eps),
    /// or a disk point at the boundary when lifting.
    #[error("Point out of projection domain: z = {z}")]
    OutOfDomain { z: f64 },

    /// Point coincides with the center of inversion.
    #[error("Singular inversion: ({x}, {y}) is the center of inversion")]
    SingularInversion { x: f64, y: f64 },

    // ========== Numerical Errors ==========
    /// A numerically forced fallback was hit under the strict policy.
    #[error("Precision loss while building geodesic: {reason}")]
    PrecisionLoss { reason: String },

    /// A non-finite value was produced where a finite one was required.
    #[error("Numerical failure: {0}")]
    NumericalFailure(String),

    // ========== Input / Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be loaded or parsed.
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    /// Invalid argument that is not a domain violation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GeometryError {
    /// True for errors caused by caller-supplied geometry outside its domain.
    pub fn is_domain_violation(&self) -> bool {
        matches!(
            self,
            Self::PointOutsideDisk { .. }
                | Self::InvalidMobiusParameter { .. }
                | Self::OutOfDomain { .. }
                | Self::SingularInversion { .. }
        )
    }

    /// True for configuration validation or loading errors.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::ConfigLoad(_))
    }
}

// ========== Error Conversions ==========

impl From<config::ConfigError> for GeometryError {
    fn from(err: config::ConfigError) -> Self {
        GeometryError::ConfigLoad(err.to_string())
    }
}

impl From<toml::de::Error> for GeometryError {
    fn from(err: toml::de::Error) -> Self {
        // toml errors carry line/column in to_string()
        GeometryError::ConfigLoad(err.to_string())
    }
}

static_assertions::assert_impl_all!(GeometryError: Send, Sync, std::error::Error);

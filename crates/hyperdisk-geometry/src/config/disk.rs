//! Poincare disk configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::policy::FallbackPolicy;
use crate::error::{GeometryError, GeometryResult};
use crate::point::DiskPoint;

/// Prefix for environment-variable overrides (`HYPERDISK__RADIUS=3`).
pub const CONFIG_ENV_PREFIX: &str = "HYPERDISK";

/// Selects the environment-specific config file (`config/{env}.toml`).
pub const CONFIG_ENV_VAR: &str = "HYPERDISK_ENV";

/// Poincare disk configuration.
///
/// The disk is centered at the origin and defined solely by its radius.
/// The tolerances mirror the closed-form routines they guard:
///
/// - `eps`: geodesic constructor and hyperboloid projection (default 1e-8)
/// - `mobius_eps`: Mobius denominators and near-origin centers (default 1e-9)
/// - `inversion_eps`: squared distance to the center of inversion (default 1e-12)
///
/// # Example
/// ```
/// use hyperdisk_geometry::config::{DiskConfig, FallbackPolicy};
///
/// let config = DiskConfig::default();
/// assert_eq!(config.radius, 1.0);
/// assert_eq!(config.fallback, FallbackPolicy::StraightLine);
/// assert!(config.validate().is_ok());
///
/// let scaled = DiskConfig::with_radius(3.0);
/// assert_eq!(scaled.radius_squared(), 9.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiskConfig {
    /// Disk radius. Must be positive and finite.
    pub radius: f64,

    /// Tolerance for geodesic construction and hyperboloid projection.
    pub eps: f64,

    /// Tolerance for Mobius map denominators.
    pub mobius_eps: f64,

    /// Tolerance for the squared distance to a center of inversion.
    pub inversion_eps: f64,

    /// What to do when a geodesic circle fit is numerically unstable.
    pub fallback: FallbackPolicy,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            eps: 1e-8,
            mobius_eps: 1e-9,
            inversion_eps: 1e-12,
            fallback: FallbackPolicy::StraightLine,
        }
    }
}

impl DiskConfig {
    /// Create config with a custom radius; other fields use defaults.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// Builder-style fallback policy override.
    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    /// Shorthand for the strict fallback policy.
    pub fn strict(self) -> Self {
        self.fallback(FallbackPolicy::Strict)
    }

    #[inline]
    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    /// Validate that all parameters are usable.
    ///
    /// Returns the FIRST error encountered.
    ///
    /// # Errors
    /// `GeometryError::InvalidConfig` if the radius is not positive and
    /// finite, or any tolerance is not positive and finite.
    pub fn validate(&self) -> GeometryResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidConfig(format!(
                "radius must be positive and finite (got {})",
                self.radius
            )));
        }

        for (name, value) in [
            ("eps", self.eps),
            ("mobius_eps", self.mobius_eps),
            ("inversion_eps", self.inversion_eps),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::InvalidConfig(format!(
                    "{} must be positive and finite (got {})",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// True if `point` is finite and strictly inside the disk.
    pub fn contains(&self, point: &DiskPoint) -> bool {
        point.is_finite() && point.norm_squared() < self.radius_squared()
    }

    /// Boundary validation for caller-supplied interior points.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinite coordinates
    /// - `PointOutsideDisk` when `|point| >= radius`
    pub fn validate_point(&self, point: &DiskPoint) -> GeometryResult<()> {
        if !point.is_finite() {
            return Err(GeometryError::InvalidInput(format!(
                "point coordinates must be finite (got {:?})",
                point
            )));
        }
        if point.norm_squared() >= self.radius_squared() {
            return Err(GeometryError::PointOutsideDisk {
                norm: point.norm(),
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// Load configuration from `config/` and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/default.toml`
    /// 2. `config/{HYPERDISK_ENV}.toml` (default env: `development`)
    /// 3. `HYPERDISK`-prefixed environment variables, `__` separated
    ///
    /// Missing files are skipped. The merged result is validated.
    pub fn load() -> GeometryResult<Self> {
        Self::load_from_dir(Path::new("config"))
    }

    /// Same as [`DiskConfig::load`] with an explicit config directory.
    pub fn load_from_dir(dir: &Path) -> GeometryResult<Self> {
        let env = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| "development".to_string());
        let default_path = dir.join("default");
        let env_path = dir.join(&env);

        let builder = config::Config::builder()
            .add_source(config::File::with_name(&default_path.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&env_path.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix(CONFIG_ENV_PREFIX).separator("__"));

        let config: DiskConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(
            radius = config.radius,
            fallback = %config.fallback,
            env = %env,
            "Loaded disk configuration"
        );
        Ok(config)
    }

    /// Load configuration from a single TOML file.
    pub fn from_file(path: &Path) -> GeometryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GeometryError::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> GeometryResult<Self> {
        let config: DiskConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

//! Configuration types for disk geometry.
//!
//! - [`DiskConfig`]: disk radius, numerical tolerances, fallback policy
//! - [`FallbackPolicy`]: what the geodesic constructor does when a circle
//!   fit is numerically unstable

mod disk;
mod policy;

#[cfg(test)]
mod tests;

pub use self::disk::{DiskConfig, CONFIG_ENV_PREFIX, CONFIG_ENV_VAR};
pub use self::policy::FallbackPolicy;

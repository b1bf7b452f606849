//! Layered configuration loading.

use std::fs;
use std::path::Path;

use hyperdisk_geometry::{DiskConfig, FallbackPolicy};
use tempfile::TempDir;

#[test]
fn test_environment_file_overrides_default_file() {
    // Assumes HYPERDISK_ENV is unset, selecting `development`
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), "radius = 4.0\nfallback = \"strict\"\n").unwrap();
    fs::write(dir.path().join("development.toml"), "radius = 6.0\n").unwrap();

    let config = DiskConfig::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.radius, 6.0);
    assert_eq!(config.fallback, FallbackPolicy::Strict);
}

#[test]
fn test_invalid_layered_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), "mobius_eps = -1.0\n").unwrap();
    assert!(DiskConfig::load_from_dir(dir.path()).is_err());
}

#[test]
fn test_shipped_default_config_matches_builtin_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/default.toml");
    let config = DiskConfig::from_file(&path).unwrap();
    assert_eq!(config, DiskConfig::default());
}

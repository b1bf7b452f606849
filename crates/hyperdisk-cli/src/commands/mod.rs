//! CLI command implementations
//!
//! # Commands
//!
//! - `project`: Hyperboloid point to disk point
//! - `lift`: Disk point to hyperboloid point
//! - `model`: Re-project a disk point into the Klein or gnomonic model
//! - `geodesic`: Arc (or chord) between two interior points
//! - `rotate`, `translate`, `reflect`: Disk isometries
//! - `distance`: Euclidean and hyperbolic distance
//! - `tile`: Chunks of the {4,5} paving around the viewer
//! - `cast`: Distances to the walls in the viewer's field of view

pub mod cast;
pub mod distance;
pub mod geodesic;
pub mod point;
pub mod tile;
pub mod transform;

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use hyperdisk_geometry::{DiskConfig, DiskPoint, PoincareDisk};
use serde::Serialize;
use tracing::error;

use crate::error::{exit_code_for_error, CliExitCode, CliResult};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: DiskConfig,
    pub json: bool,
}

impl Context {
    /// Load the disk configuration from `path`, or from `config/` and the
    /// environment when no file is given.
    pub fn load(path: Option<&Path>, json: bool) -> CliResult<Self> {
        let config = match path {
            Some(path) => DiskConfig::from_file(path)?,
            None => DiskConfig::load()?,
        };
        Ok(Self { config, json })
    }

    /// Loaded config with an optional per-command radius override.
    pub fn config_with_radius(&self, radius: Option<f64>) -> DiskConfig {
        let mut config = self.config.clone();
        if let Some(radius) = radius {
            config.radius = radius;
        }
        config
    }

    /// Validated disk with an optional radius override.
    pub fn disk(&self, radius: Option<f64>) -> CliResult<PoincareDisk> {
        Ok(PoincareDisk::validated(self.config_with_radius(radius))?)
    }
}

/// Parse `x,y` into a disk point.
pub fn parse_point(s: &str) -> Result<DiskPoint, String> {
    let (x, y) = parse_pair(s)?;
    Ok(DiskPoint::new(x, y))
}

/// Parse two comma separated finite numbers.
pub fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma separated numbers, got '{}'", s))?;
    let parse = |v: &str| -> Result<f64, String> {
        let value: f64 = v
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", v.trim()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("'{}' is not finite", v.trim()))
        }
    };
    Ok((parse(a)?, parse(b)?))
}

pub(crate) fn coords(p: &DiskPoint) -> String {
    format!("({:.6}, {:.6})", p.x, p.y)
}

/// Print a command's result to stdout and turn it into an exit code.
pub fn emit<T: Serialize + fmt::Display>(result: CliResult<T>, json: bool) -> i32 {
    emit_to(&mut io::stdout().lock(), result, json)
}

/// Write a command's result to `out`; failures, including a failed write,
/// go to stderr and pick the exit code.
pub fn emit_to<W, T>(out: &mut W, result: CliResult<T>, json: bool) -> i32
where
    W: Write,
    T: Serialize + fmt::Display,
{
    let written = result
        .and_then(|output| {
            if json {
                Ok(serde_json::to_string_pretty(&output)?)
            } else {
                Ok(output.to_string())
            }
        })
        .and_then(|text| {
            writeln!(out, "{}", text)?;
            out.flush()?;
            Ok(())
        });

    match written {
        Ok(()) => CliExitCode::Success as i32,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            exit_code_for_error(&e) as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperdisk_geometry::GeometryError;

    use crate::error::CliError;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("0.5,-0.25").unwrap(), DiskPoint::new(0.5, -0.25));
        assert_eq!(parse_point(" 0.1 , 0.2 ").unwrap(), DiskPoint::new(0.1, 0.2));
    }

    #[test]
    fn test_parse_point_rejects_garbage() {
        assert!(parse_point("0.5").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("NaN,0").is_err());
        assert!(parse_point("0,inf").is_err());
    }

    #[test]
    fn test_radius_override() {
        let ctx = Context {
            config: DiskConfig::default(),
            json: false,
        };
        assert_eq!(ctx.config_with_radius(None).radius, 1.0);
        assert_eq!(ctx.disk(Some(2.5)).unwrap().radius(), 2.5);
    }

    #[test]
    fn test_invalid_radius_is_config_error() {
        let ctx = Context {
            config: DiskConfig::default(),
            json: false,
        };
        match ctx.disk(Some(-1.0)) {
            Err(CliError::Geometry(e)) => assert!(e.is_config_error()),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_exit_codes() {
        let mut out = Vec::new();
        assert_eq!(emit_to(&mut out, Ok(String::from("ok")), true), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "\"ok\"\n");

        let mut out = Vec::new();
        let failed: CliResult<String> = Err(GeometryError::OutOfDomain { z: -2.0 }.into());
        assert_eq!(emit_to(&mut out, failed, false), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_write_failure_exits_three() {
        let code = emit_to(&mut ClosedPipe, Ok(String::from("lost")), false);
        assert_eq!(code, CliExitCode::Io as i32);
    }
}

//! Disk isometries: rotation about an interior point, translation and
//! reflection across a geodesic.

use std::fmt;

use clap::Args;
use hyperdisk_geometry::{DiskPoint, GeometryError};
use serde::Serialize;
use tracing::warn;

use super::{coords, emit, parse_point, Context};
use crate::error::CliResult;

/// Arguments for `hyperdisk rotate`.
///
/// # Example
///
/// ```bash
/// # Quarter turn about (0.2, 0)
/// hyperdisk rotate --point 0.5,0.1 --center 0.2,0 --angle 1.5707963
/// ```
#[derive(Args, Debug)]
pub struct RotateArgs {
    /// Point to move, as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub point: DiskPoint,

    /// Fixed point of the rotation, as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, default_value = "0,0")]
    pub center: DiskPoint,

    /// Rotation angle in radians
    #[arg(long, allow_hyphen_values = true)]
    pub angle: f64,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,
}

/// Arguments for `hyperdisk translate`.
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Point to move, as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub point: DiskPoint,

    /// Image of the disk center under the translation, as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub by: DiskPoint,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,
}

/// Arguments for `hyperdisk reflect`.
///
/// The mirror is either the geodesic whose supporting circle is centred at
/// `--center` (a point outside the disk) or the geodesic through two
/// `--through` points.
///
/// # Examples
///
/// ```bash
/// hyperdisk reflect --point 0.3,0 --center 2,0
/// hyperdisk reflect --point 0.3,0.2 --through -0.5,0 --through 0.5,0
/// ```
#[derive(Args, Debug)]
pub struct ReflectArgs {
    /// Point to reflect, as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub point: DiskPoint,

    /// Center of the mirror circle, as `x,y`
    #[arg(
        long,
        value_parser = parse_point,
        allow_hyphen_values = true,
        required_unless_present = "through",
        conflicts_with = "through"
    )]
    pub center: Option<DiskPoint>,

    /// Interior point on the mirror geodesic; give exactly two
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub through: Vec<DiskPoint>,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct TransformOutput {
    pub input: DiskPoint,
    pub output: DiskPoint,
    pub radius: f64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub singular: bool,
}

impl fmt::Display for TransformOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", coords(&self.input), coords(&self.output))?;
        if self.singular {
            write!(f, " (singular: point is the center of inversion)")?;
        }
        Ok(())
    }
}

pub fn run_rotate(args: &RotateArgs, ctx: &Context) -> CliResult<TransformOutput> {
    let disk = ctx.disk(args.radius)?;
    let output = disk.rotate(&args.point, &args.center, args.angle)?;
    Ok(TransformOutput {
        input: args.point,
        output,
        radius: disk.radius(),
        singular: false,
    })
}

pub fn run_translate(args: &TranslateArgs, ctx: &Context) -> CliResult<TransformOutput> {
    let disk = ctx.disk(args.radius)?;
    let output = disk.translate(&args.point, &args.by)?;
    Ok(TransformOutput {
        input: args.point,
        output,
        radius: disk.radius(),
        singular: false,
    })
}

pub fn run_reflect(args: &ReflectArgs, ctx: &Context) -> CliResult<TransformOutput> {
    let disk = ctx.disk(args.radius)?;

    if let Some(center) = &args.center {
        let reflection = disk.reflect(&args.point, center)?;
        if reflection.singular {
            warn!(point = %args.point, center = %center, "Reflected the center of inversion");
        }
        return Ok(TransformOutput {
            input: args.point,
            output: reflection.point,
            radius: disk.radius(),
            singular: reflection.singular,
        });
    }

    let [a, b] = <[DiskPoint; 2]>::try_from(args.through.as_slice()).map_err(|_| {
        GeometryError::InvalidInput(format!(
            "--through needs exactly two points (got {})",
            args.through.len()
        ))
    })?;
    let output = disk.reflect_across(&args.point, &a, &b)?;
    Ok(TransformOutput {
        input: args.point,
        output,
        radius: disk.radius(),
        singular: false,
    })
}

pub fn handle_rotate(args: RotateArgs, ctx: &Context) -> i32 {
    emit(run_rotate(&args, ctx), ctx.json)
}

pub fn handle_translate(args: TranslateArgs, ctx: &Context) -> i32 {
    emit(run_translate(&args, ctx), ctx.json)
}

pub fn handle_reflect(args: ReflectArgs, ctx: &Context) -> i32 {
    emit(run_reflect(&args, ctx), ctx.json)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use hyperdisk_geometry::DiskConfig;

    use crate::error::CliError;

    fn ctx() -> Context {
        Context {
            config: DiskConfig::default(),
            json: false,
        }
    }

    #[test]
    fn test_rotate_about_origin() {
        let args = RotateArgs {
            point: DiskPoint::new(0.5, 0.0),
            center: DiskPoint::ORIGIN,
            angle: FRAC_PI_2,
            radius: None,
        };
        let out = run_rotate(&args, &ctx()).unwrap();
        assert!(out.output.approx_eq_within(&DiskPoint::new(0.0, 0.5), 1e-12));
    }

    #[test]
    fn test_rotate_fixes_center() {
        let args = RotateArgs {
            point: DiskPoint::new(0.2, -0.3),
            center: DiskPoint::new(0.2, -0.3),
            angle: PI / 3.0,
            radius: None,
        };
        let out = run_rotate(&args, &ctx()).unwrap();
        assert!(out.output.approx_eq_within(&args.point, 1e-9));
    }

    #[test]
    fn test_rotate_rejects_center_on_boundary() {
        let args = RotateArgs {
            point: DiskPoint::new(0.1, 0.0),
            center: DiskPoint::new(0.0, 1.0),
            angle: 1.0,
            radius: None,
        };
        assert!(run_rotate(&args, &ctx()).is_err());
    }

    #[test]
    fn test_translate_moves_origin_to_target() {
        let args = TranslateArgs {
            point: DiskPoint::ORIGIN,
            by: DiskPoint::new(0.3, 0.4),
            radius: Some(2.0),
        };
        let out = run_translate(&args, &ctx()).unwrap();
        assert!(out.output.approx_eq_within(&DiskPoint::new(0.3, 0.4), 1e-12));
    }

    #[test]
    fn test_reflect_across_circle_center() {
        let args = ReflectArgs {
            point: DiskPoint::new(0.3, 0.0),
            center: Some(DiskPoint::new(2.0, 0.0)),
            through: Vec::new(),
            radius: None,
        };
        let out = run_reflect(&args, &ctx()).unwrap();
        // r² = 3, so 0.3 -> 2 + 3 / (0.3 - 2)
        assert!((out.output.x - (2.0 - 3.0 / 1.7)).abs() < 1e-12);
        assert!(!out.singular);
    }

    #[test]
    fn test_reflect_across_diameter() {
        let args = ReflectArgs {
            point: DiskPoint::new(0.3, 0.2),
            center: None,
            through: vec![DiskPoint::new(-0.5, 0.0), DiskPoint::new(0.5, 0.0)],
            radius: None,
        };
        let out = run_reflect(&args, &ctx()).unwrap();
        assert!(out.output.approx_eq_within(&DiskPoint::new(0.3, -0.2), 1e-12));
    }

    #[test]
    fn test_reflect_needs_two_points() {
        let args = ReflectArgs {
            point: DiskPoint::new(0.3, 0.2),
            center: None,
            through: vec![DiskPoint::new(0.5, 0.0)],
            radius: None,
        };
        match run_reflect(&args, &ctx()) {
            Err(CliError::Geometry(GeometryError::InvalidInput(_))) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_reflect_rejects_center_inside_disk() {
        let args = ReflectArgs {
            point: DiskPoint::new(0.3, 0.2),
            center: Some(DiskPoint::new(0.5, 0.0)),
            through: Vec::new(),
            radius: None,
        };
        assert!(run_reflect(&args, &ctx()).is_err());
    }
}

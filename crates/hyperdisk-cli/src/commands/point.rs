//! Point conversions: hyperboloid to disk, disk to hyperboloid and between
//! disk models.

use std::fmt;

use clap::Args;
use hyperdisk_geometry::{DiskPoint, HyperboloidPoint, Projection};
use serde::Serialize;
use tracing::debug;

use super::{coords, emit, parse_point, Context};
use crate::error::CliResult;

/// Arguments for `hyperdisk project`.
///
/// # Example
///
/// ```bash
/// hyperdisk project --x 0.75 --y 0 --z 1.25
/// ```
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub x: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub y: f64,

    /// Height on the hyperboloid; must satisfy 1 + z > eps
    #[arg(long, allow_hyphen_values = true)]
    pub z: f64,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,
}

/// Arguments for `hyperdisk lift`.
#[derive(Args, Debug)]
pub struct LiftArgs {
    /// Interior point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub point: DiskPoint,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,
}

/// Arguments for `hyperdisk model`.
///
/// # Example
///
/// ```bash
/// hyperdisk model --point 0.5,0 --to klein
/// ```
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Interior point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub point: DiskPoint,

    /// Target model: poincare, klein or gnomonic
    #[arg(long, value_parser = parse_projection, default_value = "klein")]
    pub to: Projection,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,
}

fn parse_projection(s: &str) -> Result<Projection, String> {
    s.parse()
}

#[derive(Debug, Serialize)]
pub struct ProjectOutput {
    pub input: HyperboloidPoint,
    pub point: DiskPoint,
    pub radius: f64,
}

impl fmt::Display for ProjectOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}, {:.6}) -> {}",
            self.input.x,
            self.input.y,
            self.input.z,
            coords(&self.point)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct LiftOutput {
    pub input: DiskPoint,
    pub point: HyperboloidPoint,
    pub radius: f64,
}

impl fmt::Display for LiftOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> ({:.6}, {:.6}, {:.6})",
            coords(&self.input),
            self.point.x,
            self.point.y,
            self.point.z
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ModelOutput {
    pub input: DiskPoint,
    pub model: Projection,
    pub point: DiskPoint,
}

impl fmt::Display for ModelOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} {}", coords(&self.input), self.model.as_str(), coords(&self.point))
    }
}

pub fn run_project(args: &ProjectArgs, ctx: &Context) -> CliResult<ProjectOutput> {
    let disk = ctx.disk(args.radius)?;
    let input = HyperboloidPoint::new(args.x, args.y, args.z);
    let point = disk.project_hyperboloid(&input)?;
    debug!(%input, %point, "Projected hyperboloid point");
    Ok(ProjectOutput {
        input,
        point,
        radius: disk.radius(),
    })
}

pub fn run_lift(args: &LiftArgs, ctx: &Context) -> CliResult<LiftOutput> {
    let disk = ctx.disk(args.radius)?;
    let point = disk.lift(&args.point)?;
    Ok(LiftOutput {
        input: args.point,
        point,
        radius: disk.radius(),
    })
}

pub fn run_model(args: &ModelArgs, ctx: &Context) -> CliResult<ModelOutput> {
    let disk = ctx.disk(args.radius)?;
    Ok(ModelOutput {
        input: args.point,
        model: args.to,
        point: disk.project(&args.point, args.to)?,
    })
}

pub fn handle_project(args: ProjectArgs, ctx: &Context) -> i32 {
    emit(run_project(&args, ctx), ctx.json)
}

pub fn handle_lift(args: LiftArgs, ctx: &Context) -> i32 {
    emit(run_lift(&args, ctx), ctx.json)
}

pub fn handle_model(args: ModelArgs, ctx: &Context) -> i32 {
    emit(run_model(&args, ctx), ctx.json)
}

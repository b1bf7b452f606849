//! `hyperdisk distance`

use std::fmt;

use clap::Args;
use hyperdisk_geometry::DiskPoint;
use serde::Serialize;

use super::{emit, parse_point, Context};
use crate::error::CliResult;

/// Arguments for `hyperdisk distance`.
///
/// ```bash
/// hyperdisk distance --from 0,0 --to 0.5,0
/// ```
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// First point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: DiskPoint,

    /// Second point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub to: DiskPoint,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    pub euclidean: f64,
    pub hyperbolic: f64,
}

impl fmt::Display for DistanceOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "euclidean {:.6}\nhyperbolic {:.6}", self.euclidean, self.hyperbolic)
    }
}

pub fn run_distance(args: &DistanceArgs, ctx: &Context) -> CliResult<DistanceOutput> {
    let disk = ctx.disk(args.radius)?;
    Ok(DistanceOutput {
        hyperbolic: disk.distance(&args.from, &args.to)?,
        euclidean: args.from.distance_to(&args.to),
    })
}

pub fn handle_distance(args: DistanceArgs, ctx: &Context) -> i32 {
    emit(run_distance(&args, ctx), ctx.json)
}

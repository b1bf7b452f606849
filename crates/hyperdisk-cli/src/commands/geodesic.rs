//! `hyperdisk geodesic`: the drawable segment between two interior points.

use std::fmt;

use clap::Args;
use hyperdisk_geometry::{DiskPoint, GeodesicCurve, GeodesicSegment, PoincareDisk};
use serde::Serialize;
use tracing::{info, warn};

use super::{coords, emit, parse_point, Context};
use crate::error::CliResult;

/// Arguments for `hyperdisk geodesic`.
///
/// # Examples
///
/// ```bash
/// # Arc between two points of the unit disk
/// hyperdisk geodesic --from 0.5,0 --to 0,0.5
///
/// # Polyline with 16 segments, as JSON
/// hyperdisk --json geodesic --from -0.4,0.1 --to 0.3,0.6 --segments 16
/// ```
#[derive(Args, Debug)]
pub struct GeodesicArgs {
    /// Start point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: DiskPoint,

    /// End point as `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub to: DiskPoint,

    /// Disk radius (overrides the configuration)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Also sample the curve as a polyline with this many segments
    #[arg(long)]
    pub segments: Option<usize>,

    /// Fail on numerically unstable input instead of drawing a chord
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct GeodesicOutput {
    pub from: DiskPoint,
    pub to: DiskPoint,
    pub radius: f64,
    pub segment: GeodesicSegment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<DiskPoint>>,
}

impl fmt::Display for GeodesicOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.segment.curve {
            GeodesicCurve::Empty => write!(f, "empty: endpoints coincide")?,
            GeodesicCurve::Line { start, end } => {
                write!(f, "line {} -> {}", coords(start), coords(end))?
            }
            GeodesicCurve::Arc(arc) => write!(
                f,
                "arc center {} radius {:.6}\n  start {:.6} rad, sweep {:.6} rad",
                coords(&arc.center),
                arc.radius,
                arc.start_angle,
                arc.sweep_angle
            )?,
        }
        if let Some(degeneracy) = self.segment.degeneracy {
            write!(f, "\n  note: {}", degeneracy)?;
        }
        if let Some(samples) = &self.samples {
            for p in samples {
                write!(f, "\n  {:.6} {:.6}", p.x, p.y)?;
            }
        }
        Ok(())
    }
}

pub fn run_geodesic(args: &GeodesicArgs, ctx: &Context) -> CliResult<GeodesicOutput> {
    let mut config = ctx.config_with_radius(args.radius);
    if args.strict {
        config = config.strict();
    }
    let disk = PoincareDisk::validated(config)?;

    let segment = disk.geodesic(&args.from, &args.to)?;
    if segment.is_fallback() {
        warn!(from = %args.from, to = %args.to, "Geodesic drawn as a chord");
    }
    let samples = args
        .segments
        .map(|n| segment.curve.sample(n))
        .transpose()?;

    let kind = match segment.curve {
        GeodesicCurve::Empty => "empty",
        GeodesicCurve::Line { .. } => "line",
        GeodesicCurve::Arc(_) => "arc",
    };
    info!(kind, length = segment.curve.euclidean_length(), "Built geodesic");

    Ok(GeodesicOutput {
        from: args.from,
        to: args.to,
        radius: disk.radius(),
        segment,
        samples,
    })
}

pub fn handle_geodesic(args: GeodesicArgs, ctx: &Context) -> i32 {
    emit(run_geodesic(&args, ctx), ctx.json)
}

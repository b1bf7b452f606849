//! `hyperdisk cast`: distances to the walls in the viewer's field of view.

use std::fmt;

use clap::Args;
use hyperdisk_geometry::paving::DEFAULT_FOV;
use hyperdisk_geometry::{cast_rays, Direction, DiskPoint, Paving, RayHit, Walls};
use serde::Serialize;
use tracing::info;

use super::tile::display_word;
use super::{coords, emit, parse_pair, Context};
use crate::error::CliResult;

/// Arguments for `hyperdisk cast`.
///
/// # Examples
///
/// ```bash
/// # Nine rays around "up", every tile edge a wall
/// hyperdisk cast
///
/// # Walls from seed 7 after stepping forward, as JSON
/// hyperdisk --json cast --move 1.5708,0.3 --seed 7 --width 32
/// ```
#[derive(Args, Debug)]
pub struct CastArgs {
    /// Number of rays
    #[arg(long, default_value_t = 9)]
    pub width: usize,

    /// Field of view in radians, centred on the upward direction
    #[arg(long, default_value_t = DEFAULT_FOV)]
    pub fov: f64,

    /// Seed for per-edge wall flags; every edge is a wall without one
    #[arg(long)]
    pub seed: Option<u64>,

    /// No walls at all
    #[arg(long, conflicts_with = "seed")]
    pub open: bool,

    /// Viewer movement `angle,speed` applied before casting; repeatable
    #[arg(long = "move", value_parser = parse_pair, allow_hyphen_values = true)]
    pub moves: Vec<(f64, f64)>,

    /// Rotate the view by this many radians after moving
    #[arg(long, allow_hyphen_values = true)]
    pub rotate: Option<f64>,
}

impl CastArgs {
    fn walls(&self) -> Walls {
        match (self.open, self.seed) {
            (true, _) => Walls::Open,
            (false, Some(seed)) => Walls::Seeded(seed),
            (false, None) => Walls::Solid,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RayReport {
    pub angle: f64,
    /// `None` when no wall was met within the step budget.
    pub distance: Option<f64>,
    pub point: DiskPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall: Option<Direction>,
}

impl RayReport {
    fn new(hit: RayHit, radius: f64) -> Self {
        Self {
            angle: hit.angle,
            distance: hit.distance.is_finite().then_some(hit.distance),
            point: hit.point.scale(radius),
            chunk: hit.chunk,
            wall: hit.wall,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CastOutput {
    pub radius: f64,
    pub center_chunk: String,
    pub rays: Vec<RayReport>,
}

impl fmt::Display for CastOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center chunk: {}", display_word(&self.center_chunk))?;
        for ray in &self.rays {
            write!(f, "\n  angle {:>9.6}  ", ray.angle)?;
            match (ray.distance, &ray.chunk, ray.wall) {
                (Some(d), Some(chunk), Some(wall)) => write!(
                    f,
                    "distance {:.6} at {} ({} edge of {})",
                    d,
                    coords(&ray.point),
                    wall,
                    display_word(chunk)
                )?,
                _ => write!(f, "open")?,
            }
        }
        Ok(())
    }
}

pub fn run_cast(args: &CastArgs, ctx: &Context) -> CliResult<CastOutput> {
    let disk = ctx.disk(None)?;
    let mut paving = Paving::with_eps(disk.config().mobius_eps);

    for &(angle, speed) in &args.moves {
        paving.apply_movement(angle, speed)?;
    }
    if let Some(angle) = args.rotate {
        paving.apply_rotation(angle);
    }

    let walls = args.walls();
    let hits = cast_rays(&paving, args.width, args.fov, &walls)?;
    info!(
        width = args.width,
        fov = args.fov,
        blocked = hits.iter().filter(|h| h.is_blocked()).count(),
        center = %paving.center_chunk(),
        ?walls,
        "Cast rays"
    );

    Ok(CastOutput {
        radius: disk.radius(),
        center_chunk: paving.center_chunk().word(),
        rays: hits.into_iter().map(|h| RayReport::new(h, disk.radius())).collect(),
    })
}

pub fn handle_cast(args: CastArgs, ctx: &Context) -> i32 {
    emit(run_cast(&args, ctx), ctx.json)
}

//! `hyperdisk tile`: chunks of the {4,5} paving around the viewer.

use std::fmt;

use clap::Args;
use hyperdisk_geometry::{Chunk, Direction, DiskPoint, Paving};
use serde::Serialize;
use tracing::info;

use super::{coords, emit, parse_pair, Context};
use crate::error::CliResult;

/// Arguments for `hyperdisk tile`.
///
/// # Examples
///
/// ```bash
/// # Origin tile and its four neighbours
/// hyperdisk tile --depth 1
///
/// # Step up twice, then list tiles two steps away, with walls for seed 7
/// hyperdisk --json tile --move 1.5708,0.3 --move 1.5708,0.3 --depth 2 --seed 7
/// ```
#[derive(Args, Debug)]
pub struct TileArgs {
    /// Number of neighbour steps to enumerate around the center chunk
    #[arg(long, default_value_t = 1)]
    pub depth: usize,

    /// Viewer movement `angle,speed` applied before enumerating; repeatable
    #[arg(long = "move", value_parser = parse_pair, allow_hyphen_values = true)]
    pub moves: Vec<(f64, f64)>,

    /// Rotate the view by this many radians after moving
    #[arg(long, allow_hyphen_values = true)]
    pub rotate: Option<f64>,

    /// Seed for per-edge wall flags
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ChunkReport {
    pub word: String,
    pub holonomy: Direction,
    pub code: u64,
    pub center: DiskPoint,
    pub vertices: [DiskPoint; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walls: Option<Vec<Direction>>,
}

impl ChunkReport {
    fn new(chunk: &Chunk, radius: f64, seed: Option<u64>) -> CliResult<Self> {
        let walls = match seed {
            Some(seed) => {
                let mut walls = Vec::new();
                for direction in Direction::ALL {
                    if chunk.edge_hash(seed, direction)? {
                        walls.push(direction);
                    }
                }
                Some(walls)
            }
            None => None,
        };

        Ok(Self {
            word: chunk.word(),
            holonomy: chunk.holonomy(),
            code: chunk.encode(),
            center: chunk.center().scale(radius),
            vertices: chunk.vertices().map(|v| v.scale(radius)),
            walls,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TileOutput {
    pub radius: f64,
    pub center_chunk: String,
    pub chunks: Vec<ChunkReport>,
}

impl fmt::Display for TileOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center chunk: {}", display_word(&self.center_chunk))?;
        for chunk in &self.chunks {
            write!(
                f,
                "\n  {:<8} code {:<6} center {}",
                display_word(&chunk.word),
                chunk.code,
                coords(&chunk.center)
            )?;
            if let Some(walls) = &chunk.walls {
                let letters: String = walls.iter().map(|d| d.as_char()).collect();
                write!(f, " walls {}", if letters.is_empty() { "-" } else { &letters })?;
            }
        }
        Ok(())
    }
}

pub(super) fn display_word(word: &str) -> &str {
    if word.is_empty() {
        "origin"
    } else {
        word
    }
}

pub fn run_tile(args: &TileArgs, ctx: &Context) -> CliResult<TileOutput> {
    let disk = ctx.disk(None)?;
    let mut paving = Paving::with_eps(disk.config().mobius_eps);

    for &(angle, speed) in &args.moves {
        paving.apply_movement(angle, speed)?;
    }
    if let Some(angle) = args.rotate {
        paving.apply_rotation(angle);
    }

    let chunks = paving.neighbors_within(args.depth)?;
    info!(
        depth = args.depth,
        count = chunks.len(),
        center = %paving.center_chunk(),
        "Enumerated paving chunks"
    );

    let chunks = chunks
        .iter()
        .map(|chunk| ChunkReport::new(chunk, disk.radius(), args.seed))
        .collect::<CliResult<Vec<_>>>()?;

    Ok(TileOutput {
        radius: disk.radius(),
        center_chunk: paving.center_chunk().word(),
        chunks,
    })
}

pub fn handle_tile(args: TileArgs, ctx: &Context) -> i32 {
    emit(run_tile(&args, ctx), ctx.json)
}

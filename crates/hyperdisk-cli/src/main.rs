//! HyperDisk CLI
//!
//! Command-line access to the Poincare disk geometry core.
//!
//! # Usage
//!
//! ```bash
//! # Hyperboloid point to the unit disk
//! hyperdisk project --x 0.75 --y 0 --z 1.25
//!
//! # Geodesic arc in a disk of radius 3, as JSON
//! hyperdisk --json geodesic --from 1,0 --to 0,1.5 --radius 3
//!
//! # Tiles within two steps of the origin
//! hyperdisk tile --depth 2
//!
//! # Distances to seeded walls across the field of view
//! hyperdisk cast --seed 7 --width 16
//!
//! # Use a specific config file and debug logging
//! hyperdisk -vv --config ./disk.toml distance --from 0,0 --to 0.5,0
//! ```
//!
//! Without `--config`, settings come from `config/default.toml`,
//! `config/{HYPERDISK_ENV}.toml` and `HYPERDISK__*` environment variables.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

use commands::Context;
use error::exit_code_for_error;

/// HyperDisk CLI
#[derive(Parser)]
#[command(name = "hyperdisk")]
#[command(
    author,
    version,
    about = "Poincare disk geometry from the command line",
    long_about = None
)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read settings from this TOML file instead of `config/`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a hyperboloid point into the disk
    Project(commands::point::ProjectArgs),
    /// Lift a disk point onto the hyperboloid
    Lift(commands::point::LiftArgs),
    /// Re-project a disk point into another disk model
    Model(commands::point::ModelArgs),
    /// Geodesic segment between two interior points
    Geodesic(commands::geodesic::GeodesicArgs),
    /// Rotate a point about an interior point
    Rotate(commands::transform::RotateArgs),
    /// Translate a point by the isometry taking the center to `--by`
    Translate(commands::transform::TranslateArgs),
    /// Reflect a point across a geodesic
    Reflect(commands::transform::ReflectArgs),
    /// Euclidean and hyperbolic distance between two points
    Distance(commands::distance::DistanceArgs),
    /// List chunks of the {4,5} paving around the viewer
    Tile(commands::tile::TileArgs),
    /// Cast rays from the viewer to the nearest walls
    Cast(commands::cast::CastArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries results
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let ctx = match Context::load(cli.config.as_deref(), cli.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {}", e);
            std::process::exit(exit_code_for_error(&e) as i32);
        }
    };
    debug!(radius = ctx.config.radius, fallback = %ctx.config.fallback, "Configuration ready");

    let exit_code = run(cli.command, &ctx);
    std::process::exit(exit_code);
}

fn run(command: Commands, ctx: &Context) -> i32 {
    match command {
        Commands::Project(args) => commands::point::handle_project(args, ctx),
        Commands::Lift(args) => commands::point::handle_lift(args, ctx),
        Commands::Model(args) => commands::point::handle_model(args, ctx),
        Commands::Geodesic(args) => commands::geodesic::handle_geodesic(args, ctx),
        Commands::Rotate(args) => commands::transform::handle_rotate(args, ctx),
        Commands::Translate(args) => commands::transform::handle_translate(args, ctx),
        Commands::Reflect(args) => commands::transform::handle_reflect(args, ctx),
        Commands::Distance(args) => commands::distance::handle_distance(args, ctx),
        Commands::Tile(args) => commands::tile::handle_tile(args, ctx),
        Commands::Cast(args) => commands::cast::handle_cast(args, ctx),
    }
}

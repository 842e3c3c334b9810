//! Pathik runner
//!
//! Generates a random N×N world, lets the robot search its way from the
//! north-west corner to the south-east corner, and prints the path found.
//!
//! ```text
//! pathik-run 12 0.3 7 --show-map
//! RUST_LOG=debug pathik-run --config pathik.toml
//! ```

mod error;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use pathik::{AgentSearch, MapGenerator, PathResult, PathikConfig, is_simple};

use crate::error::{Result, RunError};

/// Embodied A* search on a random grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid side length (overrides world.size)
    size: Option<usize>,

    /// Blocked cell probability in [0, 1] (overrides world.density)
    density: Option<f64>,

    /// Map generator seed (overrides world.seed)
    seed: Option<u64>,

    /// TOML configuration file (defaults to ./pathik.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the map with the path drawn on it
    #[arg(long)]
    show_map: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Using config: {}", path.display());
            PathikConfig::load(path)?
        }
        None => PathikConfig::load_default()?,
    };

    if let Some(size) = args.size {
        config.world.size = size;
    }
    if let Some(density) = args.density {
        config.world.density = density;
    }
    if let Some(seed) = args.seed {
        config.world.seed = seed;
    }
    config.world.validate()?;

    info!(
        "World: {}x{}, density={}, seed={}, tie_break={:?}",
        config.world.size,
        config.world.size,
        config.world.density,
        config.world.seed,
        config.search.tie_break
    );

    let mut world = MapGenerator::from_section(&config.world)?;
    debug!("{} blocked cells", world.blocked_count());

    let result = AgentSearch::new(&mut world, config.search_config()).run()?;

    if result.success {
        if !world.check_path(&result.path) || !is_simple(&result.path) {
            return Err(RunError::InvalidPath(format_path(&result)));
        }
        println!("Path: {}", format_path(&result));
    } else {
        println!("No path!");
    }

    info!(
        "Expanded {} nodes, walked {} steps ({} re-navigations, {} steps)",
        result.stats.nodes_expanded,
        result.stats.steps_taken,
        result.stats.renavigations,
        result.stats.renavigation_steps
    );

    if args.show_map {
        let path = result.success.then_some(result.path.as_slice());
        print!("{}", world.render(path));
    }

    Ok(())
}

/// Space-separated `(r, c)` cells
fn format_path(result: &PathResult) -> String {
    result
        .path
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

//! Command-line campus walking navigator.
//!
//! Loads an Overpass JSON map extract, builds the walking graph once, then
//! answers building-to-building routing queries interactively until `#` (or
//! end of input).  Set `RUST_LOG=info` for ingestion and routing logs.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use campus_nav::{NavigationSession, load_map};

/// Shortest walking paths between named campus buildings.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Overpass JSON map extract to navigate.
    #[arg(default_value = "map.json")]
    map: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("** Campus walking navigator **");
    println!();

    // 1. Ingest the map.
    let map = load_map(&args.map)
        .with_context(|| format!("unable to load map {}", args.map.display()))?;
    println!("# of nodes: {}", map.node_count());
    println!("# of footways: {}", map.footway_count());
    println!("# of buildings: {}", map.building_count());

    // 2. Build the walking graph.
    let session = NavigationSession::new(map);
    println!("# of vertices: {}", session.graph().vertex_count());
    println!("# of edges: {}", session.graph().edge_count());
    println!();

    // 3. Query loop.
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())?;

    println!("** Done **");
    Ok(())
}

use citypath_data::{import_network, save_network};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Builds a road network snapshot from a coordinate table and an adjacency list
#[derive(Parser)]
#[command(name = "citypath-import")]
struct Args {
    /// Coordinate table with `name,x,y` rows
    coordinates: PathBuf,
    /// Adjacency list with `from to` pairs
    adjacencies: PathBuf,
    /// Output snapshot file
    out: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let load_timer = Instant::now();

    let network = match import_network(&args.coordinates, &args.adjacencies) {
        Ok(network) => network,
        Err(err) => {
            eprintln!("citypath-import: {}", err);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded network with {} locations and {} roads in {:.2} seconds",
        network.number_of_nodes(),
        network.number_of_edges(),
        load_timer.elapsed().as_secs_f32()
    );

    if let Err(err) = save_network(&network, &args.out) {
        eprintln!("citypath-import: {}", err);
        std::process::exit(1);
    }
}

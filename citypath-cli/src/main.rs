mod args;
mod logging;
mod session;

use args::Args;
use citypath::graph_impl::RoadNetwork;
use citypath::search::SearchOptions;
use citypath_data::{import_network, load_network, LoadError};
use clap::Parser;
use session::Session;
use std::io;
use std::time::Instant;
use tracing::info;

fn load(args: &Args) -> Result<RoadNetwork, LoadError> {
    match &args.snapshot {
        Some(path) => load_network(path),
        None => import_network(&args.coordinates, &args.adjacencies),
    }
}

fn main() {
    let args = Args::parse();

    if let Err(err) = logging::init(args.verbose) {
        eprintln!("citypath: cannot initialize logging: {}", err);
    }

    let startup_timer = Instant::now();

    let network = match load(&args) {
        Ok(network) => network,
        Err(err) => {
            eprintln!("citypath: {}", err);
            std::process::exit(1);
        }
    };
    info!(
        nodes = network.number_of_nodes(),
        edges = network.number_of_edges(),
        "loaded road network in {:.1} seconds",
        startup_timer.elapsed().as_secs_f32()
    );

    let options = SearchOptions {
        max_depth: args.max_depth,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&network, options, stdin.lock(), stdout.lock());

    if let Err(err) = session.run() {
        eprintln!("citypath: {}", err);
        std::process::exit(1);
    }
}

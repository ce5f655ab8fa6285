use citypath::search::DEFAULT_MAX_DEPTH;
use clap::Parser;
use std::path::PathBuf;

/// Interactive route search between locations of a road network
#[derive(Parser, Debug)]
#[command(name = "citypath")]
pub struct Args {
    /// Coordinate table with `name,x,y` rows
    #[arg(long, default_value = "coordinates.csv")]
    pub coordinates: PathBuf,

    /// Adjacency list with `from to` pairs
    #[arg(long, default_value = "Adjacencies.txt")]
    pub adjacencies: PathBuf,

    /// Load a network snapshot written by `citypath-import` instead of the text files
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Largest depth limit tried by iterative-deepening search
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

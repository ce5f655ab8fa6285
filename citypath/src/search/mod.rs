//! Route search strategies.
//!
//! Every strategy takes a graph, an origin and a destination and returns the path as a list of node ids
//! starting at the origin and ending at the destination. `None` means there is no path, which is a
//! normal outcome and not an error. Errors are only returned by the informed strategies when the
//! heuristic cannot look up a node position.

mod astar;
mod best_first;
mod bfs;
mod dfs;
pub mod frontier;
mod iddfs;

pub use astar::astar;
pub use best_first::best_first;
pub use bfs::bfs;
pub use dfs::dfs;
pub use iddfs::iddfs;

use crate::error::{Error, Result};
use crate::graph::*;
use crate::heuristic::Heuristic;
use std::fmt;
use std::str::FromStr;

/// Maximum depth limit tried by iterative-deepening search
pub const DEFAULT_MAX_DEPTH: usize = 46;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
  Bfs,
  Dfs,
  IdDfs,
  BestFirst,
  AStar,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
  pub max_depth: usize,
}

impl Default for SearchOptions {
  fn default() -> Self {
    SearchOptions {
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

impl Strategy {
  pub const ALL: [Strategy; 5] = [
    Strategy::Bfs,
    Strategy::Dfs,
    Strategy::IdDfs,
    Strategy::BestFirst,
    Strategy::AStar,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Strategy::Bfs => "bfs",
      Strategy::Dfs => "dfs",
      Strategy::IdDfs => "id-dfs",
      Strategy::BestFirst => "best_first",
      Strategy::AStar => "a_star",
    }
  }

  pub fn run<G: Copy + IntoNeighbors + Heuristic>(
    self,
    graph: G,
    options: &SearchOptions,
    origin: G::NodeId,
    destination: G::NodeId,
  ) -> Result<Option<Vec<G::NodeId>>> {
    match self {
      Strategy::Bfs => Ok(bfs(graph, origin, destination)),
      Strategy::Dfs => Ok(dfs(graph, origin, destination)),
      Strategy::IdDfs => Ok(iddfs(graph, origin, destination, options.max_depth)),
      Strategy::BestFirst => best_first(graph, origin, destination),
      Strategy::AStar => astar(graph, origin, destination),
    }
  }
}

impl FromStr for Strategy {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Strategy::ALL
      .iter()
      .find(|strategy| strategy.name() == s)
      .cloned()
      .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

fn extended<N: Copy>(path: &[N], next: N) -> Vec<N> {
  let mut result = Vec::with_capacity(path.len() + 1);
  result.extend_from_slice(path);
  result.push(next);
  result
}

use super::extended;
use super::frontier::{Fifo, Frontier};
use crate::graph::*;
use std::collections::HashSet;
use tracing::debug;

/// Breadth-first search.
///
/// Returns a path with the fewest roads between `origin` and `destination`, or `None` if
/// the destination cannot be reached.
pub fn bfs<G: Copy + IntoNeighbors>(
  graph: G,
  origin: G::NodeId,
  destination: G::NodeId,
) -> Option<Vec<G::NodeId>> {
  let mut frontier = Fifo::new();
  let mut visited = HashSet::new();
  frontier.push((origin, vec![origin]));

  while let Some((current, path)) = frontier.pop() {
    if current == destination {
      debug!(expanded = visited.len(), hops = path.len() - 1, "bfs reached destination");
      return Some(path);
    }
    if !visited.insert(current) {
      continue;
    }
    for next in graph.neighbors(current) {
      if !visited.contains(&next) {
        frontier.push((next, extended(&path, next)));
      }
    }
  }

  debug!(expanded = visited.len(), "bfs exhausted the frontier");
  None
}

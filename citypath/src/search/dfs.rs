use super::extended;
use super::frontier::{Frontier, Lifo};
use crate::graph::*;
use std::collections::HashSet;
use tracing::debug;

/// Depth-first search.
///
/// Neighbors are pushed on the stack in graph order, so the last neighbor of a node is explored first.
/// The returned path is the first one found in that order, it is not necessarily the shortest.
pub fn dfs<G: Copy + IntoNeighbors>(
  graph: G,
  origin: G::NodeId,
  destination: G::NodeId,
) -> Option<Vec<G::NodeId>> {
  let mut stack = Lifo::new();
  let mut visited = HashSet::new();
  stack.push((origin, vec![origin]));

  while let Some((current, path)) = stack.pop() {
    if current == destination {
      debug!(expanded = visited.len(), hops = path.len() - 1, "dfs reached destination");
      return Some(path);
    }
    if !visited.insert(current) {
      continue;
    }
    for next in graph.neighbors(current) {
      if !visited.contains(&next) {
        stack.push((next, extended(&path, next)));
      }
    }
  }

  debug!(expanded = visited.len(), "dfs exhausted the stack");
  None
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[test]
  fn test_dfs_explores_last_neighbor_first() {
    let network = unit_square();
    let [a, c] = [0, 2];

    let path = dfs(&network, a, c).unwrap();
    assert_eq!(names(&network, &path), vec!["A", "D", "C"]);
  }

  #[test]
  fn test_dfs_is_not_shortest() {
    // B is listed last for A, so the long way round is taken before the direct road
    let network = network_from_positions_and_roads(
      vec![("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0), ("D", 3.0, 0.0), ("E", 4.0, 0.0)],
      vec![("A", "E"), ("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")],
    );
    let endpoints = ids(&network, &["A", "E"]);

    let path = dfs(&network, endpoints[0], endpoints[1]).unwrap();
    assert_connected(&network, &path);
    assert_eq!(names(&network, &path), vec!["A", "B", "C", "D", "E"]);
  }

  #[test]
  fn test_dfs_is_reproducible() {
    let network = unit_square();

    let first = dfs(&network, 1, 3);
    let second = dfs(&network, 1, 3);
    assert_eq!(first, second);
  }
}

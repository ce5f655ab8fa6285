use crate::graph::*;
use tracing::{debug, trace};

/// Iterative-deepening depth-first search.
///
/// Runs a depth-limited search for every limit in `1..=max_depth` and returns the first path found.
/// A limit of `d` accepts paths with up to `d` roads. Each attempt only avoids locations already on
/// its current path, nothing is remembered between attempts.
pub fn iddfs<G: Copy + IntoNeighbors>(
  graph: G,
  origin: G::NodeId,
  destination: G::NodeId,
  max_depth: usize,
) -> Option<Vec<G::NodeId>> {
  if origin == destination {
    return Some(vec![origin]);
  }

  for limit in 1..=max_depth {
    trace!(limit, "id-dfs deepening");
    let mut path = vec![origin];
    if depth_limited(graph, origin, destination, &mut path, limit) {
      debug!(limit, hops = path.len() - 1, "id-dfs reached destination");
      return Some(path);
    }
  }

  debug!(max_depth, "id-dfs exhausted all depth limits");
  None
}

// On success `path` holds the full route, otherwise it is left as it was passed in
fn depth_limited<G: Copy + IntoNeighbors>(
  graph: G,
  node: G::NodeId,
  destination: G::NodeId,
  path: &mut Vec<G::NodeId>,
  remaining: usize,
) -> bool {
  if node == destination {
    return true;
  }
  if remaining == 0 {
    return false;
  }
  for next in graph.neighbors(node) {
    if path.contains(&next) {
      continue;
    }
    path.push(next);
    if depth_limited(graph, next, destination, path, remaining - 1) {
      return true;
    }
    path.pop();
  }
  false
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::search::DEFAULT_MAX_DEPTH;
  use crate::test_utils::*;

  fn chain() -> crate::graph_impl::RoadNetwork {
    network_from_positions_and_roads(
      vec![("N0", 0.0, 0.0), ("N1", 1.0, 0.0), ("N2", 2.0, 0.0), ("N3", 3.0, 0.0), ("N4", 4.0, 0.0)],
      vec![("N0", "N1"), ("N1", "N2"), ("N2", "N3"), ("N3", "N4")],
    )
  }

  #[test]
  fn test_iddfs_unit_square() {
    let network = unit_square();

    let path = iddfs(&network, 0, 2, DEFAULT_MAX_DEPTH).unwrap();
    assert_eq!(names(&network, &path), vec!["A", "B", "C"]);

    let path = iddfs(&network, 0, 1, DEFAULT_MAX_DEPTH).unwrap();
    assert_eq!(names(&network, &path), vec!["A", "B"]);
  }

  #[test]
  fn test_iddfs_prefers_shallow_path() {
    // Depth-first order alone would go A -> B -> C -> D -> E
    let network = network_from_positions_and_roads(
      vec![("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0), ("D", 3.0, 0.0), ("E", 4.0, 0.0)],
      vec![("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("A", "E")],
    );
    let endpoints = ids(&network, &["A", "E"]);

    let path = iddfs(&network, endpoints[0], endpoints[1], DEFAULT_MAX_DEPTH).unwrap();
    assert_eq!(names(&network, &path), vec!["A", "E"]);
  }

  #[test]
  fn test_iddfs_respects_max_depth() {
    let network = chain();
    let endpoints = ids(&network, &["N0", "N4"]);

    assert_eq!(iddfs(&network, endpoints[0], endpoints[1], 3), None);

    let path = iddfs(&network, endpoints[0], endpoints[1], 4).unwrap();
    assert_connected(&network, &path);
    assert_eq!(names(&network, &path), vec!["N0", "N1", "N2", "N3", "N4"]);
  }

  #[test]
  fn test_iddfs_same_location_with_zero_depth() {
    let network = chain();

    assert_eq!(iddfs(&network, 2, 2, 0), Some(vec![2]));
    assert_eq!(iddfs(&network, 2, 3, 0), None);
  }

  #[test]
  fn test_iddfs_cycle_check_is_per_path() {
    // C is first reached through B, that attempt must not block the direct road A-C
    let network = network_from_positions_and_roads(
      vec![("A", 0.0, 0.0), ("B", 1.0, 1.0), ("C", 1.0, -1.0), ("E", 3.0, -1.0)],
      vec![("A", "B"), ("B", "C"), ("A", "C"), ("C", "E")],
    );
    let endpoints = ids(&network, &["A", "E"]);

    let path = iddfs(&network, endpoints[0], endpoints[1], 2).unwrap();
    assert_eq!(names(&network, &path), vec!["A", "C", "E"]);
  }
}

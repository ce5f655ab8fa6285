use super::extended;
use super::frontier::{Frontier, PriorityFrontier};
use crate::error::Result;
use crate::graph::*;
use crate::heuristic::Heuristic;
use std::collections::HashSet;
use tracing::debug;

struct Candidate<N> {
  id: N,
  path: Vec<N>,
  // Length of `path`
  cost: f64,
}

/// A* search.
///
/// Candidates are ordered by the distance traveled so far plus the straight-line distance to the
/// destination. Returns the geometrically shortest path since the straight line never overestimates.
pub fn astar<G: Copy + IntoNeighbors + Heuristic>(
  graph: G,
  origin: G::NodeId,
  destination: G::NodeId,
) -> Result<Option<Vec<G::NodeId>>> {
  if origin == destination {
    return Ok(Some(vec![origin]));
  }

  let mut frontier = PriorityFrontier::new();
  let mut visited = HashSet::new();
  frontier.push((
    graph.distance(origin, destination)?,
    Candidate {
      id: origin,
      path: vec![origin],
      cost: 0.0,
    },
  ));

  while let Some((_, Candidate { id, path, cost })) = frontier.pop() {
    if id == destination {
      debug!(expanded = visited.len(), cost, "a* reached destination");
      return Ok(Some(path));
    }
    if !visited.insert(id) {
      continue;
    }
    for next in graph.neighbors(id) {
      let next_cost = cost + graph.distance(id, next)?;
      let estimate = next_cost + graph.distance(next, destination)?;
      frontier.push((
        estimate,
        Candidate {
          id: next,
          path: extended(&path, next),
          cost: next_cost,
        },
      ));
    }
  }

  debug!(expanded = visited.len(), "a* exhausted the frontier");
  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::heuristic::path_length;
  use crate::search::bfs;
  use crate::test_utils::*;
  use assert_approx_eq::assert_approx_eq;

  #[test]
  fn test_astar_unit_square() {
    let network = unit_square();

    let path = astar(&network, 0, 2).unwrap().unwrap();
    assert_eq!(names(&network, &path), vec!["A", "B", "C"]);
    assert_approx_eq!(path_length(&network, &path).unwrap(), 2.0);
  }

  #[test]
  fn test_astar_finds_shortest_distance() {
    // The detour over M has fewer roads but is much longer
    let network = network_from_positions_and_roads(
      vec![
        ("S", 0.0, 0.0),
        ("M", 5.0, 8.0),
        ("P1", 3.0, 0.0),
        ("P2", 6.0, 0.0),
        ("T", 10.0, 0.0),
      ],
      vec![("S", "M"), ("M", "T"), ("S", "P1"), ("P1", "P2"), ("P2", "T")],
    );
    let endpoints = ids(&network, &["S", "T"]);

    let path = astar(&network, endpoints[0], endpoints[1]).unwrap().unwrap();
    assert_eq!(names(&network, &path), vec!["S", "P1", "P2", "T"]);
    assert_approx_eq!(path_length(&network, &path).unwrap(), 10.0);

    let fewest_roads = bfs(&network, endpoints[0], endpoints[1]).unwrap();
    assert_eq!(names(&network, &fewest_roads), vec!["S", "M", "T"]);
    assert!(path_length(&network, &fewest_roads).unwrap() > 18.0);
  }

  #[test]
  fn test_astar_terminates_on_cycle() {
    let network = network_from_positions_and_roads(
      vec![("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 0.5, 1.0), ("D", 1.5, 1.0), ("Z", 9.0, 9.0)],
      vec![("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("D", "B")],
    );
    let endpoints = ids(&network, &["A", "Z"]);

    assert_eq!(astar(&network, endpoints[0], endpoints[1]), Ok(None));
  }
}

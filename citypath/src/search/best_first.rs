use super::extended;
use super::frontier::{Frontier, PriorityFrontier};
use crate::error::Result;
use crate::graph::*;
use crate::heuristic::Heuristic;
use std::collections::HashSet;
use tracing::debug;

/// Greedy best-first search.
///
/// Always expands the candidate closest to the destination by straight-line distance, ignoring
/// the distance already traveled. Neighbors are queued even if they were already expanded, such
/// entries are skipped when popped.
pub fn best_first<G: Copy + IntoNeighbors + Heuristic>(
  graph: G,
  origin: G::NodeId,
  destination: G::NodeId,
) -> Result<Option<Vec<G::NodeId>>> {
  if origin == destination {
    return Ok(Some(vec![origin]));
  }

  let mut frontier = PriorityFrontier::new();
  let mut visited = HashSet::new();
  frontier.push((graph.distance(origin, destination)?, (origin, vec![origin])));

  while let Some((_, (current, path))) = frontier.pop() {
    if current == destination {
      debug!(expanded = visited.len(), hops = path.len() - 1, "best-first reached destination");
      return Ok(Some(path));
    }
    if !visited.insert(current) {
      continue;
    }
    for next in graph.neighbors(current) {
      let estimate = graph.distance(next, destination)?;
      frontier.push((estimate, (next, extended(&path, next))));
    }
  }

  debug!(expanded = visited.len(), "best-first exhausted the frontier");
  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;
  use crate::test_utils::*;

  #[test]
  fn test_best_first_unit_square() {
    let network = unit_square();

    // B and D are equally close to C, B was queued first
    let path = best_first(&network, 0, 2).unwrap().unwrap();
    assert_eq!(names(&network, &path), vec!["A", "B", "C"]);
  }

  #[test]
  fn test_best_first_follows_the_heuristic() {
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

    let path = best_first(&network, endpoints[0], endpoints[1]).unwrap().unwrap();
    assert_eq!(names(&network, &path), vec!["S", "P1", "P2", "T"]);
  }

  #[test]
  fn test_best_first_terminates_on_cycle() {
    let network = network_from_positions_and_roads(
      vec![("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 0.5, 1.0), ("Z", 0.6, 0.4)],
      vec![("A", "B"), ("B", "C"), ("C", "A")],
    );
    let endpoints = ids(&network, &["A", "Z"]);

    assert_eq!(best_first(&network, endpoints[0], endpoints[1]), Ok(None));
  }

  #[test]
  fn test_best_first_fails_on_missing_position() {
    let mut network = unit_square();
    network.add_road("B", "Ghost");
    let endpoints = ids(&network, &["A", "C"]);

    assert_eq!(
      best_first(&network, endpoints[0], endpoints[1]),
      Err(Error::MissingPosition("Ghost".to_string()))
    );
  }
}

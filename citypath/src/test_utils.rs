use crate::graph::IntoNeighbors;
use crate::graph_impl::*;
use crate::spatial::Position;

pub fn network_from_positions_and_roads(
  positions: Vec<(&str, f64, f64)>,
  roads: Vec<(&str, &str)>,
) -> RoadNetwork {
  let mut network = RoadNetwork::new();
  for (name, x, y) in positions {
    network.set_position(name, Position { x, y });
  }
  for (from, to) in roads {
    network.add_road(from, to);
  }
  network
}

/// A(0,0), B(1,0), C(1,1), D(0,1) connected along the sides: A-B, B-C, C-D, A-D.
pub fn unit_square() -> RoadNetwork {
  network_from_positions_and_roads(
    vec![("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 1.0, 1.0), ("D", 0.0, 1.0)],
    vec![("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
  )
}

pub fn ids(network: &RoadNetwork, names: &[&str]) -> Vec<Idx> {
  names
    .iter()
    .map(|name| network.location_id(name).unwrap())
    .collect()
}

pub fn names(network: &RoadNetwork, path: &[Idx]) -> Vec<String> {
  path.iter().map(|id| network.name(*id).to_string()).collect()
}

pub fn assert_connected(network: &RoadNetwork, path: &[Idx]) {
  assert!(!path.is_empty());
  for pair in path.windows(2) {
    assert!(
      network.neighbors(pair[0]).any(|id| id == pair[1]),
      "{} is not adjacent to {}",
      network.name(pair[0]),
      network.name(pair[1])
    );
  }
}

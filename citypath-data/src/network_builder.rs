use crate::error::LoadError;
use crate::reader::*;
use citypath::graph_impl::RoadNetwork;
use std::path::Path;
use tracing::{info, warn};

/// Reads the coordinate table and the adjacency list and builds the road network.
pub fn import_network<P: AsRef<Path>, Q: AsRef<Path>>(
  coordinates_path: P,
  adjacencies_path: Q,
) -> Result<RoadNetwork, LoadError> {
  let coordinates = read_coordinates_file(coordinates_path)?;
  let adjacencies = read_adjacencies_file(adjacencies_path)?;

  Ok(build_network(&coordinates, &adjacencies))
}

/// Locations get ids in the order of the coordinate table, roads keep the order of the adjacency list.
pub fn build_network(coordinates: &[CoordinateRecord], adjacencies: &[Adjacency]) -> RoadNetwork {
  let mut network = RoadNetwork::new();

  for record in coordinates {
    network.set_position(&record.name, record.position);
  }

  for Adjacency(from, to) in adjacencies {
    for name in &[from, to] {
      if !network.contains(name) {
        warn!(location = %name, "adjacency list refers to a location without coordinates");
      }
    }
    network.add_road(from, to);
  }

  network.shrink();
  info!(
    nodes = network.number_of_nodes(),
    edges = network.number_of_edges(),
    "built road network"
  );
  network
}

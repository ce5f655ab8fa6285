use crate::error::{Error, Result};
use crate::graph::*;
use crate::spatial::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Node id
pub type Idx = u32;

#[derive(Default, Clone, Debug, Serialize, Deserialize)]
struct Node {
  name: String,
  position: Option<Position>,
  // Adjacent nodes in the order the roads were added.
  out_edges: Vec<Idx>,
}

/// Road network which stores location names, positions and adjacency lists in a vector of nodes.
///
/// Location names are interned into [`Idx`] values in the order they are first seen. Each road is
/// registered in both directions, so the adjacency relation is symmetric.
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct RoadNetwork {
  nodes: Vec<Node>,
  index: HashMap<String, Idx>,
}

impl RoadNetwork {
  pub fn new() -> Self {
    Self {
      nodes: Vec::new(),
      index: HashMap::new(),
    }
  }

  /// Returns the id of the location, adding it without a position if it is not known yet.
  pub fn add_location(&mut self, name: &str) -> Idx {
    if let Some(id) = self.index.get(name) {
      return *id;
    }
    let id = self.nodes.len() as Idx;
    self.nodes.push(Node {
      name: name.to_string(),
      ..Default::default()
    });
    self.index.insert(name.to_string(), id);
    id
  }

  /// Sets (or replaces) the position of the location.
  pub fn set_position(&mut self, name: &str, position: Position) -> Idx {
    let id = self.add_location(name);
    self.nodes[id as usize].position = Some(position);
    id
  }

  /// Adds an undirected road: `to` becomes a neighbor of `from` and `from` a neighbor of `to`.
  pub fn add_road(&mut self, from: &str, to: &str) -> &mut Self {
    let from = self.add_location(from);
    let to = self.add_location(to);
    self.add_edge(from, to).add_edge(to, from)
  }

  /// Adds a single direction of a road.
  pub fn add_edge(&mut self, from: Idx, to: Idx) -> &mut Self {
    self.nodes[from as usize].out_edges.push(to);
    self
  }

  pub fn location_id(&self, name: &str) -> Option<Idx> {
    self.index.get(name).cloned()
  }

  pub fn name(&self, id: Idx) -> &str {
    &self.nodes[id as usize].name
  }

  pub fn contains(&self, name: &str) -> bool {
    self.index.contains_key(name)
  }

  pub fn has_position(&self, id: Idx) -> bool {
    self.nodes[id as usize].position.is_some()
  }

  /// Names of all locations ordered by id.
  pub fn locations(&self) -> impl Iterator<Item = &str> {
    self.nodes.iter().map(|node| node.name.as_str())
  }

  pub fn is_adjacent(&self, from: Idx, to: Idx) -> bool {
    self.nodes[from as usize].out_edges.contains(&to)
  }

  pub fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self
      .nodes
      .iter()
      .map(|node| node.out_edges.len())
      .sum::<usize>()
      / 2
  }

  pub fn shrink(&mut self) {
    self.nodes.shrink_to_fit();
    self.index.shrink_to_fit();
  }
}

impl GraphBase for RoadNetwork {
  type NodeId = Idx;
}

impl<'a> IntoNeighbors for &'a RoadNetwork {
  type Neighbors = std::iter::Cloned<std::slice::Iter<'a, Idx>>;

  fn neighbors(self, node_id: Idx) -> Self::Neighbors {
    self.nodes[node_id as usize].out_edges.iter().cloned()
  }
}

impl Positioned for RoadNetwork {
  fn position(&self, node_id: Idx) -> Result<Position> {
    let node = &self.nodes[node_id as usize];
    node
      .position
      .ok_or_else(|| Error::MissingPosition(node.name.clone()))
  }
}

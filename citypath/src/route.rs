//! Route finding.

use crate::error::{Error, Result};
use crate::graph::*;
use crate::graph_impl::{Idx, RoadNetwork};
use crate::heuristic::{path_length, Heuristic};
use crate::search::{SearchOptions, Strategy};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct Route<N: Identifier> {
  /// Locations from the origin to the destination
  pub ids: Vec<N>,
  /// Sum of straight-line distances between consecutive locations
  pub length: f64,
}

/// Runs the strategy and measures the length of the found path.
pub fn find_route<G: Copy + IntoNeighbors + Heuristic>(
  graph: G,
  strategy: Strategy,
  options: &SearchOptions,
  origin: G::NodeId,
  destination: G::NodeId,
) -> Result<Option<Route<G::NodeId>>> {
  debug!(%strategy, ?origin, ?destination, "searching route");
  match strategy.run(graph, options, origin, destination)? {
    Some(ids) => {
      let length = path_length(&graph, &ids)?;
      Ok(Some(Route { ids, length }))
    }
    None => Ok(None),
  }
}

pub fn find_route_by_name(
  network: &RoadNetwork,
  strategy: Strategy,
  options: &SearchOptions,
  origin: &str,
  destination: &str,
) -> Result<Option<Route<Idx>>> {
  let lookup = |name: &str| {
    network
      .location_id(name)
      .ok_or_else(|| Error::UnknownLocation(name.to_string()))
  };
  find_route(network, strategy, options, lookup(origin)?, lookup(destination)?)
}

impl Route<Idx> {
  pub fn names<'a>(&self, network: &'a RoadNetwork) -> Vec<&'a str> {
    self.ids.iter().map(|id| network.name(*id)).collect()
  }
}

//! Straight-line distance heuristic.
//!
//! The same distance is used to guide the informed strategies and to report the length of a found path.

use crate::error::Result;
use crate::graph::{GraphBase, Positioned};
use crate::spatial::euclidean_distance;

/// Estimated cost of traveling between two nodes
pub trait Heuristic: GraphBase {
  fn distance(&self, from: Self::NodeId, to: Self::NodeId) -> Result<f64>;
}

/// Any graph with node positions can estimate distances with the straight line between nodes
impl<G: Positioned> Heuristic for G {
  fn distance(&self, from: Self::NodeId, to: Self::NodeId) -> Result<f64> {
    Ok(euclidean_distance(&self.position(from)?, &self.position(to)?))
  }
}

/// Sum of distances between consecutive nodes of the path. Zero for a path with a single node.
pub fn path_length<H: Heuristic>(heuristic: &H, path: &[H::NodeId]) -> Result<f64> {
  path
    .windows(2)
    .try_fold(0.0, |length, pair| -> Result<f64> {
      Ok(length + heuristic.distance(pair[0], pair[1])?)
    })
}

use crate::error::Result;
use crate::graph::GraphBase;
use crate::spatial::Position;

/// Defines how to obtain a position of a graph node
///
/// A node without a position is a lookup failure, implementations must return an error 
/// rather than a default position.
pub trait Positioned: GraphBase {
  fn position(&self, node: Self::NodeId) -> Result<Position>;
}

impl<'a, G: Positioned> Positioned for &'a G {
  fn position(&self, node: Self::NodeId) -> Result<Position> {
    (*self).position(node)
  }
}

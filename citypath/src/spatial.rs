//! Geographic types.

use geo::{euclidean_distance::EuclideanDistance, Point};

#[doc(hidden)]
pub use geo::Coordinate;

pub type Position = Coordinate<f64>;

/// Straight-line distance between two positions in the plane.
pub fn euclidean_distance(from: &Position, to: &Position) -> f64 {
  Point::from(*from).euclidean_distance(&Point::from(*to))
}

//! Set of traits for defining a graph abstraction.
//! 
//! The module contains traits for defining an undirected road network whose nodes are 
//! locations with known positions. Distances are never stored, they are derived from positions.
//! 
mod graph;
mod spatial;

pub use graph::*;
pub use spatial::*;

//! Graph data structures.
//! 
//! [`RoadNetwork`] is an in-memory undirected graph of named locations. It is grown by adding
//! locations and roads while loading and then only read by the search strategies.

mod road_network;

pub use road_network::*;

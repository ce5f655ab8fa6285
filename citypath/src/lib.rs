//! Uninformed and heuristic search algorithms for finding routes in small road networks.

pub mod error;
pub mod graph;
pub mod graph_impl;
pub mod heuristic;
pub mod route;
pub mod search;
pub mod spatial;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};

mod error;
mod network_builder;
mod network_serde;
mod reader;

pub use error::LoadError;
pub use network_builder::*;
pub use network_serde::{load_network, save_network};
pub use reader::*;

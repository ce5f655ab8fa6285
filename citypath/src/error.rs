use thiserror::Error;

/// Lookup failures raised by the network and the search strategies.
///
/// Not finding a route is not an error: strategies report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("location `{0}` has no coordinates")]
  MissingPosition(String),
  #[error("unknown location `{0}`")]
  UnknownLocation(String),
  #[error("unknown search strategy `{0}`")]
  UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the coordinate table, the adjacency list or a network snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("{}: {source}", .path.display())]
  Open {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error(transparent)]
  Read(#[from] std::io::Error),
  #[error("line {line}: expected `name,x,y`, found `{content}`")]
  MalformedCoordinates { line: usize, content: String },
  #[error("line {line}: `{value}` is not a valid coordinate")]
  InvalidCoordinate { line: usize, value: String },
  #[error("line {line}: expected two location names, found `{content}`")]
  MalformedAdjacency { line: usize, content: String },
  #[error("snapshot {}: {source}", .path.display())]
  Snapshot {
    path: PathBuf,
    #[source]
    source: bincode::Error,
  },
}

impl LoadError {
  pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
    LoadError::Open {
      path: path.to_path_buf(),
      source,
    }
  }
}

use crate::error::LoadError;
use citypath::graph_impl::RoadNetwork;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn save_network<P: AsRef<Path>>(network: &RoadNetwork, path: P) -> Result<(), LoadError> {
  let path = path.as_ref();
  let mut file = BufWriter::new(File::create(path).map_err(|e| LoadError::open(path, e))?);
  bincode::serialize_into(&mut file, network).map_err(|source| LoadError::Snapshot {
    path: path.to_path_buf(),
    source,
  })?;
  file.flush()?;
  Ok(())
}

pub fn load_network<P: AsRef<Path>>(path: P) -> Result<RoadNetwork, LoadError> {
  let path = path.as_ref();
  let file = BufReader::new(File::open(path).map_err(|e| LoadError::open(path, e))?);
  let mut network: RoadNetwork =
    bincode::deserialize_from(file).map_err(|source| LoadError::Snapshot {
      path: path.to_path_buf(),
      source,
    })?;
  network.shrink();
  Ok(network)
}

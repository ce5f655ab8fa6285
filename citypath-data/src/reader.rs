use crate::error::LoadError;
use citypath::spatial::Position;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A row of the coordinate table
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateRecord {
  pub name: String,
  pub position: Position,
}

/// A line of the adjacency list: an undirected road between two locations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjacency(pub String, pub String);

/// Reads `name,x,y` rows. Blank lines are skipped, anything else that does not have exactly
/// three fields with numeric coordinates is an error.
pub fn read_coordinates<R: BufRead>(reader: R) -> Result<Vec<CoordinateRecord>, LoadError> {
  let mut records = Vec::new();
  for (i, line) in reader.lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }

    let fields: Vec<_> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 || fields[0].is_empty() {
      return Err(LoadError::MalformedCoordinates {
        line: i + 1,
        content: line.clone(),
      });
    }

    let parse = |value: &str| {
      value.parse::<f64>().map_err(|_| LoadError::InvalidCoordinate {
        line: i + 1,
        value: value.to_string(),
      })
    };
    records.push(CoordinateRecord {
      name: fields[0].to_string(),
      position: Position {
        x: parse(fields[1])?,
        y: parse(fields[2])?,
      },
    });
  }
  Ok(records)
}

/// Reads whitespace separated `from to` pairs. Blank lines are skipped.
pub fn read_adjacencies<R: BufRead>(reader: R) -> Result<Vec<Adjacency>, LoadError> {
  let mut adjacencies = Vec::new();
  for (i, line) in reader.lines().enumerate() {
    let line = line?;
    let names: Vec<_> = line.split_whitespace().collect();
    match names.as_slice() {
      [] => continue,
      [from, to] => adjacencies.push(Adjacency(from.to_string(), to.to_string())),
      _ => {
        return Err(LoadError::MalformedAdjacency {
          line: i + 1,
          content: line.clone(),
        })
      }
    }
  }
  Ok(adjacencies)
}

pub fn read_coordinates_file<P: AsRef<Path>>(path: P) -> Result<Vec<CoordinateRecord>, LoadError> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
  read_coordinates(BufReader::new(file))
}

pub fn read_adjacencies_file<P: AsRef<Path>>(path: P) -> Result<Vec<Adjacency>, LoadError> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
  read_adjacencies(BufReader::new(file))
}

use citypath::graph_impl::{Idx, RoadNetwork};
use citypath::route::find_route;
use citypath::search::{SearchOptions, Strategy};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("search failed: {0}")]
    Search(#[from] citypath::Error),
}

/// Interactive prompt loop: asks for two locations and a strategy, prints the route and repeats
/// while the user answers `y`. The session ends cleanly when the input is exhausted.
pub struct Session<'a, R, W> {
    network: &'a RoadNetwork,
    options: SearchOptions,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(network: &'a RoadNetwork, options: SearchOptions, input: R, output: W) -> Self {
        Session {
            network,
            options,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let origin = match self.prompt_location("Enter the origin city: ")? {
                Some(id) => id,
                None => return Ok(()),
            };
            let destination = match self.prompt_location("Enter the destination city: ")? {
                Some(id) => id,
                None => return Ok(()),
            };
            let strategy = match self.prompt_strategy()? {
                Some(strategy) => strategy,
                None => return Ok(()),
            };

            self.search(origin, destination, strategy)?;

            match self.prompt("Do you want to search for another path? (y/n): ")? {
                Some(answer) if answer == "y" => continue,
                _ => return Ok(()),
            }
        }
    }

    fn search(&mut self, origin: Idx, destination: Idx, strategy: Strategy) -> Result<(), SessionError> {
        let route_timer = Instant::now();
        let route = find_route(self.network, strategy, &self.options, origin, destination)?;
        let elapsed = route_timer.elapsed();

        match route {
            Some(route) => {
                info!(
                    %strategy,
                    hops = route.ids.len() - 1,
                    length = route.length,
                    "route found in {}s",
                    elapsed.as_secs_f32()
                );
                writeln!(self.output, "Path: {}\n", route.names(self.network).join(" -> "))?;
                writeln!(self.output, "Path distance: {:.2} km", route.length)?;
            }
            None => {
                info!(%strategy, "no route found");
                writeln!(
                    self.output,
                    "No path found from {} to {}\n",
                    self.network.name(origin),
                    self.network.name(destination)
                )?;
            }
        }
        writeln!(self.output, "Time taken: {:.6} seconds", elapsed.as_secs_f64())?;
        Ok(())
    }

    fn prompt_location(&mut self, message: &str) -> io::Result<Option<Idx>> {
        loop {
            let name = match self.prompt(message)? {
                Some(name) => name,
                None => return Ok(None),
            };
            match self.network.location_id(&name) {
                Some(id) if self.network.has_position(id) => return Ok(Some(id)),
                _ => {
                    debug!(location = %name, "rejected location");
                    writeln!(self.output, "City not valid. Please enter a valid city.")?;
                }
            }
        }
    }

    fn prompt_strategy(&mut self) -> io::Result<Option<Strategy>> {
        let names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
        let message = format!("Enter the search method ({}): ", names.join(", "));
        loop {
            let name = match self.prompt(&message)? {
                Some(name) => name,
                None => return Ok(None),
            };
            match name.parse::<Strategy>() {
                Ok(strategy) => return Ok(Some(strategy)),
                Err(err) => {
                    debug!(%err, "rejected search method");
                    writeln!(
                        self.output,
                        "Search method not valid. Please enter a valid search method."
                    )?;
                }
            }
        }
    }

    // `None` at the end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

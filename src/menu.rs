//! Interactive text menu over a [`Graph`].
//!
//! The menu only parses and prints: every change and every query goes through the graph API,
//! and errors reported by the graph are printed back without ending the session.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::ops::ControlFlow;

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};
use thiserror::Error;
use tracing::debug;

use crate::Graph;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Menu I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Distance is not a valid integer: {0}")]
    InvalidDistance(#[from] ParseIntError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MenuOption {
    #[strum(to_string = "Add location")]
    AddLocation = 1,
    #[strum(to_string = "Add path")]
    AddPath = 2,
    #[strum(to_string = "Show graph")]
    ShowGraph = 3,
    #[strum(to_string = "Find shortest route")]
    ShortestRoute = 4,
    #[strum(to_string = "Exit")]
    Exit = 5,
}

impl MenuOption {
    /// Parses the number of the option as shown in the menu.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse().ok().and_then(Self::from_repr)
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
}

/// Outcome of a menu step, `Break` once the input is exhausted.
type Step = ControlFlow<()>;

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the exit option is chosen or the input ends.
    pub fn run(&mut self, graph: &mut Graph) -> Result<(), MenuError> {
        loop {
            self.print_options()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input");
                return Ok(());
            };

            let Some(option) = MenuOption::parse(&line) else {
                writeln!(self.output, "Invalid option.")?;
                continue;
            };

            debug!("Selected {option:?}");
            let step = match option {
                MenuOption::AddLocation => self.add_location(graph)?,
                MenuOption::AddPath => self.add_path(graph)?,
                MenuOption::ShowGraph => {
                    write!(self.output, "{graph}")?;
                    Step::Continue(())
                }
                MenuOption::ShortestRoute => self.shortest_route(graph)?,
                MenuOption::Exit => Step::Break(()),
            };

            if step.is_break() {
                return Ok(());
            }
        }
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Park menu ---")?;
        for option in MenuOption::iter() {
            writeln!(self.output, "{}. {option}", option as u8)?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    fn add_location(&mut self, graph: &mut Graph) -> Result<Step, MenuError> {
        let Some(name) = self.prompt("Location name: ")? else {
            return Ok(Step::Break(()));
        };

        if name.is_empty() {
            writeln!(self.output, "Location name cannot be empty.")?;
        } else {
            graph.add_node(name);
        }

        Ok(Step::Continue(()))
    }

    fn add_path(&mut self, graph: &mut Graph) -> Result<Step, MenuError> {
        let Some(origin) = self.prompt("Origin: ")? else {
            return Ok(Step::Break(()));
        };
        let Some(destination) = self.prompt("Destination: ")? else {
            return Ok(Step::Break(()));
        };
        let Some(distance) = self.prompt("Distance: ")? else {
            return Ok(Step::Break(()));
        };

        let weight = match distance.parse::<i32>() {
            Ok(weight) => weight,
            Err(error) => {
                writeln!(self.output, "{}", MenuError::from(error))?;
                return Ok(Step::Continue(()));
            }
        };

        if let Err(error) = graph.add_edge(&origin, &destination, weight) {
            writeln!(self.output, "{error}")?;
        }

        Ok(Step::Continue(()))
    }

    fn shortest_route(&mut self, graph: &Graph) -> Result<Step, MenuError> {
        let Some(start) = self.prompt("Start: ")? else {
            return Ok(Step::Break(()));
        };
        let Some(end) = self.prompt("End: ")? else {
            return Ok(Step::Break(()));
        };

        match graph.shortest_path(&start, &end) {
            Ok(Some(route)) => {
                writeln!(self.output, "\nShortest route from {start} to {end}:")?;
                writeln!(self.output, "{route}")?;
                writeln!(self.output, "Total distance: {}", route.distance)?;
            }
            Ok(None) => writeln!(self.output, "No path available.")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }

        Ok(Step::Continue(()))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads the next trimmed line, None at the end of the input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

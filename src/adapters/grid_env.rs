//! Grid-world environment adapter.
//!
//! [`GridEnvironment`] owns a [`GridWorld`] and a rover, and implements the
//! [`Environment`] port: placement on reset, distance sensing, and the
//! turn-then-move step rule. Each environment carries its own RNG so that a
//! seeded run reproduces both the obstacle layout and the rover placement.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::grid::{GridConfig, GridWorld};
use crate::ports::{Environment, StepOutcome};
use crate::rover::{Action, Direction, Rover};
use crate::sensing::SensedState;
use crate::utils::build_rng;

/// Upper bound on rejection-sampling attempts when placing the rover.
const PLACEMENT_ATTEMPTS: usize = 10_000;

/// A rover living on a bounded obstacle grid.
///
/// The rover is absent until [`Environment::reset`] places it on a free
/// interior cell. Every step first applies the chosen turn and then forces
/// one move forward; driving into an obstacle ends the episode with the
/// rover left on its last surviving cell.
#[derive(Debug)]
pub struct GridEnvironment {
    grid: GridWorld,
    rover: Option<Rover>,
    alive: bool,
    initial_heading: Direction,
    rng: StdRng,
}

impl GridEnvironment {
    /// Generates a fresh random grid from `config` and wraps it.
    ///
    /// The same seed yields the same obstacle layout and the same placement
    /// sequence on reset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the grid configuration is
    /// rejected by [`GridConfig::validate`].
    pub fn generate(config: &GridConfig, seed: Option<u64>) -> Result<Self> {
        let mut rng = build_rng(seed);
        let grid = GridWorld::generate(config, &mut rng)?;

        Ok(Self {
            grid,
            rover: None,
            alive: false,
            initial_heading: Direction::North,
            rng,
        })
    }

    /// Wraps an existing grid, typically one built with
    /// [`GridWorld::from_rows`] for tests and demos.
    pub fn from_grid(grid: GridWorld, seed: Option<u64>) -> Self {
        Self {
            grid,
            rover: None,
            alive: false,
            initial_heading: Direction::North,
            rng: build_rng(seed),
        }
    }

    /// Sets the heading given to the rover on every reset.
    #[must_use]
    pub fn with_heading(mut self, heading: Direction) -> Self {
        self.initial_heading = heading;
        self
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    /// Returns the rover, if one has been placed.
    pub fn rover(&self) -> Option<&Rover> {
        self.rover.as_ref()
    }

    /// Returns whether the current episode is still running.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Renders the grid with the rover drawn as a heading glyph.
    pub fn render(&self) -> String {
        let mut output = String::new();

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let glyph = match self.rover {
                    Some(rover) if rover.x == x as i32 && rover.y == y as i32 => {
                        match rover.heading {
                            Direction::North => '^',
                            Direction::South => 'v',
                            Direction::East => '>',
                            Direction::West => '<',
                        }
                    }
                    _ => self.grid.cell(x, y).to_char(),
                };
                output.push(glyph);
            }
            output.push('\n');
        }

        output
    }

    /// Draws interior coordinates until one lands on a free cell.
    fn place_rover(&mut self) -> Result<Rover> {
        let width = self.grid.width();
        let height = self.grid.height();

        if width < 3 || height < 3 {
            return Err(Error::EnvironmentUnplaceable { attempts: 0 });
        }

        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = self.rng.random_range(1..width as i32 - 1);
            let y = self.rng.random_range(1..height as i32 - 1);

            if !self.grid.is_blocked(x, y) {
                return Ok(Rover::new(x, y, self.initial_heading));
            }
        }

        Err(Error::EnvironmentUnplaceable {
            attempts: PLACEMENT_ATTEMPTS,
        })
    }
}

impl Environment for GridEnvironment {
    fn reset(&mut self) -> Result<SensedState> {
        let rover = self.place_rover()?;
        self.rover = Some(rover);
        self.alive = true;

        Ok(SensedState::scan(&self.grid, &rover))
    }

    fn sense(&self) -> Result<SensedState> {
        let rover = self.rover.as_ref().ok_or(Error::RoverNotPlaced)?;

        Ok(SensedState::scan(&self.grid, rover))
    }

    fn step(&mut self, action: Action) -> Result<StepOutcome> {
        let rover = self.rover.as_mut().ok_or(Error::RoverNotPlaced)?;

        if !self.alive {
            return Ok(StepOutcome::Crashed);
        }

        // The turn happens even when the move that follows is fatal, so a
        // crashed rover reports distances from its final heading.
        rover.apply_turn(action);

        let (x, y) = rover.ahead();

        if self.grid.is_blocked(x, y) {
            self.alive = false;
            return Ok(StepOutcome::Crashed);
        }

        rover.advance();

        Ok(StepOutcome::Moved)
    }
}

//! Environment port - abstraction over the world the rover learns in
//!
//! This port defines the surface the training loop drives. The core is
//! polymorphic over any implementation: grid size, obstacle density, and
//! placement randomness are internal configuration of the adapter, not part
//! of this contract.

use serde::{Deserialize, Serialize};

use crate::{Result, rover::Action, sensing::SensedState};

/// Result of one environment step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The forced forward move landed on a free cell
    Moved,
    /// The forced forward move hit an obstacle; the rover is dead
    Crashed,
}

impl StepOutcome {
    pub fn survived(self) -> bool {
        matches!(self, StepOutcome::Moved)
    }
}

/// Environment trait - one rover's world for one episode
///
/// # Event Sequence
///
/// 1. `reset()` places the rover and returns the initial sensed state
/// 2. `step(action)` / `sense()` repeat until a step returns
///    [`StepOutcome::Crashed`]
///
/// Sensing must be recomputed after every step: the sensed state is the
/// rover's entire memory, and a crashed rover still senses from its last
/// surviving position (with the heading the fatal action turned it to).
///
/// # Examples
///
/// ```no_run
/// use gridq::{ports::Environment, rover::Action};
///
/// fn drive_straight<E: Environment>(env: &mut E) -> gridq::Result<usize> {
///     env.reset()?;
///     let mut steps = 0;
///     while env.step(Action::Nothing)?.survived() {
///         steps += 1;
///     }
///     Ok(steps)
/// }
/// ```
pub trait Environment: Send {
    /// Place the rover on a free interior cell chosen uniformly at random
    /// and return the initial sensed state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EnvironmentUnplaceable`] when no free cell
    /// is found within the implementation's bounded number of attempts.
    fn reset(&mut self) -> Result<SensedState>;

    /// Encode the current state from the rover's position and heading.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RoverNotPlaced`] before the first `reset`.
    fn sense(&self) -> Result<SensedState>;

    /// Apply one action: rotate the heading, then make the forced forward
    /// move.
    ///
    /// A blocked destination kills the rover without moving it; the turn
    /// has already happened. Stepping a dead rover returns
    /// [`StepOutcome::Crashed`] without changing anything.
    fn step(&mut self, action: Action) -> Result<StepOutcome>;
}

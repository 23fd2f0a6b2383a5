//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable data collection without coupling the episode
//! loop to specific output formats or metrics.

use crate::{Result, q_learning::Transition};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different types of data during
/// training. Examples include:
/// - Progress bars for user feedback
/// - JSONL export for analysis
/// - Metrics tracking for evaluation
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - For each step, after the table update
///    - `on_episode_end(episode, steps)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use gridq::{ports::Observer, q_learning::Transition};
///
/// struct StepCounter {
///     steps: usize,
/// }
///
/// impl Observer for StepCounter {
///     fn on_step(
///         &mut self,
///         _episode: usize,
///         _step: usize,
///         _transition: &Transition,
///         _new_q: f64,
///     ) -> gridq::Result<()> {
///         self.steps += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Parameters
    ///
    /// * `total_episodes` - Total number of episodes that will be run
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts, after its environment was spawned.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the episode (0-based)
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to reset per-episode state.
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each step, after the table update was applied.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the current episode
    /// * `step` - Step number within the episode (0-based)
    /// * `transition` - The (state, action, outcome, next state) tuple
    /// * `new_q` - The table value the update produced
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to observe individual updates.
    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        _transition: &Transition,
        _new_q: f64,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends (the rover crashed).
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the completed episode
    /// * `steps` - Number of steps the rover survived plus the fatal one
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to record episode outcomes.
    fn on_episode_end(&mut self, _episode: usize, _steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to finalize outputs, close files, or display summaries.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to perform cleanup or final reporting.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}

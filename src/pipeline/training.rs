//! Training loop orchestration.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ports::{Environment, Observer};
use crate::q_learning::{QLearningEngine, QTable, Transition};
use crate::rover::Action;
use crate::utils::build_rng;

/// Configuration for a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of independent episodes to run.
    pub episodes: usize,

    /// Base seed for the exploration policy and derived episode seeds.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            seed: None,
        }
    }
}

impl TrainerConfig {
    /// Derives a per-episode seed from the base seed.
    ///
    /// Offsets start at one so that no episode environment shares a stream
    /// with the trainer's own action RNG. Returns `None` when the run is
    /// unseeded.
    pub fn episode_seed(&self, episode: usize) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add(episode as u64).wrapping_add(1))
    }
}

/// Aggregate statistics for a completed training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Episodes completed.
    pub episodes: usize,

    /// Steps taken across all episodes.
    pub total_steps: usize,

    /// Mean steps per episode.
    pub average_episode_steps: f64,

    /// Distinct state-action entries in the table after training.
    pub table_entries: usize,
}

impl TrainingReport {
    fn new(episodes: usize, total_steps: usize, table_entries: usize) -> Self {
        let average_episode_steps = if episodes > 0 {
            total_steps as f64 / episodes as f64
        } else {
            0.0
        };

        Self {
            episodes,
            total_steps,
            average_episode_steps,
            table_entries,
        }
    }
}

/// Runs episodes against freshly spawned environments and accumulates value
/// estimates into a shared [`QTable`].
///
/// Actions are drawn uniformly at random. The table never steers behavior
/// during training; it only records what the random walks discover.
pub struct Trainer {
    config: TrainerConfig,
    observers: Vec<Box<dyn Observer>>,
    rng: StdRng,
}

impl Trainer {
    /// Creates a trainer for the given configuration.
    pub fn new(config: TrainerConfig) -> Self {
        let rng = build_rng(config.seed);

        Self {
            config,
            observers: Vec::new(),
            rng,
        }
    }

    /// Attaches an observer, builder style.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Runs the configured number of episodes.
    ///
    /// `spawn_env` is called once per episode with the episode index and must
    /// return a fresh environment; nothing carries over between episodes
    /// except the table itself.
    ///
    /// # Errors
    ///
    /// Propagates failures from environment construction, environment steps,
    /// and observer notifications.
    pub fn run<E, F>(
        &mut self,
        engine: &QLearningEngine,
        table: &mut QTable,
        mut spawn_env: F,
    ) -> Result<TrainingReport>
    where
        E: Environment,
        F: FnMut(usize) -> Result<E>,
    {
        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut total_steps = 0;

        for episode in 0..self.config.episodes {
            let mut env = spawn_env(episode)?;

            for observer in &mut self.observers {
                observer.on_episode_start(episode)?;
            }

            let steps = self.run_episode(engine, table, &mut env, episode)?;
            total_steps += steps;

            for observer in &mut self.observers {
                observer.on_episode_end(episode, steps)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingReport::new(
            self.config.episodes,
            total_steps,
            table.len(),
        ))
    }

    /// Runs one episode to completion and returns the number of steps taken.
    fn run_episode<E: Environment>(
        &mut self,
        engine: &QLearningEngine,
        table: &mut QTable,
        env: &mut E,
        episode: usize,
    ) -> Result<usize> {
        let mut state = env.reset()?;
        let mut steps = 0;

        loop {
            let action = *Action::ALL.choose(&mut self.rng).unwrap();
            let outcome = env.step(action)?;
            let next = env.sense()?;

            let transition = Transition {
                state,
                action,
                outcome,
                next,
            };
            let new_q = engine.update(table, &transition);

            for observer in &mut self.observers {
                observer.on_step(episode, steps, &transition, new_q)?;
            }

            steps += 1;

            if !outcome.survived() {
                return Ok(steps);
            }

            state = next;
        }
    }
}

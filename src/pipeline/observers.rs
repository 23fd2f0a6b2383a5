//! Observer pattern for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! the episode loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{Result, ports::Observer, q_learning::Transition};

/// Observation of a single step within an episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Episode number
    pub episode: usize,
    /// Step number within the episode
    pub step: usize,
    /// Free cells ahead before the step
    pub front: u32,
    /// Free cells to the left before the step
    pub left: u32,
    /// Free cells to the right before the step
    pub right: u32,
    /// Action taken
    pub action: String,
    /// Reward received
    pub reward: f64,
    /// Table value after the update
    pub new_q: f64,
}

/// Complete observation of a training episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Episode number
    pub episode: usize,
    /// Steps in the episode
    pub steps: Vec<StepRecord>,
    /// Total steps survived before the crash
    pub total_steps: usize,
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_steps: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            total_steps: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (steps: {msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, steps: usize) -> Result<()> {
        self.total_steps += steps;

        if let Some(pb) = &self.progress_bar {
            pb.set_position((episode + 1) as u64);
            pb.set_message(format!("{}", self.total_steps));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{}", self.total_steps));
        }
        Ok(())
    }
}

/// Metrics observer - Tracks training metrics
pub struct MetricsObserver {
    episodes: usize,
    total_steps: usize,
    episode_steps: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            episodes: 0,
            total_steps: 0,
            episode_steps: Vec::new(),
        }
    }

    /// Get average steps survived per episode
    pub fn average_steps(&self) -> f64 {
        if self.episode_steps.is_empty() {
            0.0
        } else {
            self.total_steps as f64 / self.episode_steps.len() as f64
        }
    }

    /// Get the longest episode seen so far
    pub fn longest_episode(&self) -> usize {
        self.episode_steps.iter().copied().max().unwrap_or(0)
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            episodes: self.episodes,
            total_steps: self.total_steps,
            average_steps: self.average_steps(),
            longest_episode: self.longest_episode(),
        }
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub total_steps: usize,
    pub average_steps: f64,
    pub longest_episode: usize,
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, steps: usize) -> Result<()> {
        self.episodes += 1;
        self.total_steps += steps;
        self.episode_steps.push(steps);
        Ok(())
    }
}

/// JSONL observer - Exports episode observations to JSON Lines format
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_steps: Vec<StepRecord>,
    current_episode: usize,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self {
            writer,
            current_steps: Vec::new(),
            current_episode: 0,
        })
    }
}

impl Observer for JsonlObserver {
    fn on_episode_start(&mut self, episode: usize) -> Result<()> {
        self.current_episode = episode;
        self.current_steps.clear();
        Ok(())
    }

    fn on_step(
        &mut self,
        episode: usize,
        step: usize,
        transition: &Transition,
        new_q: f64,
    ) -> Result<()> {
        self.current_steps.push(StepRecord {
            episode,
            step,
            front: transition.state.front,
            left: transition.state.left,
            right: transition.state.right,
            action: transition.action.label().to_string(),
            reward: transition.reward(),
            new_q,
        });
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, _steps: usize) -> Result<()> {
        let record = EpisodeRecord {
            episode,
            total_steps: self.current_steps.len(),
            steps: self.current_steps.clone(),
        };

        // Write as JSONL (one JSON object per line)
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}

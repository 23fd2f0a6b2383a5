//! Policy summaries over a learned table.
//!
//! After training, table entries are grouped into behavior buckets that ask
//! one question each: when a wall sits one cell out on a given side, what
//! value did the matching evasive action earn? Everything that does not fit
//! a wall bucket lands in the catch-all.

use std::path::Path;

use crate::error::Result;
use crate::q_learning::QTable;
use crate::rover::Action;
use crate::sensing::SensedState;

/// Behavior bucket for a single state-action entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyBucket {
    /// Holding course with a wall one cell ahead.
    NothingWhenWallFront,
    /// Turning left with a wall one cell to the left.
    LeftWhenWallLeft,
    /// Turning right with a wall one cell to the right.
    RightWhenWallRight,
    /// Every other state-action pairing.
    AllElse,
}

impl PolicyBucket {
    /// Assigns a state-action pair to its bucket.
    ///
    /// The wall buckets require distance exactly one: a distance of zero
    /// means the wall is adjacent, which reads as a different situation.
    pub fn classify(state: SensedState, action: Action) -> Self {
        match action {
            Action::Nothing if state.front == 1 => Self::NothingWhenWallFront,
            Action::TurnLeft if state.left == 1 => Self::LeftWhenWallLeft,
            Action::TurnRight if state.right == 1 => Self::RightWhenWallRight,
            _ => Self::AllElse,
        }
    }
}

/// Running totals for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketStats {
    samples: usize,
    total: f64,
}

impl BucketStats {
    fn add(&mut self, value: f64) {
        self.samples += 1;
        self.total += value;
    }

    /// Number of table entries that fell into this bucket.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Mean table value, or `None` when the bucket collected nothing.
    pub fn mean(&self) -> Option<f64> {
        if self.samples == 0 {
            None
        } else {
            Some(self.total / self.samples as f64)
        }
    }
}

/// Bucketed averages for a whole table.
#[derive(Debug, Clone, Default)]
pub struct PolicySummary {
    nothing_when_wall_front: BucketStats,
    left_when_wall_left: BucketStats,
    right_when_wall_right: BucketStats,
    all_else: BucketStats,
}

impl PolicySummary {
    /// Builds the summary in a single pass over the table.
    ///
    /// Entries materialized at zero by lookahead count as samples like any
    /// other entry.
    pub fn from_table(table: &QTable) -> Self {
        let mut summary = Self::default();

        for (state, action, value) in table.iter() {
            summary
                .bucket_mut(PolicyBucket::classify(state, action))
                .add(value);
        }

        summary
    }

    /// Returns the stats for one bucket.
    pub fn stats(&self, bucket: PolicyBucket) -> &BucketStats {
        match bucket {
            PolicyBucket::NothingWhenWallFront => &self.nothing_when_wall_front,
            PolicyBucket::LeftWhenWallLeft => &self.left_when_wall_left,
            PolicyBucket::RightWhenWallRight => &self.right_when_wall_right,
            PolicyBucket::AllElse => &self.all_else,
        }
    }

    fn bucket_mut(&mut self, bucket: PolicyBucket) -> &mut BucketStats {
        match bucket {
            PolicyBucket::NothingWhenWallFront => &mut self.nothing_when_wall_front,
            PolicyBucket::LeftWhenWallLeft => &mut self.left_when_wall_left,
            PolicyBucket::RightWhenWallRight => &mut self.right_when_wall_right,
            PolicyBucket::AllElse => &mut self.all_else,
        }
    }

    /// Formats the summary as the lines printed after a training run.
    ///
    /// The three wall buckets come first, then a blank separator, then the
    /// catch-all. Empty buckets render as `no samples`.
    pub fn stdout_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Average nothing when wall front: {}",
                render_mean(self.nothing_when_wall_front.mean())
            ),
            format!(
                "Average left when wall left: {}",
                render_mean(self.left_when_wall_left.mean())
            ),
            format!(
                "Average right when wall right: {}",
                render_mean(self.right_when_wall_right.mean())
            ),
            String::new(),
            format!("Average all else: {}", render_mean(self.all_else.mean())),
        ]
    }

    /// Writes the four buckets as CSV rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["bucket", "samples", "mean"])?;

        for (label, stats) in [
            ("nothing_when_wall_front", &self.nothing_when_wall_front),
            ("left_when_wall_left", &self.left_when_wall_left),
            ("right_when_wall_right", &self.right_when_wall_right),
            ("all_else", &self.all_else),
        ] {
            let samples = stats.samples.to_string();
            let mean = stats.mean().map(|m| m.to_string()).unwrap_or_default();
            writer.write_record([label, samples.as_str(), mean.as_str()])?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn render_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => value.to_string(),
        None => "no samples".to_string(),
    }
}

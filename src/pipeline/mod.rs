//! Training pipeline abstractions
//!
//! This module provides the composable training loop:
//! - Running independent episodes against fresh environments
//! - Accumulating value estimates into a shared table
//! - Recording observations during training

pub mod observers;
pub mod training;

// Re-export observer implementations (adapters)
pub use observers::{
    EpisodeRecord, JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver, StepRecord,
};
pub use training::{Trainer, TrainerConfig, TrainingReport};

pub use crate::ports::Observer;

//! Tabular Q-learning for a rover on bounded obstacle grids
//!
//! This crate provides:
//! - Random obstacle grid generation with a solid border
//! - A rover with turn-then-move kinematics and three-ray distance sensing
//! - A tabular Q-learning engine driven by uniformly random exploration
//! - A training pipeline with pluggable observers
//! - Policy summaries that bucket learned values by wall situation

pub mod adapters;
pub mod cli;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod report;
pub mod rover;
pub mod sensing;
pub mod utils;

pub use error::{Error, Result};
pub use grid::{Cell, GridConfig, GridWorld};
pub use rover::{Action, Direction, Rover};
pub use sensing::SensedState;

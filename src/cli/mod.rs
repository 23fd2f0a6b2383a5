//! CLI infrastructure for the grid-world trainer
//!
//! This module provides the command-line interface for training value tables
//! and inspecting generated obstacle grids.

pub mod commands;
pub mod output;

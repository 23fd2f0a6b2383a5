//! gridq CLI - Tabular Q-learning for grid-world obstacle avoidance
//!
//! This CLI provides a unified interface for:
//! - Training a value table over randomly generated obstacle grids
//! - Inspecting the grids the trainer runs on

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridq")]
#[command(version, about = "Tabular Q-learning for grid-world obstacle avoidance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a value table on randomly generated grids
    Train(gridq::cli::commands::train::TrainArgs),

    /// Generate an obstacle grid and print it
    Map(gridq::cli::commands::map::MapArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => gridq::cli::commands::train::execute(args),
        Commands::Map(args) => gridq::cli::commands::map::execute(args),
    }
}

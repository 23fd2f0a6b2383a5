//! Map command - Generate and print an obstacle grid

use anyhow::Result;
use clap::Parser;

use crate::{adapters::GridEnvironment, grid::GridConfig, ports::Environment};

#[derive(Parser, Debug)]
#[command(about = "Generate an obstacle grid and print it")]
pub struct MapArgs {
    /// Grid width in cells, including the border
    #[arg(long, default_value_t = 10)]
    pub width: usize,

    /// Grid height in cells, including the border
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Number of obstacles scattered over the interior
    #[arg(long, short = 'o', default_value_t = 30)]
    pub obstacles: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also place a rover and draw it as a heading glyph
    #[arg(long, default_value_t = false)]
    pub rover: bool,
}

pub fn execute(args: MapArgs) -> Result<()> {
    let config = GridConfig {
        width: args.width,
        height: args.height,
        obstacles: args.obstacles,
    };

    let mut env = GridEnvironment::generate(&config, args.seed)?;

    if args.rover {
        env.reset()?;
    }

    print!("{}", env.render());

    Ok(())
}

//! Train command - Train a value table on randomly generated grids

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    adapters::GridEnvironment,
    cli::output::{format_number, print_kv, print_section},
    grid::GridConfig,
    pipeline::{
        JsonlObserver, MetricsObserver, ProgressObserver, Trainer, TrainerConfig, TrainingReport,
    },
    q_learning::{QLearningEngine, QTable},
    report::{BucketStats, PolicyBucket, PolicySummary},
};

#[derive(Debug, Serialize)]
struct TrainingStats {
    episodes: usize,
    total_steps: usize,
    average_episode_steps: f64,
    table_entries: usize,
}

impl From<&TrainingReport> for TrainingStats {
    fn from(report: &TrainingReport) -> Self {
        Self {
            episodes: report.episodes,
            total_steps: report.total_steps,
            average_episode_steps: report.average_episode_steps,
            table_entries: report.table_entries,
        }
    }
}

#[derive(Debug, Serialize)]
struct BucketRow {
    samples: usize,
    mean: Option<f64>,
}

impl From<&BucketStats> for BucketRow {
    fn from(stats: &BucketStats) -> Self {
        Self {
            samples: stats.samples(),
            mean: stats.mean(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PolicyStats {
    nothing_when_wall_front: BucketRow,
    left_when_wall_left: BucketRow,
    right_when_wall_right: BucketRow,
    all_else: BucketRow,
}

impl From<&PolicySummary> for PolicyStats {
    fn from(summary: &PolicySummary) -> Self {
        Self {
            nothing_when_wall_front: BucketRow::from(
                summary.stats(PolicyBucket::NothingWhenWallFront),
            ),
            left_when_wall_left: BucketRow::from(summary.stats(PolicyBucket::LeftWhenWallLeft)),
            right_when_wall_right: BucketRow::from(summary.stats(PolicyBucket::RightWhenWallRight)),
            all_else: BucketRow::from(summary.stats(PolicyBucket::AllElse)),
        }
    }
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: TrainingStats,
    policy: PolicyStats,
    metadata: SummaryMetadata,
}

#[derive(Debug, Serialize)]
struct SummaryMetadata {
    width: usize,
    height: usize,
    obstacles: usize,
    learning_rate: f64,
    discount: f64,
    seed: Option<u64>,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a value table on randomly generated grids")]
pub struct TrainArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

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

    /// Learning rate α (0.0-1.0)
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Discount factor γ (0.0-1.0)
    #[arg(long, default_value_t = 0.9)]
    pub discount: f64,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,

    /// Optional file for JSONL observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional path for exporting bucket averages as CSV
    #[arg(long)]
    pub export_csv: Option<PathBuf>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let grid_config = GridConfig {
        width: args.width,
        height: args.height,
        obstacles: args.obstacles,
    };
    grid_config.validate()?;

    let engine = QLearningEngine::new(args.learning_rate, args.discount)?;

    let summary_spec = args.summary.as_ref().map(|raw| {
        let sanitized = sanitize_summary_path(raw);
        let normalized = sanitized != *raw;
        (sanitized, normalized)
    });

    let trainer_config = TrainerConfig {
        episodes: args.episodes,
        seed: args.seed,
    };
    let spawn_config = trainer_config.clone();

    let mut trainer = Trainer::new(trainer_config);

    // Add progress bar observer if requested
    if args.progress {
        trainer = trainer.with_observer(Box::new(ProgressObserver::new()));
    }

    // Add metrics observer
    trainer = trainer.with_observer(Box::new(MetricsObserver::new()));

    // Add JSONL observer if requested
    if let Some(observations_path) = &args.observations {
        let jsonl_observer = JsonlObserver::new(observations_path)?;
        trainer = trainer.with_observer(Box::new(jsonl_observer));
    }

    let mut table = QTable::new();
    let report = trainer.run(&engine, &mut table, |episode| {
        GridEnvironment::generate(&grid_config, spawn_config.episode_seed(episode))
    })?;

    let policy = PolicySummary::from_table(&table);

    print_section("Training Complete");
    print_kv("Episodes", &format_number(report.episodes));
    print_kv("Total steps", &format_number(report.total_steps));
    print_kv(
        "Average steps",
        &format!("{:.2}", report.average_episode_steps),
    );
    print_kv("Table entries", &format_number(report.table_entries));

    println!();
    for line in policy.stdout_lines() {
        println!("{line}");
    }

    if let Some(csv_path) = &args.export_csv {
        policy.write_csv(csv_path)?;
        println!("\nPolicy averages written to {}", csv_path.display());
    }

    if let Some((summary_path, normalized)) = summary_spec {
        if normalized {
            println!(
                "\n⚠️  Normalizing summary path to {}",
                summary_path.display()
            );
        }

        if let Some(parent) = summary_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let summary = TrainingSummaryFile {
            training: TrainingStats::from(&report),
            policy: PolicyStats::from(&policy),
            metadata: SummaryMetadata {
                width: args.width,
                height: args.height,
                obstacles: args.obstacles,
                learning_rate: args.learning_rate,
                discount: args.discount,
                seed: args.seed,
            },
        };

        let file = File::create(&summary_path)?;
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", summary_path.display());
    }

    Ok(())
}

use clap::Parser;
use gridq::cli::commands::train::{TrainArgs, execute};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> TrainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TrainArgs::parse_from(args)
}

#[test]
fn summary_without_extension_appends_json() {
    let tmp = tempdir().unwrap();
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "gridq-train",
        "--episodes",
        "5",
        "--seed",
        "11",
        "--summary",
        summary_stem.to_str().unwrap(),
    ]);

    execute(args).expect("training with summary should succeed");

    let expected_path = summary_stem.with_extension("json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["training"]["episodes"], 5);
    assert_eq!(parsed["metadata"]["seed"], 11);
    assert_eq!(parsed["metadata"]["obstacles"], 30);
}

#[test]
fn summary_directory_argument_creates_default_file() {
    let tmp = tempdir().unwrap();
    let summary_dir = tmp.path().join("summaries");
    let summary_arg = format!("{}/", summary_dir.display());

    let args = parse_args([
        "gridq-train",
        "--episodes",
        "3",
        "--seed",
        "7",
        "--summary",
        &summary_arg,
    ]);

    execute(args).expect("training with directory summary should succeed");

    let expected_path = summary_dir.join("training_summary.json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["training"]["episodes"], 3);
}

#[test]
fn csv_export_writes_four_bucket_rows() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("policy.csv");

    let args = parse_args([
        "gridq-train",
        "--episodes",
        "10",
        "--seed",
        "3",
        "--export-csv",
        csv_path.to_str().unwrap(),
    ]);

    execute(args).expect("training with CSV export should succeed");

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "bucket,samples,mean");
    assert!(lines[1].starts_with("nothing_when_wall_front,"));
    assert!(lines[4].starts_with("all_else,"));
}

#[test]
fn observations_written_one_line_per_episode() {
    let tmp = tempdir().unwrap();
    let observations_path = tmp.path().join("episodes.jsonl");

    let args = parse_args([
        "gridq-train",
        "--episodes",
        "4",
        "--seed",
        "19",
        "--observations",
        observations_path.to_str().unwrap(),
    ]);

    execute(args).expect("training with observations should succeed");

    let contents = std::fs::read_to_string(&observations_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["episode"], 0);
    assert!(first["total_steps"].as_u64().unwrap() >= 1);
    assert_eq!(
        first["steps"].as_array().unwrap().len(),
        first["total_steps"].as_u64().unwrap() as usize
    );
}

use crate::common::command::{run_sqldiff_command, stdout_of, versions_dir};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;
use serde_json::Value;

fn ids_of(lines: &Value) -> Vec<String> {
    lines
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|line| line["id"].as_str().expect("expected a string id").to_string())
        .collect()
}

#[rstest]
fn saved_baseline_carries_ids_into_the_next_diff(
    versions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_sqldiff_command(
        versions_dir.path(),
        &["diff", "v1.sql", "--save-baseline", "baseline.json"],
    )
    .assert()
    .success();

    let first_baseline: Value = serde_json::from_str(&read_file(
        &versions_dir.path().join("baseline.json"),
    ))?;
    let first_ids = ids_of(&first_baseline);
    assert_eq!(first_ids.len(), 3);

    let output = stdout_of(&mut run_sqldiff_command(
        versions_dir.path(),
        &[
            "diff",
            "v2.sql",
            "--baseline",
            "baseline.json",
            "--format",
            "json",
            "--save-baseline",
            "baseline.json",
        ],
    ))?;
    let line_diff: Value = serde_json::from_str(&output)?;

    let statuses = line_diff["display_lines"]
        .as_array()
        .expect("expected display lines")
        .iter()
        .map(|row| row["status"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(statuses, vec!["unchanged", "unchanged", "modified", "added"]);

    // unchanged and modified rows keep the ids of the first run
    let second_ids = ids_of(&line_diff["next_previous"]);
    pretty_assertions::assert_eq!(&second_ids[..3], &first_ids[..]);
    assert!(!first_ids.contains(&second_ids[3]));

    let second_baseline: Value = serde_json::from_str(&read_file(
        &versions_dir.path().join("baseline.json"),
    ))?;
    pretty_assertions::assert_eq!(second_baseline, line_diff["next_previous"]);

    Ok(())
}

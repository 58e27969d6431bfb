use crate::common::command::{run_sqldiff_command, stdout_of, versions_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("added", "+ LIMIT 10\n")]
#[case("modified,added", "~ WHERE x = 2\n+ LIMIT 10\n")]
#[case("same", "  SELECT a\n  FROM t\n")]
fn print_only_rows_with_selected_statuses(
    versions_dir: TempDir,
    #[case] filter: &str,
    #[case] expected_rows: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = format!("{expected_rows}2 unchanged, 1 added, 0 removed, 1 modified\n");

    let actual_output = stdout_of(&mut run_sqldiff_command(
        versions_dir.path(),
        &["diff", "v2.sql", "--previous", "v1.sql", "--only", filter],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_ids_of_rows(versions_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_sqldiff_command(
        versions_dir.path(),
        &["diff", "v2.sql", "--previous", "v1.sql", "--ids"],
    ))?;

    let rows = actual_output.lines().take(4).collect::<Vec<_>>();
    assert!(rows[0].starts_with("  [sql-line-") && rows[0].ends_with("] SELECT a"));
    assert!(rows[2].starts_with("~ [sql-line-") && rows[2].ends_with("] WHERE x = 2"));
    assert!(rows[3].starts_with("+ [sql-line-") && rows[3].ends_with("] LIMIT 10"));

    Ok(())
}

#[rstest]
fn json_output_lists_only_selected_rows(
    versions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = stdout_of(&mut run_sqldiff_command(
        versions_dir.path(),
        &[
            "diff", "v2.sql", "--previous", "v1.sql", "--format", "json", "--only", "added",
        ],
    ))?;
    let line_diff: serde_json::Value = serde_json::from_str(&output)?;

    let rows = line_diff["display_lines"]
        .as_array()
        .expect("expected display lines");
    pretty_assertions::assert_eq!(rows.len(), 1);
    pretty_assertions::assert_eq!(rows[0]["content"], "LIMIT 10");
    pretty_assertions::assert_eq!(
        line_diff["next_previous"]
            .as_array()
            .expect("expected next baseline")
            .len(),
        4
    );

    Ok(())
}

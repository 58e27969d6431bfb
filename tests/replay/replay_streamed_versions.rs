use crate::common::command::{run_sqldiff_command, stdout_of, workspace_dir};
use crate::common::file::write_version;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn replay_a_statement_growing_chunk_by_chunk(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_version(workspace_dir.path(), "1.sql", "SELECT id, na");
    write_version(workspace_dir.path(), "2.sql", "SELECT id, name\nFROM users");
    write_version(
        workspace_dir.path(),
        "3.sql",
        "SELECT id, name\nFROM users\nWHERE active = true",
    );

    let expected_output = [
        "@@ step 1: 1.sql @@",
        "+ SELECT id, na",
        "0 unchanged, 1 added, 0 removed, 0 modified",
        "@@ step 2: 2.sql @@",
        "~ SELECT id, name",
        "+ FROM users",
        "0 unchanged, 1 added, 0 removed, 1 modified",
        "@@ step 3: 3.sql @@",
        "  SELECT id, name",
        "  FROM users",
        "+ WHERE active = true",
        "2 unchanged, 1 added, 0 removed, 0 modified",
        "",
    ]
    .join("\n");

    let actual_output = stdout_of(&mut run_sqldiff_command(
        workspace_dir.path(),
        &["replay", "1.sql", "2.sql", "3.sql"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn replay_keeps_ids_of_untouched_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_version(workspace_dir.path(), "1.sql", "SELECT *\nFROM orders");
    write_version(workspace_dir.path(), "2.sql", "SELECT *\nFROM orders\nLIMIT 5");

    let actual_output = stdout_of(&mut run_sqldiff_command(
        workspace_dir.path(),
        &["replay", "1.sql", "2.sql", "--ids"],
    ))?;

    let id_of = |row: &str| -> String {
        row.split(['[', ']']).nth(1).unwrap_or_default().to_string()
    };
    let rows = actual_output.lines().collect::<Vec<_>>();
    // step 1 rows sit at 1..=2, step 2 rows at 5..=7
    pretty_assertions::assert_eq!(id_of(rows[1]), id_of(rows[5]));
    pretty_assertions::assert_eq!(id_of(rows[2]), id_of(rows[6]));
    assert!(rows[7].starts_with("+ [") && rows[7].ends_with("] LIMIT 5"));

    Ok(())
}

#[rstest]
fn replay_removes_lines_dropped_by_a_later_version(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_version(workspace_dir.path(), "1.sql", "SELECT *\nFROM orders\nLIMIT 5");
    write_version(workspace_dir.path(), "2.sql", "SELECT *\nFROM orders");

    run_sqldiff_command(
        workspace_dir.path(),
        &["replay", "1.sql", "2.sql", "--only", "removed"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("- LIMIT 5\n2 unchanged, 0 added, 1 removed, 0 modified"));

    Ok(())
}

#[rstest]
fn replay_requires_versions(workspace_dir: TempDir) {
    run_sqldiff_command(workspace_dir.path(), &["replay"])
        .assert()
        .failure();
}

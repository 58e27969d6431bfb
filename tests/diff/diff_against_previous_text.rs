use crate::common::command::{run_sqldiff_command, stdout_of, versions_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_modified_and_added_lines_against_previous_text(
    versions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output =
        "  SELECT a\n  FROM t\n~ WHERE x = 2\n+ LIMIT 10\n2 unchanged, 1 added, 0 removed, 1 modified\n"
            .to_string();

    let actual_output = stdout_of(&mut run_sqldiff_command(
        versions_dir.path(),
        &["diff", "v2.sql", "--previous", "v1.sql"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_removed_and_added_lines_for_unrelated_statements(
    versions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(versions_dir.path().join("v3.sql"), "DROP TABLE users")?;
    std::fs::write(versions_dir.path().join("v4.sql"), "SELECT 1")?;

    let expected_output =
        "- SELECT 1\n+ DROP TABLE users\n0 unchanged, 1 added, 1 removed, 0 modified\n".to_string();

    let actual_output = stdout_of(&mut run_sqldiff_command(
        versions_dir.path(),
        &["diff", "v3.sql", "--previous", "v4.sql"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn identical_versions_are_unchanged(
    versions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output =
        "  SELECT a\n  FROM t\n  WHERE x = 1\n3 unchanged, 0 added, 0 removed, 0 modified\n"
            .to_string();

    let actual_output = stdout_of(&mut run_sqldiff_command(
        versions_dir.path(),
        &["diff", "v1.sql", "--previous", "v1.sql"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bita(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bita").unwrap();
    cmd.env("BITACORA_DATA_DIR", data_dir);
    cmd
}

#[test]
fn add_then_list_then_filter() {
    let dir = TempDir::new().unwrap();

    bita(dir.path())
        .args(["add", "Matrix", "--rating", "9", "--notes", "rewatch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged: Matrix (Film)"));

    bita(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries (1)"))
        .stdout(predicate::str::contains("Matrix"));

    bita(dir.path())
        .args(["list", "--search", "blade"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));

    // No subcommand defaults to list.
    bita(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrix"));
}

#[test]
fn blank_title_is_rejected_without_changing_anything() {
    let dir = TempDir::new().unwrap();

    bita(dir.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title is required."));

    bita(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn series_entries_carry_season_and_episode() {
    let dir = TempDir::new().unwrap();

    bita(dir.path())
        .args([
            "add", "Okupas", "--category", "series", "--season", "1", "--episode", "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged: Okupas (Series)"));

    bita(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(T1 E4)"));

    let raw = fs::read_to_string(dir.path().join("entries")).unwrap();
    assert!(raw.contains("\"season\":\"1\""));
    assert!(raw.contains("\"episode\":\"4\""));

    // Films never carry the fields.
    bita(dir.path()).args(["add", "Matrix"]).assert().success();
    let raw = fs::read_to_string(dir.path().join("entries")).unwrap();
    assert_eq!(raw.matches("season").count(), 1);
}

#[test]
fn edit_replaces_fields_in_place() {
    let dir = TempDir::new().unwrap();

    bita(dir.path()).args(["add", "Matrix"]).assert().success();
    bita(dir.path())
        .args(["edit", "1", "--title", "Matrix Reloaded", "--rating", "6.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: Matrix Reloaded"));

    bita(dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrix Reloaded"))
        .stdout(predicate::str::contains("Rating: 6.5/10"));
}

#[test]
fn delete_asks_and_honors_the_answer() {
    let dir = TempDir::new().unwrap();

    bita(dir.path()).args(["add", "Matrix"]).assert().success();

    // Empty stdin reads as a decline.
    bita(dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted."));
    bita(dir.path())
        .args(["list"])
        .assert()
        .stdout(predicate::str::contains("Matrix"));

    bita(dir.path())
        .args(["rm", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Matrix"));
    bita(dir.path())
        .args(["list"])
        .assert()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn delete_with_yes_skips_the_prompt() {
    let dir = TempDir::new().unwrap();

    bita(dir.path()).args(["add", "Matrix"]).assert().success();
    bita(dir.path())
        .args(["rm", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Matrix"));
}

#[test]
fn bad_index_reports_an_error() {
    let dir = TempDir::new().unwrap();

    bita(dir.path())
        .args(["view", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry at index 3"));
}

#[test]
fn suggest_matches_the_catalog() {
    let dir = TempDir::new().unwrap();

    bita(dir.path())
        .args(["suggest", "vo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Volver al Futuro"));

    bita(dir.path())
        .args(["suggest", "v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions."));
}

#[test]
fn theme_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    bita(dir.path())
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    bita(dir.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    bita(dir.path())
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    assert_eq!(
        fs::read_to_string(dir.path().join("theme")).unwrap(),
        "light"
    );
}

#[test]
fn corrupted_entry_data_recovers_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("entries"), "{definitely not json").unwrap();

    bita(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));

    // And the journal is usable again afterwards.
    bita(dir.path()).args(["add", "Matrix"]).assert().success();
    bita(dir.path())
        .args(["list"])
        .assert()
        .stdout(predicate::str::contains("Entries (1)"));
}

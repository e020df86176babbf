use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run poorbox with a clean environment.
fn poorbox() -> Command {
    let mut cmd = cargo_bin_cmd!("poorbox");
    cmd.env_remove("POORBOX_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn status_shows_defaults() {
    let dir = assert_fs::TempDir::new().unwrap();

    poorbox()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("localhost:5432"))
        .stdout(predicate::str::contains("(defaults and flags)"))
        .stdout(predicate::str::contains("./pg-secret"))
        .stdout(predicate::str::contains("./tmdb-secret"));
}

#[test]
fn status_reports_missing_and_short_files_without_failing() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("pg-secret").write_str("onlyoneline\n").unwrap();

    poorbox()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("too short (1 of 2 line(s))"))
        .stdout(predicate::str::contains("cannot open"));
}

#[test]
fn status_reports_loaded_files_without_values() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("pg-secret").write_str("alice\nsecret123\n").unwrap();
    dir.child("tmdb-secret").write_str("key-abc-123").unwrap();

    poorbox()
        .current_dir(dir.path())
        .args(["status", "-e", "db.internal:6432"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db.internal:6432"))
        .stdout(predicate::str::contains("2 field(s)"))
        .stdout(predicate::str::contains("1 field(s)"))
        .stdout(predicate::str::contains("alice").not())
        .stdout(predicate::str::contains("key-abc-123").not());
}

#[test]
fn no_subcommand_prints_usage() {
    poorbox()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

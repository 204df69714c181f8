//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn trio() -> Command {
    let mut cmd = Command::cargo_bin("trio").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("TRIO_BOOKING_DATABASE_URL")
        .env_remove("TRIO_TODO_DATABASE_URL")
        .env_remove("TRIO_TRIVIA_DATABASE_URL")
        .env_remove("TRIO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    trio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    trio()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn test_serve_rejects_unknown_service() {
    trio()
        .args(["serve", "music"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completions_bash() {
    trio()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trio"));
}

#[test]
fn test_config_path_honours_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trio.toml");

    trio()
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trio.toml"));
}

#[test]
fn test_config_show_merges_file_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[trivia]\nbind = \"0.0.0.0:8080\"\ndatabase_url = \"sqlite://quiz.db\"\n",
    )
    .unwrap();

    trio()
        .arg("--config")
        .arg(&path)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8080"))
        .stdout(predicate::str::contains("sqlite://quiz.db"))
        .stdout(predicate::str::contains("127.0.0.1:5000"))
        .stdout(predicate::str::contains("sqlite://trio-todo.db"));
}

#[test]
fn test_config_show_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[todo]\ndatabase_url = \"sqlite://file.db\"\n").unwrap();

    trio()
        .arg("--config")
        .arg(&path)
        .env("TRIO_TODO_DATABASE_URL", "sqlite://env.db")
        .args(["config", "show", "--service", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sqlite://env.db"))
        .stdout(predicate::str::contains("file.db").not())
        .stdout(predicate::str::contains("booking").not());
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    trio()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_migrate_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trivia.db");
    let url = format!("sqlite://{}", db.display());

    trio()
        .current_dir(dir.path())
        .args(["migrate", "trivia", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated trivia database"));

    assert!(db.exists());
}

//! Smoke tests to verify command wiring and configuration failures

use assert_cmd::Command;
use predicates::prelude::*;

/// `catalog` with the configuration environment cleared, run away from any `.env`.
fn catalog() -> Command {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.current_dir(std::env::temp_dir())
        .env_remove("DATABASE_URL")
        .env_remove("DB_URL")
        .env_remove("JWT_SECRET")
        .env_remove("HOST")
        .env_remove("PORT");
    cmd
}

#[test]
fn test_help_lists_commands() {
    catalog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    catalog()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signing secret"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_requires_secret() {
    catalog()
        .args(["serve", "--database-url", "postgres://127.0.0.1:1/catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--jwt-secret"));
}

#[test]
fn test_serve_rejects_empty_secret() {
    catalog()
        .args([
            "serve",
            "--database-url",
            "postgres://127.0.0.1:1/catalog",
            "--jwt-secret",
            "",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JWT_SECRET must not be empty"));
}

#[test]
fn test_serve_rejects_bad_port() {
    catalog()
        .args(["serve", "--jwt-secret", "s", "--port", "http"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn test_init_db_requires_database_url() {
    catalog()
        .arg("init-db")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

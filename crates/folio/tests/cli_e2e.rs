#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PASSWORD: &str = "s3cret";

fn folio_cmd(site: &Path, mode: &str) -> Command {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.env("FOLIO_SESSION_DIR", site.join("session"))
        .env("FOLIO_MODE", mode)
        .env("FOLIO_ADMIN_PASSWORD", PASSWORD)
        .env("NO_COLOR", "1")
        .env_remove("FOLIO_CONTENT")
        .env_remove("FOLIO_OUTBOX")
        .env_remove("FOLIO_LOG")
        .arg("--root")
        .arg(site);
    cmd
}

fn content_file(site: &Path) -> std::path::PathBuf {
    site.join("data").join("portfolio.json")
}

#[test]
fn test_init_writes_starter_content_once() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "production")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created starter content"));
    assert!(content_file(site).exists());

    folio_cmd(site, "production")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content already exists"));

    folio_cmd(site, "production")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Name"));
}

#[test]
fn test_editing_requires_login() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "development")
        .args(["login", "wrong"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Incorrect password"));

    folio_cmd(site, "development")
        .args(["set", "name", "Ada"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_edits_survive_between_invocations_until_discarded() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "development").arg("init").assert().success();
    folio_cmd(site, "development")
        .args(["login", PASSWORD])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    folio_cmd(site, "development")
        .args(["set", "name", "Ada"])
        .assert()
        .success();
    folio_cmd(site, "development")
        .args(["language", "add", "Go"])
        .assert()
        .success();

    folio_cmd(site, "development")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("State:    dirty"))
        .stdout(predicate::str::contains("header"))
        .stdout(predicate::str::contains("resume"));

    folio_cmd(site, "development")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("2. Go"));

    folio_cmd(site, "development")
        .arg("discard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes"));

    folio_cmd(site, "development")
        .args(["discard", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes discarded"));

    folio_cmd(site, "development")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("State:    clean"));
}

#[test]
fn test_save_is_refused_in_production() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "production").arg("init").assert().success();
    let before = fs::read_to_string(content_file(site)).unwrap();

    folio_cmd(site, "production")
        .args(["login", PASSWORD])
        .assert()
        .success();
    folio_cmd(site, "production")
        .args(["set", "about", "Changed"])
        .assert()
        .success();

    folio_cmd(site, "production")
        .arg("save")
        .assert()
        .failure()
        .stdout(predicate::str::contains("development mode"));

    assert_eq!(fs::read_to_string(content_file(site)).unwrap(), before);

    // Still dirty: the edit was not lost.
    folio_cmd(site, "production")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("State:    dirty"));
}

#[test]
fn test_save_in_development_writes_content() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "development").arg("init").assert().success();
    folio_cmd(site, "development")
        .args(["login", PASSWORD])
        .assert()
        .success();
    folio_cmd(site, "development")
        .args(["project", "add", "--title", "Compiler"])
        .assert()
        .success();
    folio_cmd(site, "development")
        .args(["project", "edit", "#1", "--title", "Renamed"])
        .assert()
        .success();

    folio_cmd(site, "development")
        .arg("save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes saved"));

    let saved = fs::read_to_string(content_file(site)).unwrap();
    assert!(saved.contains("\"Compiler\""));
    assert!(saved.contains("\"Renamed\""));

    folio_cmd(site, "development")
        .arg("save")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to save"));
}

#[test]
fn test_logout_drops_the_draft() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "development").arg("init").assert().success();
    folio_cmd(site, "development")
        .args(["login", PASSWORD])
        .assert()
        .success();
    folio_cmd(site, "development")
        .args(["flag", "dark-mode", "on"])
        .assert()
        .success();
    assert!(site.join("session").join("draft.json").exists());

    folio_cmd(site, "development")
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsaved changes were dropped"));
    assert!(!site.join("session").join("draft.json").exists());

    folio_cmd(site, "development")
        .args(["flag", "dark-mode", "off"])
        .assert()
        .failure();
}

#[test]
fn test_contact_spools_message() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "production")
        .args([
            "contact",
            "--name",
            "Grace",
            "--email",
            "grace@example.com",
            "--subject",
            "Hello there",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your message has been sent"));

    let outbox = site.join(".folio").join("outbox");
    let spooled: Vec<_> = fs::read_dir(&outbox).unwrap().collect();
    assert_eq!(spooled.len(), 1);
}

#[test]
fn test_contact_rejects_missing_reply_channel() {
    let temp = TempDir::new().unwrap();
    let site = temp.path();

    folio_cmd(site, "production")
        .args(["contact", "--name", "Grace", "--subject", "Hello"])
        .assert()
        .failure();
    assert!(!site.join(".folio").join("outbox").exists());
}

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("bizcard").unwrap()
}

fn write_fragments(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("card.txt");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

const CARD: &[&str] = &[
    "Jane Doe",
    "Manager",
    "Acme Corp",
    "+1-555-123-4567",
    "jane@acme.com",
    "www.acme.com",
    "Chennai, Tamil Nadu 600042",
];

#[test]
fn extract_renders_all_nine_fields() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);

    cmd()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("ACME CORP"))
        .stdout(contains("Tamil Nadu"))
        .stdout(contains("600042"))
        .stdout(contains("NA")); // address was never assigned
}

#[test]
fn extract_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);

    cmd()
        .args(["extract", "--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("\"email\": \"jane@acme.com\""))
        .stdout(contains("\"website\": \"www.acme.com\""));
}

#[test]
fn extract_warns_on_single_fragment() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), &["Jane Doe"]);

    cmd()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stderr(contains("designation"));
}

#[test]
fn save_then_list_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);
    let db = dir.path().join("bizcard.db");

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["extract", "--save"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("saved as record 1"));

    cmd()
        .args(["--db"])
        .arg(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("#1"))
        .stdout(contains("Jane Doe"));
}

#[test]
fn duplicate_save_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);
    let db = dir.path().join("bizcard.db");

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["extract", "--save"])
        .arg(&input)
        .assert()
        .success();

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["extract", "--save"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("duplicate record"));
}

#[test]
fn update_edits_single_field() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);
    let db = dir.path().join("bizcard.db");

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["extract", "--save"])
        .arg(&input)
        .assert()
        .success();

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["update", "1", "--set", "email=jane@corp.com"])
        .assert()
        .success()
        .stdout(contains("jane@corp.com"));

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("jane@corp.com"));
}

#[test]
fn update_unknown_field_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);
    let db = dir.path().join("bizcard.db");

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["extract", "--save"])
        .arg(&input)
        .assert()
        .success();

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["update", "1", "--set", "phone=12345"])
        .assert()
        .failure()
        .stderr(contains("unknown field"));
}

#[test]
fn delete_removes_record() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);
    let db = dir.path().join("bizcard.db");

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["extract", "--save"])
        .arg(&input)
        .assert()
        .success();

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(contains("deleted record 1"));

    cmd()
        .args(["--db"])
        .arg(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("no records stored"));
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("bizcard.db");

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(contains("no record with id 7"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_fragments(dir.path(), CARD);
    let db = dir.path().join("bizcard.db");
    let out = dir.path().join("contacts.csv");

    cmd()
        .args(["--db"])
        .arg(&db)
        .args(["extract", "--save"])
        .arg(&input)
        .assert()
        .success();

    cmd()
        .args(["--db"])
        .arg(&db)
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("exported 1 records"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("id,name,designation,company_name"));
    assert!(csv.contains("Jane Doe"));
}

#[test]
fn config_init_and_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bizcard.json");

    cmd()
        .args(["--config"])
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();

    cmd()
        .args(["--config"])
        .arg(&config)
        .args(["config", "get", "database.path"])
        .assert()
        .success()
        .stdout(contains("bizcard.db"));
}

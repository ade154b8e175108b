#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn skillboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("skillboard").unwrap();
    cmd.current_dir(dir.path()).env("SKILLBOARD_ROOT", dir.path());
    cmd
}

fn init_board(dir: &TempDir) {
    skillboard(dir).arg("init").assert().success();
}

fn json_of(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.arg("--json").assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

/// Add a consultant and return its id.
fn add_consultant(dir: &TempDir, name: &str, email: &str, extra: &[&str]) -> String {
    let mut cmd = skillboard(dir);
    cmd.args(["consultant", "add", "--name", name, "--email", email])
        .args(extra);
    json_of(&mut cmd)["id"].as_str().unwrap().to_string()
}

fn set_hours(dir: &TempDir, id: &str, play: &str, hours: u32) {
    skillboard(dir)
        .args(["consultant", "set-play", id, play, "--hours", &hours.to_string()])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// skillboard init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_board_files() {
    let dir = TempDir::new().unwrap();
    skillboard(&dir).arg("init").assert().success();

    assert!(dir.path().join(".skillboard").is_dir());
    assert!(dir.path().join(".skillboard/config.yaml").exists());
    let raw = std::fs::read_to_string(dir.path().join(".skillboard/consultants.json")).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    skillboard(&dir).arg("init").assert().success();
    skillboard(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:"));
}

#[test]
fn add_before_init_fails() {
    let dir = TempDir::new().unwrap();
    skillboard(&dir)
        .args(["consultant", "add", "--name", "Ada", "--email", "ada@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("skillboard init"));
}

// ---------------------------------------------------------------------------
// skillboard consultant
// ---------------------------------------------------------------------------

#[test]
fn consultant_add_and_list() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    add_consultant(&dir, "Ada Lovelace", "ada@example.com", &["--region", "EMEA"]);

    skillboard(&dir)
        .args(["consultant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("EMEA"));
}

#[test]
fn consultant_add_rejects_bad_email() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    skillboard(&dir)
        .args(["consultant", "add", "--name", "Ada", "--email", "ada-at-example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email"));
}

#[test]
fn consultant_add_rejects_unknown_region() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    skillboard(&dir)
        .args([
            "consultant", "add", "--name", "Ada", "--email", "ada@example.com", "--region",
            "Antarctica",
        ])
        .assert()
        .failure();
}

#[test]
fn set_play_accepts_slug_and_shows_tier() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let id = add_consultant(&dir, "Ada Lovelace", "ada@example.com", &[]);

    skillboard(&dir)
        .args(["consultant", "set-play", &id, "innovate-with-azure", "--hours", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leader"));

    let shown = json_of(skillboard(&dir).args(["consultant", "show", &id]));
    assert_eq!(
        shown["consultant"]["solutionPlays"]["Innovate with Azure"]["hoursDelivered"],
        600
    );
    assert_eq!(shown["totals"]["hours"], 600);
    assert_eq!(shown["summary"]["initials"], "AL");
}

#[test]
fn edit_changes_contact_and_keeps_id() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let id = add_consultant(&dir, "Ada", "ada@example.com", &[]);

    let edited = json_of(skillboard(&dir).args([
        "consultant", "edit", &id, "--name", "Ada King", "--industry", "Banking",
    ]));
    assert_eq!(edited["id"], id.as_str());
    assert_eq!(edited["name"], "Ada King");
    assert_eq!(edited["industries"], serde_json::json!(["Banking"]));
}

#[test]
fn delete_removes_consultant() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let id = add_consultant(&dir, "Ada", "ada@example.com", &[]);

    skillboard(&dir)
        .args(["consultant", "delete", &id])
        .assert()
        .success();
    skillboard(&dir)
        .args(["consultant", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("consultant not found"));
}

#[test]
fn list_filters_by_query_and_facets() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let ada = add_consultant(&dir, "Ada Lovelace", "ada@example.com", &["--region", "EMEA"]);
    add_consultant(&dir, "Grace Hopper", "grace@example.com", &["--region", "Americas"]);
    set_hours(&dir, &ada, "data-security", 120);

    let by_region = json_of(skillboard(&dir).args(["consultant", "list", "--region", "EMEA"]));
    assert_eq!(by_region.as_array().unwrap().len(), 1);
    assert_eq!(by_region[0]["name"], "Ada Lovelace");

    let by_query = json_of(skillboard(&dir).args(["consultant", "list", "-q", "GRACE"]));
    assert_eq!(by_query[0]["name"], "Grace Hopper");

    let by_area = json_of(skillboard(&dir).args(["consultant", "list", "--area", "security"]));
    assert_eq!(by_area.as_array().unwrap().len(), 1);

    let all = json_of(skillboard(&dir).args(["consultant", "list"]));
    assert_eq!(all.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn overview_counts_leaders() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let a = add_consultant(&dir, "A", "a@example.com", &[]);
    let b = add_consultant(&dir, "B", "b@example.com", &[]);
    set_hours(&dir, &a, "innovate-with-azure", 600);
    set_hours(&dir, &b, "innovate-with-azure", 250);

    let overview = json_of(skillboard(&dir).arg("overview"));
    assert_eq!(overview["total_consultants"], 2);
    assert_eq!(overview["total_hours"], 850);
    assert_eq!(overview["leader_count"], 1);
}

#[test]
fn analytics_orders_by_hours() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let b = add_consultant(&dir, "B", "b@example.com", &[]);
    let a = add_consultant(&dir, "A", "a@example.com", &[]);
    add_consultant(&dir, "C", "c@example.com", &[]);
    set_hours(&dir, &b, "Innovate with Azure", 250);
    set_hours(&dir, &a, "Innovate with Azure", 600);

    let analytics = json_of(skillboard(&dir).args(["analytics", "--play", "innovate-with-azure"]));
    assert_eq!(analytics["qualified_count"], 2);
    assert_eq!(analytics["qualified"][0]["name"], "A");
    assert_eq!(analytics["qualified"][1]["name"], "B");
    assert_eq!(analytics["distribution"]["leader"], 1);
    assert_eq!(analytics["distribution"]["contributor"], 1);
    assert_eq!(analytics["distribution"]["apprentice"], 0);
}

#[test]
fn analytics_defaults_to_configured_play() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    skillboard(&dir)
        .arg("analytics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrate and Modernize"));
}

#[test]
fn capabilities_reports_missing_plays() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let a = add_consultant(&dir, "A", "a@example.com", &[]);
    set_hours(&dir, &a, "data-security", 40);

    let assessment = json_of(skillboard(&dir).arg("capabilities"));
    let plays = assessment["plays"].as_array().unwrap();
    assert_eq!(plays.len(), 17);
    let data_security = plays
        .iter()
        .find(|p| p["play"] == "Data Security")
        .unwrap();
    assert_eq!(data_security["coverage"], 100.0);
    assert_eq!(data_security["status"], "strong");

    skillboard(&dir)
        .args(["capabilities", "--play", "data-security"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apprentice (1)"));
}

#[test]
fn matrix_has_a_cell_per_play() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    add_consultant(&dir, "A", "a@example.com", &[]);

    let matrix = json_of(skillboard(&dir).arg("matrix"));
    assert_eq!(matrix[0]["cells"].as_array().unwrap().len(), 17);
}

#[test]
fn catalog_lists_areas() {
    let dir = TempDir::new().unwrap();
    skillboard(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Business Solutions"))
        .stdout(predicate::str::contains("Cloud & AI Platforms"))
        .stdout(predicate::str::contains("Security"));
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[test]
fn submission_add_list_delete() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    skillboard(&dir)
        .args([
            "submission", "add", "--member", "Ada", "--area", "security", "--play",
            "data-security", "--range", "101-500", "--hours", "150",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("S1"));

    let list = json_of(skillboard(&dir).args(["submission", "list"]));
    assert_eq!(list[0]["play"], "Data Security");
    assert_eq!(list[0]["range"], "101-500");

    skillboard(&dir)
        .args(["submission", "delete", "S1"])
        .assert()
        .success();
    skillboard(&dir)
        .args(["submission", "delete", "S1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("submission not found"));
}

#[test]
fn submission_rejects_play_outside_area() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    skillboard(&dir)
        .args([
            "submission", "add", "--member", "Ada", "--area", "security", "--play",
            "innovate-with-azure", "--range", "0-100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not part of"));
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    skillboard(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_fails_on_errors() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    std::fs::write(
        dir.path().join(".skillboard/config.yaml"),
        "board:\n  name: \"\"\n",
    )
    .unwrap();
    skillboard(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] board.name is empty"));
}

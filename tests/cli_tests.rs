//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use hotspots::testkit::document::DocumentBuilder;
use predicates::prelude::*;
use serde_json::Value;

fn hotspots() -> Command {
    let mut cmd = cargo_bin_cmd!("hotspots");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn partner_document() -> DocumentBuilder {
    DocumentBuilder::new()
        .vendor("acme", "partner")
        .vendor("rival", "partner")
        .vendor("goldco", "gold")
        .assets("acme", &["a1"])
        .assets("rival", &["b1"])
        .assets("acme", &["a2", "a3", "a4"])
        .assets("goldco", &["g1"])
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn members(report: &Value, hotspot: &str) -> Vec<String> {
    report["hotspots"][hotspot]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_help() {
    hotspots()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hotspots"))
        .stdout(predicate::str::contains("optimize"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    hotspots()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hotspots"));
}

#[test]
fn test_optimize_prints_hotspot_tables() {
    let file = support::document_file(&partner_document());

    hotspots()
        .args(["--color", "never", "optimize"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Showcase (4)"))
        .stdout(predicate::str::contains("Fold (6)"))
        .stdout(predicate::str::contains("Title a3"))
        .stdout(predicate::str::contains("partner"))
        .stdout(predicate::str::contains("showcase owner acme"))
        .stdout(predicate::str::contains("HighValue (0)"))
        .stdout(predicate::str::contains("(empty)"));
}

#[test]
fn test_optimize_human_summary_reports_preclaimed_showcase() {
    let file = support::document_file(&partner_document());

    hotspots()
        .args(["--color", "never", "optimize", "--pin", "b1"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pinned_showcase"))
        .stdout(predicate::str::contains("showcase preclaimed"))
        .stdout(predicate::str::contains("Showcase (1)"));
}

#[test]
fn test_optimize_json_report() {
    let file = support::document_file(&partner_document());

    let report = json_stdout(hotspots().arg("--json").arg("optimize").arg(file.path()));

    assert_eq!(report["command"], "optimize");
    assert_eq!(report["policy"], "corrected");
    assert_eq!(report["found"], 6);
    assert_eq!(members(&report, "Showcase"), ["a1", "a2", "a3", "a4"]);
    assert_eq!(
        members(&report, "Fold"),
        ["a1", "a2", "a3", "a4", "b1", "g1"]
    );
    assert!(members(&report, "HighValue").is_empty());
    assert_eq!(report["rules"][0]["rule"], "relationship");
    assert_eq!(report["rules"][0]["showcase_owner"], "acme");
}

#[test]
fn test_optimize_policy_flag_overrides_config() {
    let file = support::document_file(&partner_document());

    let report = json_stdout(
        hotspots()
            .args(["--json", "optimize", "--policy", "compatible"])
            .arg(file.path()),
    );

    assert_eq!(report["policy"], "compatible");
    assert_eq!(
        members(&report, "Showcase"),
        ["a1", "a2", "a3", "a4", "a4"]
    );
}

#[test]
fn test_optimize_pins_take_the_showcase() {
    let file = support::document_file(&partner_document());

    let report = json_stdout(
        hotspots()
            .args(["--json", "optimize", "--pin", "g1", "--pin", "b1"])
            .arg(file.path()),
    );

    assert_eq!(members(&report, "Showcase"), ["g1", "b1"]);
    assert_eq!(report["rules"][0]["rule"], "pinned_showcase");
    assert_eq!(report["rules"][1]["showcase_preclaimed"], true);
}

#[test]
fn test_optimize_honors_config_file() {
    let doc = support::document_file(
        &DocumentBuilder::new()
            .vendor("acme", "partner")
            .assets("acme", &["a1", "a2"]),
    );
    let config = support::config_file("[optimizer.relationship]\nshowcase_threshold = 2\n");

    let report = json_stdout(
        hotspots()
            .args(["--json", "optimize", "-c"])
            .arg(config.path())
            .arg(doc.path()),
    );

    assert_eq!(members(&report, "Showcase"), ["a1", "a2"]);
}

#[test]
fn test_optimize_preplaced_showcase_is_kept() {
    let file = support::document_file(
        &DocumentBuilder::new()
            .vendor("acme", "partner")
            .assets("acme", &["a1", "a2", "a3"])
            .showcase("a2"),
    );

    let report = json_stdout(hotspots().args(["--json", "optimize"]).arg(file.path()));

    assert_eq!(members(&report, "Showcase"), ["a2"]);
}

#[test]
fn test_optimize_rejects_unknown_vendor() {
    let file = support::document_file(&DocumentBuilder::new().assets("ghost", &["a1"]));

    hotspots()
        .arg("optimize")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown vendor 'ghost'"));
}

#[test]
fn test_optimize_missing_file_fails() {
    hotspots()
        .args(["optimize", "/nonexistent/results.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_optimize_quiet_prints_nothing() {
    let file = support::document_file(&partner_document());

    hotspots()
        .args(["--quiet", "optimize"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_show_defaults_json() {
    let report = json_stdout(hotspots().args(["--json", "config", "show"]));

    assert_eq!(report["command"], "config.show");
    assert_eq!(report["config"]["optimizer"]["relationship"]["showcase_threshold"], 3);
    assert_eq!(report["config"]["logging"]["format"], "pretty");
}

#[test]
fn test_config_show_human() {
    hotspots()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Threshold"))
        .stdout(predicate::str::contains("corrected"));
}

#[test]
fn test_config_validate_accepts_example() {
    hotspots()
        .args(["config", "validate", "-c"])
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_rejects_bad_capacity() {
    let config = support::config_file(
        "[optimizer.relationship]\nshowcase_threshold = 4\nshowcase_capacity = 2\n",
    );

    hotspots()
        .args(["config", "validate", "-c"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("showcase_capacity"));
}

#[test]
fn test_json_mode_errors_are_structured() {
    hotspots()
        .args(["--json", "optimize", "/nonexistent/results.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"type\":\"error\""));
}

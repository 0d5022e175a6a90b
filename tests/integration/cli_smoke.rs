use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::fixture_path;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_northwind_reports"))
}

#[test]
fn shows_help() {
    bin().arg("--help").assert().success().stdout(predicate::str::contains("northwind_reports"));
}

#[test]
fn prints_supplier_country_summary() {
    bin()
        .arg("--data")
        .arg(fixture_path())
        .args(["--query", "supplier-countries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UKUSASpain"));
}

#[test]
fn json_output_is_a_report_document() {
    let output = bin()
        .arg("--data")
        .arg(fixture_path())
        .args(["--format", "json", "--query", "city-profiles,price-tiers"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["reports"][0]["query"], "city-profiles");
    assert_eq!(document["reports"][1]["query"], "price-tiers");
}

#[test]
fn verbose_run_logs_to_stderr() {
    bin()
        .arg("--data")
        .arg(fixture_path())
        .args(["-vv", "--query", "price-tiers"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[info] loaded catalog: 6 customers"))
        .stderr(predicate::str::contains("[warn] 1 product(s) priced outside every tier"));
}

#[test]
fn missing_catalog_fails() {
    bin()
        .args(["--data", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn unknown_query_is_a_usage_error() {
    bin()
        .arg("--data")
        .arg(fixture_path())
        .args(["--query", "linq42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown query 'linq42'"));
}

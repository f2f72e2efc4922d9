//! Binary-level tests for the wf CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn plan_args() -> Vec<&'static str> {
    vec![
        "plan",
        "--from",
        "Paris",
        "--to",
        "Tokyo",
        "--start",
        "2025-06-01",
        "--end",
        "2025-06-05",
        "--budget",
        "2000",
        "--currency",
        "EUR",
        "--travelers",
        "2",
    ]
}

#[test]
fn test_reversed_dates_fail_validation() {
    let mut cmd = Command::cargo_bin("wf").unwrap();
    cmd.args([
        "plan", "--from", "Paris", "--to", "Tokyo", "--start", "2025-06-10", "--end",
        "2025-06-05", "--budget", "2000",
    ])
    .env("GEMINI_API_KEY", "test-key");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("End date cannot be before start date"));
}

#[test]
fn test_blank_origin_fails_validation() {
    let mut cmd = Command::cargo_bin("wf").unwrap();
    cmd.args([
        "plan", "--from", " ", "--to", "Tokyo", "--start", "2025-06-01", "--end", "2025-06-05",
        "--budget", "2000",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Origin location is required"));
}

#[test]
fn test_missing_generation_credential_is_reported() {
    let mut cmd = Command::cargo_bin("wf").unwrap();
    cmd.args(plan_args()).env("GEMINI_API_KEY", "");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("generation API key is not configured"));
}

#[test]
fn test_plan_prints_itinerary() {
    let mut cmd = Command::cargo_bin("wf").unwrap();
    cmd.args(plan_args()).env("GEMINI_API_KEY", "test-key");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# Travel Plan: Paris to Tokyo"))
        .stdout(predicate::str::contains("**Duration**: 4 days"))
        .stdout(predicate::str::contains("**Budget per person**: €1,000 EUR"));
}

#[test]
fn test_html_output_is_sanitized_markup() {
    let mut cmd = Command::cargo_bin("wf").unwrap();
    let mut args = plan_args();
    args.push("--html");
    cmd.args(args).env("GEMINI_API_KEY", "test-key");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<h1>Travel Plan: Paris to Tokyo</h1>"))
        .stdout(predicate::str::contains("<script").not());
}

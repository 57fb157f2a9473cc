//! End-to-end tests for the mortgage binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mortgage(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mortgage").unwrap();
    cmd.env("MORTGAGE_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn payment_prints_known_value() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["payment", "--principal", "300000", "--rate", "4.5", "--term", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment: $1520.06"));
}

#[test]
fn payment_zero_rate_is_straight_line() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["payment", "--principal", "100000", "--rate", "0", "--term", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment: $833.33"))
        .stdout(predicate::str::contains("Total interest:  $0.00"));
}

#[test]
fn payment_rejects_negative_principal() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["payment", "--principal=-100", "--rate", "4.5", "--term", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("principal"))
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn payment_rejects_unsupported_term() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["payment", "--principal", "100000", "--rate", "4.5", "--term", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("term"))
        .stderr(predicate::str::contains("{10, 15, 20, 30}"));
}

#[test]
fn schedule_shows_limited_rows_with_summary() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["schedule", "--principal", "300000", "--rate", "4.5", "--term", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... (348 more payments)"))
        .stdout(predicate::str::contains("Total payments: 360"));
}

#[test]
fn schedule_exports_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("schedule.csv");

    mortgage(&dir)
        .args(["schedule", "--principal", "1200", "--rate", "0", "--term", "10"])
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents.starts_with("Payment,Amount,Principal,Interest,Balance"));
    assert_eq!(contents.lines().count(), 121); // header + 120 payments
}

#[test]
fn ltv_prints_percentage() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["ratio", "ltv", "240000", "300000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan-to-Value Ratio: 80.00%"));
}

#[test]
fn ltv_zero_value_is_domain_error() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["ratio", "ltv", "240000", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Domain error"));
}

#[test]
fn dti_includes_proposed_payment() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["ratio", "dti", "6000", "1000", "--payment", "1400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Debt-to-Income Ratio: 40.00%"));
}

#[test]
fn pmi_not_required_at_threshold() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["ratio", "pmi", "240000", "300000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No PMI required"));
}

#[test]
fn pmi_charged_above_threshold() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["ratio", "pmi", "270000", "300000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annual PMI:  $1350.00"));
}

#[test]
fn afford_example_household() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args([
            "afford", "--income", "6000", "--debts", "1000", "--down", "60000", "--rate", "4.5",
            "--term", "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum home price:"));
}

#[test]
fn rates_table_is_static_by_default() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["rates", "--loan-type", "conventional"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.000")) // 15-year conventional
        .stdout(predicate::str::contains("6.500")); // 30-year conventional
}

#[test]
fn value_returns_estimate() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["value", "123 Main St", "Springfield", "IL", "62704"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated value:"))
        .stdout(predicate::str::contains("Confidence score:"));
}

#[test]
fn value_rejects_short_zip() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["value", "123 Main St", "Springfield", "IL", "627"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provider error"));
}

#[test]
fn refinance_reports_break_even() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args([
            "refinance",
            "--balance",
            "250000",
            "--current-rate",
            "6.5",
            "--remaining",
            "25",
            "--new-rate",
            "5.0",
            "--new-term",
            "30",
            "--closing-costs",
            "4000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly savings:"))
        .stdout(predicate::str::contains("Break-even:"));
}

#[test]
fn scenario_lifecycle() {
    let dir = TempDir::new().unwrap();

    mortgage(&dir)
        .args([
            "scenario", "add", "Baseline", "--loan", "240000", "--rate", "5.0", "--term", "30",
            "--down", "60000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved scenario 'Baseline'"));

    mortgage(&dir)
        .args([
            "scenario",
            "add",
            "Shorter",
            "--loan",
            "240000",
            "--rate",
            "4.5",
            "--term",
            "15",
            "--down",
            "60000",
        ])
        .assert()
        .success();

    mortgage(&dir)
        .args(["scenario", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Baseline"))
        .stdout(predicate::str::contains("Shorter"));

    mortgage(&dir)
        .args(["scenario", "compare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Payment"))
        .stdout(predicate::str::contains("Break-even Point"));

    mortgage(&dir)
        .args(["scenario", "delete", "Baseline"])
        .assert()
        .success();

    mortgage(&dir)
        .args(["scenario", "show", "Baseline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scenario not found"));
}

#[test]
fn scenario_duplicate_name_rejected() {
    let dir = TempDir::new().unwrap();

    let add = |dir: &TempDir| {
        mortgage(dir)
            .args(["scenario", "add", "Twice", "--loan", "100000", "--rate", "4.0", "--term", "30"])
            .assert()
    };

    add(&dir).success();
    add(&dir)
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn scenario_compare_needs_two() {
    let dir = TempDir::new().unwrap();

    mortgage(&dir)
        .args(["scenario", "add", "Solo", "--loan", "100000", "--rate", "4.0", "--term", "30"])
        .assert()
        .success();

    mortgage(&dir)
        .args(["scenario", "compare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two scenarios"));
}

#[test]
fn init_writes_default_config() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let config = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"pmi_ltv_threshold\": 80.0"));
    assert!(dir.path().join("scenarios").is_dir());
}

#[test]
fn config_prints_policy() {
    let dir = TempDir::new().unwrap();
    mortgage(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PMI LTV threshold:  80%"))
        .stdout(predicate::str::contains("Max DTI:            43"));
}

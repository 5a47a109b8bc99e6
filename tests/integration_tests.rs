use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{Fixture, rat};

#[test]
fn test_attendance_stats_reference_scenario() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["attendance", "--stats"])
        .assert()
        .success()
        .stdout(contains("Snapshot loaded at"))
        .stdout(contains("Showing partial data").not())
        .stdout(is_match(r"Records\s+: 2").unwrap())
        .stdout(is_match(r"Completed days\s+: 1").unwrap())
        .stdout(is_match(r"Overtime hours\s+: 1\.50h").unwrap())
        .stdout(is_match(r"Average hours / day\s+: 8\.00h").unwrap())
        .stdout(is_match(r"On-chain\s+: 0 \(0\.0%\)").unwrap());
}

#[test]
fn test_attendance_table_resolves_joins() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("attendance")
        .assert()
        .success()
        .stdout(contains("5/9/2025"))
        .stdout(contains("Sales"))
        .stdout(contains("08:00"))
        // unknown employee keeps its raw reference, department falls back
        .stdout(contains("E2"))
        .stdout(contains("N/A"));
}

#[test]
fn test_attendance_status_filter() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["attendance", "--status", "completed"])
        .assert()
        .success()
        .stdout(is_match(r"Records\s+: 1").unwrap())
        .stdout(contains("E2").not());
}

#[test]
fn test_attendance_date_range_filter() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["attendance", "--stats", "--from", "2025-09-06", "--to", "2025-09-30"])
        .assert()
        .success()
        .stdout(is_match(r"Records\s+: 1").unwrap())
        .stdout(is_match(r"Completed days\s+: 0").unwrap())
        .stdout(is_match(r"Average hours / day\s+: 0\.00h").unwrap());
}

#[test]
fn test_attendance_rejects_bad_filter_tokens() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["attendance", "--onchain", "sometimes"])
        .assert()
        .failure()
        .stderr(contains("Invalid on-chain filter"));

    fx.cmd()
        .args(["attendance", "--from", "05/09/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_missing_source_degrades_that_slice_only() {
    let fx = Fixture::new();
    fx.remove("attendance.json");

    fx.cmd()
        .args(["attendance", "--stats"])
        .assert()
        .success()
        .stdout(contains("source 'attendance' unavailable"))
        .stdout(contains("Showing partial data"))
        .stdout(is_match(r"Records\s+: 0").unwrap());

    fx.cmd()
        .arg("departments")
        .assert()
        .success()
        .stdout(contains("Sales"))
        .stdout(contains("E1 - A"));
}

#[test]
fn test_logs_search_and_stats() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("logs")
        .assert()
        .success()
        .stdout(is_match(r"Transactions\s+: 3").unwrap())
        .stdout(is_match(r"Gas used\s+: 26000").unwrap())
        .stdout(contains("09:00:00 5/9/2025"));

    fx.cmd()
        .args(["logs", "--search", "0XAB"])
        .assert()
        .success()
        .stdout(is_match(r"Transactions\s+: 1").unwrap())
        .stdout(contains("0xAB01"))
        .stdout(contains("0xcd02").not());

    fx.cmd()
        .args(["logs", "--contract", "C0FFEE", "--status", "pending"])
        .assert()
        .success()
        .stdout(is_match(r"Transactions\s+: 1").unwrap())
        .stdout(contains("checkOut"));
}

#[test]
fn test_log_detail_lists_events() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["logs", "--detail", "0xab01"])
        .assert()
        .success()
        .stdout(contains("CheckedIn"))
        .stdout(contains("\"employee\": \"E1\""));

    fx.cmd()
        .args(["logs", "--detail", "0xdead"])
        .assert()
        .failure()
        .stderr(contains("Transaction log not found"));
}

#[test]
fn test_departments_overview_and_detail() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("departments")
        .assert()
        .success()
        .stdout(contains("E1 - A"))
        .stdout(contains("Engineering"));

    fx.cmd()
        .args(["departments", "--id", "D2"])
        .assert()
        .success()
        .stdout(contains("E9 (unknown employee)"))
        .stdout(contains("Senior"));

    fx.cmd()
        .args(["departments", "--id", "D9"])
        .assert()
        .failure()
        .stderr(contains("Department not found"));
}

#[test]
fn test_health_board() {
    let fx = Fixture::new();
    fx.remove("logs.json");

    fx.cmd()
        .arg("health")
        .assert()
        .success()
        .stdout(is_match(r"database\s+: \S*up").unwrap())
        .stdout(is_match(r"payroll_contract\s+: \S*down").unwrap())
        .stdout(is_match(r"blockchain\s+: \S*unknown").unwrap())
        .stdout(is_match(r"ai_service\s+: \S*unknown").unwrap());
}

#[test]
fn test_config_check_reports_missing_files() {
    let fx = Fixture::new();
    fx.remove("employees.json");

    fx.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("1 snapshot file(s) missing"));

    fx.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("export_dir:"));
}

#[test]
fn test_init_writes_config_and_settings() {
    let home = tempfile::tempdir().unwrap();

    rat()
        .env("HOME", home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let base = home.path().join(".rattendance");
    assert!(base.join("rattendance.conf").is_file());
    assert!(base.join("settings.json").is_file());
    assert!(base.join("data").is_dir());

    rat()
        .env("HOME", home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already present"));
}

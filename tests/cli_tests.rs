use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{HOLIDAYS_2026, shcw, temp_path, write_holidays};

/// A base url nothing listens on: any network call would fail the run.
const DEAD_BASE_URL: &str = "http://127.0.0.1:9";

fn write_config(name: &str, holidays: &str, log: &str) -> String {
    let path = temp_path(name, "conf");
    let content = format!(
        "base_url: {}\ntimeout_secs: 2\nusername: alice\naddress: Office\ngps: \"121.47,31.23\"\nholidays: {}\nlog_file: {}\ntimezone: Asia/Shanghai\n",
        DEAD_BASE_URL, holidays, log
    );
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_check_reports_weekend() {
    let holidays = write_holidays("cli_check_weekend", HOLIDAYS_2026);
    shcw()
        .args(["check", "--date", "2026-10-17", "--holidays", &holidays])
        .assert()
        .success()
        .stdout(contains("2026-10-17 is a weekend"));
}

#[test]
fn test_check_reports_holiday_and_workday() {
    let holidays = write_holidays("cli_check_holiday", HOLIDAYS_2026);
    shcw()
        .args(["check", "--date", "2026-10-02", "--holidays", &holidays])
        .assert()
        .success()
        .stdout(contains("holiday"));

    shcw()
        .args(["check", "--date", "2026-10-19", "--holidays", &holidays])
        .assert()
        .success()
        .stdout(contains("workday"));
}

#[test]
fn test_check_year_missing_fails() {
    let holidays = write_holidays("cli_check_missing_year", HOLIDAYS_2026);
    shcw()
        .args(["check", "--date", "2027-10-19", "--holidays", &holidays])
        .assert()
        .failure()
        .stderr(contains("no holiday records for year 2027 (file covers: 2026)"));
}

#[test]
fn test_run_skips_weekend_without_network() {
    let holidays = write_holidays("cli_run_weekend", HOLIDAYS_2026);
    let log = temp_path("cli_run_weekend", "log");
    let cfg = write_config("cli_run_weekend", &holidays, &log);

    shcw()
        .args(["--config", &cfg, "run", "--date", "2026-10-18"])
        .assert()
        .success()
        .stdout(contains("nothing to do"));

    let logged = fs::read_to_string(&log).expect("log file");
    assert!(logged.contains("today is weekend"));
}

#[test]
fn test_run_skips_holiday_without_network() {
    let holidays = write_holidays("cli_run_holiday", HOLIDAYS_2026);
    let log = temp_path("cli_run_holiday", "log");
    let cfg = write_config("cli_run_holiday", &holidays, &log);

    shcw()
        .args(["--config", &cfg, "run", "--date", "2026-10-05"])
        .assert()
        .success()
        .stdout(contains("holiday"));
}

#[test]
fn test_run_log_is_appended() {
    let holidays = write_holidays("cli_run_append", HOLIDAYS_2026);
    let log = temp_path("cli_run_append", "log");
    let cfg = write_config("cli_run_append", &holidays, &log);

    for _ in 0..2 {
        shcw()
            .args(["--config", &cfg, "run", "--date", "2026-10-17"])
            .assert()
            .success();
    }

    let logged = fs::read_to_string(&log).expect("log file");
    assert_eq!(logged.matches("today is weekend").count(), 2);
}

#[test]
fn test_run_workday_login_failure_is_fatal() {
    let holidays = write_holidays("cli_run_workday", HOLIDAYS_2026);
    let log = temp_path("cli_run_workday", "log");
    let cfg = write_config("cli_run_workday", &holidays, &log);

    shcw()
        .args(["--config", &cfg, "run", "--date", "2026-10-19"])
        .write_stdin("secret\n")
        .assert()
        .failure()
        .stderr(contains("Transport error"));
}

#[test]
fn test_run_rejects_malformed_gps() {
    let holidays = write_holidays("cli_run_gps", HOLIDAYS_2026);
    let log = temp_path("cli_run_gps", "log");
    let cfg = write_config("cli_run_gps", &holidays, &log);

    shcw()
        .args(["--config", &cfg, "run", "--date", "2026-10-17", "--gps", "121.47"])
        .assert()
        .failure()
        .stderr(contains("Configuration error").and(contains("coordinates")));
}

#[test]
fn test_init_writes_default_config() {
    let cfg = temp_path("cli_init", "conf");

    shcw().args(["--config", &cfg, "init"]).assert().success();

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("sq.shcvs.cn/962200/html5/v1"));
    assert!(content.contains("timeout_secs: 30"));

    shcw()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: Asia/Shanghai"));
}

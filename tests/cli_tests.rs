use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{dt, rwh, setup_test_db, temp_out, write_csv, write_xlsx};

const WEEK_7: &str = "Name,Check In Time,Check Out Time\n\
    Alice,2025-02-10 08:00,2025-02-10 12:00\n\
    Alice,2025-02-11 13:00,2025-02-11 17:00\n\
    Bob,2025-02-12 08:00,2025-02-12 16:30\n";

const WEEK_8: &str = "Name,Check In Time,Check Out Time\n\
    Alice,2025-02-17 08:00,2025-02-17 18:00\n\
    Alice,2025-02-18 08:00,2025-02-18 16:00\n";

fn init(name: &str, db: &str) {
    rwh(name)
        .args(["--db", db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_upload_prints_weekly_table() {
    let name = "cli_upload_table";
    let db = setup_test_db(name);
    init(name, &db);
    let file = write_csv(name, WEEK_7);

    rwh(name)
        .args(["--db", &db, "upload", &file])
        .assert()
        .success()
        .stdout(contains("W07-2025"))
        .stdout(contains("Alice"))
        .stdout(contains("8.00"))
        .stdout(contains("-480"))
        .stdout(contains("8.50"))
        .stdout(contains("-450"));
}

#[test]
fn test_upload_accumulates_across_weeks() {
    let name = "cli_upload_accumulate";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(&format!("{name}_w7"), WEEK_7);
    let w8 = write_csv(&format!("{name}_w8"), WEEK_8);

    rwh(name).args(["--db", &db, "upload", &w7]).assert().success();

    // Alice: 480 + 1080 = 1560 cumulative, +120 deviation in week 8
    rwh(name)
        .args(["--db", &db, "upload", &w8])
        .assert()
        .success()
        .stdout(contains("W08-2025"))
        .stdout(contains("1560"))
        .stdout(contains("120"))
        .stdout(contains("Bob").not());

    rwh(name)
        .args(["--db", &db, "show"])
        .assert()
        .success()
        .stdout(contains("W07-2025"))
        .stdout(contains("W08-2025"))
        .stdout(contains("26:00"))
        .stdout(contains("8:30"));
}

#[test]
fn test_reupload_same_week_warns_and_double_counts() {
    let name = "cli_reupload";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(name, WEEK_7);

    rwh(name).args(["--db", &db, "upload", &w7]).assert().success();

    rwh(name)
        .args(["--db", &db, "upload", &w7])
        .assert()
        .success()
        .stdout(contains("already uploaded"))
        .stdout(contains("960"));
}

#[test]
fn test_upload_missing_column_fails_and_keeps_session() {
    let name = "cli_missing_column";
    let db = setup_test_db(name);
    init(name, &db);
    let good = write_csv(&format!("{name}_good"), WEEK_7);
    let bad = write_csv(&format!("{name}_bad"), "Name,Check In Time\nAlice,08:00\n");

    rwh(name).args(["--db", &db, "upload", &good]).assert().success();

    rwh(name)
        .args(["--db", &db, "upload", &bad])
        .assert()
        .failure()
        .stderr(contains("Required column missing: Check Out Time"));

    rwh(name)
        .args(["--db", &db, "show"])
        .assert()
        .success()
        .stdout(contains("8:00"));
}

#[test]
fn test_upload_reports_rejected_rows() {
    let name = "cli_rejected_rows";
    let db = setup_test_db(name);
    init(name, &db);
    let file = write_csv(
        name,
        "Name,Check In Time,Check Out Time\n\
         Alice,2025-02-10 08:00,2025-02-10 12:00\n\
         Carol,2025-02-10 12:00,2025-02-10 08:00\n",
    );

    rwh(name)
        .args(["--db", &db, "upload", &file])
        .assert()
        .success()
        .stdout(contains("Row 3: check-out before check-in for 'Carol'"))
        .stdout(contains("1 row(s) skipped"));
}

#[test]
fn test_upload_with_week_override() {
    let name = "cli_week_override";
    let db = setup_test_db(name);
    init(name, &db);
    let file = write_csv(name, "Name,Check In Time,Check Out Time\nAlice,8:00AM,12:00PM\n");

    rwh(name)
        .args(["--db", &db, "upload", &file, "--week", "w9-2025"])
        .assert()
        .success()
        .stdout(contains("W09-2025"));

    rwh(name)
        .args(["--db", &db, "upload", &file, "--week", "week nine"])
        .assert()
        .failure()
        .stderr(contains("Invalid week label"));
}

#[test]
fn test_report_uses_throwaway_session() {
    let name = "cli_report";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(&format!("{name}_w7"), WEEK_7);
    let w8 = write_xlsx(
        &format!("{name}_w8"),
        &[
            ("Alice", dt("2025-02-17", "08:00"), dt("2025-02-17", "18:00")),
            ("Alice", dt("2025-02-18", "08:00"), dt("2025-02-18", "16:00")),
        ],
    );

    rwh(name)
        .args(["--db", &db, "report", &w7, &w8])
        .assert()
        .success()
        .stdout(contains("W07-2025"))
        .stdout(contains("W08-2025"))
        .stdout(contains("1560"));

    rwh(name)
        .args(["--db", &db, "show"])
        .assert()
        .success()
        .stdout(contains("No data yet"));
}

#[test]
fn test_reset_clears_session() {
    let name = "cli_reset";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(name, WEEK_7);

    rwh(name).args(["--db", &db, "upload", &w7]).assert().success();

    rwh(name)
        .args(["--db", &db, "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("reset"));

    rwh(name)
        .args(["--db", &db, "show"])
        .assert()
        .success()
        .stdout(contains("No data yet"));

    // A new session starts from zero
    rwh(name)
        .args(["--db", &db, "upload", &w7])
        .assert()
        .success()
        .stdout(contains("already uploaded").not());
}

#[test]
fn test_reset_declined() {
    let name = "cli_reset_declined";
    let db = setup_test_db(name);
    init(name, &db);

    rwh(name)
        .args(["--db", &db, "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
}

#[test]
fn test_export_csv_and_json() {
    let name = "cli_export";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(name, WEEK_7);
    rwh(name).args(["--db", &db, "upload", &w7]).assert().success();

    let csv_out = temp_out(name, "csv");
    rwh(name)
        .args(["--db", &db, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("Name,W07-2025,Total,Total (min)"));
    assert!(content.contains("Alice,8:00,8:00,480"));
    assert!(content.contains("Bob,8:30,8:30,510"));

    let json_out = temp_out(name, "json");
    rwh(name)
        .args(["--db", &db, "export", "--format", "json", "--file", &json_out])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json["target_minutes"], 960);
    assert_eq!(json["week_labels"][0], "W07-2025");
    assert_eq!(json["students"][1]["student_name"], "Bob");
    assert_eq!(json["students"][1]["total_minutes"], 510);
}

#[test]
fn test_export_xlsx_and_overwrite_guard() {
    let name = "cli_export_xlsx";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(name, WEEK_7);
    rwh(name).args(["--db", &db, "upload", &w7]).assert().success();

    let out = temp_out(name, "xlsx");
    rwh(name)
        .args(["--db", &db, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();
    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));

    rwh(name)
        .args(["--db", &db, "export", "--format", "xlsx", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
}

#[test]
fn test_export_requires_absolute_path() {
    let name = "cli_export_relative";
    let db = setup_test_db(name);
    init(name, &db);

    rwh(name)
        .args(["--db", &db, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_lists_operations() {
    let name = "cli_log";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(name, WEEK_7);
    rwh(name).args(["--db", &db, "upload", &w7]).assert().success();

    rwh(name)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("migration_applied"))
        .stdout(contains("upload"))
        .stdout(contains("2 students"));
}

#[test]
fn test_log_last_entries_only() {
    let name = "cli_log_last";
    let db = setup_test_db(name);
    init(name, &db);
    let w7 = write_csv(name, WEEK_7);
    rwh(name).args(["--db", &db, "upload", &w7]).assert().success();

    rwh(name)
        .args(["--db", &db, "log", "--print", "--last", "1"])
        .assert()
        .success()
        .stdout(contains("upload (W07-2025)"))
        .stdout(contains("migration_applied").not());
}

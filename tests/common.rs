#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's config: HOME points to a
/// scratch directory and colours are off.
pub fn rwh(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rweekhours");
    cmd.env("HOME", temp_home(name)).env("NO_COLOR", "1");
    cmd
}

pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rweekhours_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique session DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rweekhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let p = temp_out(name, "csv");
    fs::write(&p, content).expect("write csv fixture");
    p
}

pub fn dt(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M")
        .expect("valid fixture timestamp")
}

pub fn excel_serial(value: NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (value - epoch).num_seconds() as f64 / 86_400.0
}

/// Write an xlsx fixture with a `Name / Check In Time / Check Out Time`
/// header and real Excel date cells.
pub fn write_xlsx(name: &str, rows: &[(&str, NaiveDateTime, NaiveDateTime)]) -> String {
    let p = temp_out(name, "xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Attendance").unwrap();

    let date_fmt = Format::new().set_num_format("yyyy-mm-dd hh:mm");

    sheet.write(0, 0, "Name").unwrap();
    sheet.write(0, 1, "Check In Time").unwrap();
    sheet.write(0, 2, "Check Out Time").unwrap();

    for (i, (student, check_in, check_out)) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, *student).unwrap();
        sheet
            .write_with_format(r, 1, excel_serial(*check_in), &date_fmt)
            .unwrap();
        sheet
            .write_with_format(r, 2, excel_serial(*check_out), &date_fmt)
            .unwrap();
    }

    workbook.save(&p).expect("write xlsx fixture");
    p
}

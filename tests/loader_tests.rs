mod common;
use common::{dt, write_csv, write_xlsx};
use rweekhours::errors::AppError;
use rweekhours::loader::columns::{ColumnAliases, ColumnOverrides, resolve_columns};
use rweekhours::loader::csv_reader::read_csv_bytes;
use rweekhours::loader::raw_table::{RawCell, RawTable};
use rweekhours::loader::timestamp::{Stamp, UnreadableCell, excel_serial_to_stamp, parse_cell};
use rweekhours::loader::{LoadOptions, load_upload, read_table, records_from_table};
use chrono::{NaiveDate, NaiveTime};
use std::path::Path;

fn headers(h: &[&str]) -> Vec<String> {
    h.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_csv_with_full_timestamps() {
    let path = write_csv(
        "loader_full_ts",
        "Name,Check In Time,Check Out Time,Class\n\
         Alice,2025-02-10 08:00,2025-02-10 12:00,4A\n\
         Alice,2025-02-11 13:00,2025-02-11 17:00,4A\n\
         Bob,2025-02-12 08:00,2025-02-12 16:30,4B\n",
    );

    let upload = load_upload(Path::new(&path), &LoadOptions::default()).unwrap();

    assert_eq!(upload.records.len(), 3);
    assert!(upload.rejected.is_empty());
    assert_eq!(upload.first_date, NaiveDate::from_ymd_opt(2025, 2, 10));
    assert_eq!(upload.records[2].student_name(), "Bob");
    assert_eq!(upload.records[2].duration().num_minutes(), 510);
}

#[test]
fn test_csv_semicolon_and_twelve_hour_times() {
    let table = read_csv_bytes(
        b"Naam;Check In Time;Check Out Time\n\
          Alice;8:00AM;12:00PM\n\
          Alice;1:00PM;5:00PM\n",
    )
    .unwrap();

    let upload = records_from_table(&table, &LoadOptions::default()).unwrap();

    assert_eq!(upload.records.len(), 2);
    assert_eq!(upload.first_date, None);
    let total: i64 = upload.records.iter().map(|r| r.duration().num_minutes()).sum();
    assert_eq!(total, 480);
}

#[test]
fn test_csv_latin1_names() {
    // "Zoë" encoded as Latin-1
    let mut bytes = b"Name,Check In Time,Check Out Time\nZo".to_vec();
    bytes.push(0xEB);
    bytes.extend_from_slice(b",09:00,10:00\n");

    let table = read_csv_bytes(&bytes).unwrap();
    let upload = records_from_table(&table, &LoadOptions::default()).unwrap();

    assert_eq!(upload.records[0].student_name(), "Zoë");
}

#[test]
fn test_missing_name_column_fails() {
    let table = read_csv_bytes(b"Student ID,Check In Time,Check Out Time\n1,08:00,09:00\n").unwrap();

    let err = records_from_table(&table, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(c) if c == "Name"));
}

#[test]
fn test_missing_check_out_column_fails() {
    let table = read_csv_bytes(b"Name,Check In Time\nAlice,08:00\n").unwrap();

    let err = records_from_table(&table, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(c) if c == "Check Out Time"));
}

#[test]
fn test_invalid_timestamp_fails_whole_file() {
    let table = read_csv_bytes(
        b"Name,Check In Time,Check Out Time\n\
          Alice,08:00,12:00\n\
          Bob,lunch,16:00\n",
    )
    .unwrap();

    let err = records_from_table(&table, &LoadOptions::default()).unwrap_err();
    match err {
        AppError::InvalidTimestamp { row, column, value } => {
            assert_eq!(row, 3);
            assert_eq!(column, "Check In Time");
            assert_eq!(value, "lunch");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_row_level_problems_are_reported_not_fatal() {
    let table = read_csv_bytes(
        b"Name,Check In Time,Check Out Time\n\
          Alice,08:00,12:00\n\
          ,09:00,10:00\n\
          Carol,12:00,08:00\n\
          Dave,09:00,\n\
          Erin,,\n\
          ,,\n",
    )
    .unwrap();

    let upload = records_from_table(&table, &LoadOptions::default()).unwrap();

    assert_eq!(upload.records.len(), 1);
    assert_eq!(upload.records[0].student_name(), "Alice");
    assert_eq!(upload.rejected.len(), 3);
    assert!(matches!(upload.rejected[0], AppError::EmptyName { row: 3 }));
    assert!(matches!(
        &upload.rejected[1],
        AppError::NegativeDuration { row: 4, name } if name == "Carol"
    ));
    assert!(matches!(
        &upload.rejected[2],
        AppError::IncompletePair { row: 5, name } if name == "Dave"
    ));
}

#[test]
fn test_onetap_repeated_time_columns() {
    let table = read_csv_bytes(
        b"Name,Mon Check In Time,Mon Check Out Time,Tue Check In Time,Tue Check Out Time\n\
          Alice,08:00AM,12:00PM,01:00PM,05:00PM\n\
          Bob,08:00AM,04:30PM,,\n",
    )
    .unwrap();

    let upload = records_from_table(&table, &LoadOptions::default()).unwrap();

    assert_eq!(upload.records.len(), 3);
    let alice: i64 = upload
        .records
        .iter()
        .filter(|r| r.student_name() == "Alice")
        .map(|r| r.duration().num_minutes())
        .sum();
    assert_eq!(alice, 480);
}

fn alice_minutes(csv: &[u8]) -> (usize, i64) {
    let table = read_csv_bytes(csv).unwrap();
    let upload = records_from_table(&table, &LoadOptions::default()).unwrap();
    let minutes = upload
        .records
        .iter()
        .filter(|r| r.student_name() == "Alice")
        .map(|r| r.duration().num_minutes())
        .sum();
    (upload.records.len(), minutes)
}

#[test]
fn test_onetap_numbered_time_columns() {
    let (records, minutes) = alice_minutes(
        b"Name,Check In Time,Check Out Time,Check In Time 2,Check Out Time 2\n\
          Alice,2025-02-10 08:00,2025-02-10 12:00,2025-02-11 13:00,2025-02-11 17:00\n",
    );
    assert_eq!(records, 2);
    assert_eq!(minutes, 480);
}

#[test]
fn test_onetap_duplicate_time_headers() {
    let (records, minutes) = alice_minutes(
        b"Name,Check In Time,Check Out Time,Check In Time,Check Out Time\n\
          Alice,2025-02-10 08:00,2025-02-10 12:00,2025-02-11 13:00,2025-02-11 17:00\n",
    );
    assert_eq!(records, 2);
    assert_eq!(minutes, 480);
}

#[test]
fn test_onetap_unpaired_time_column_fails() {
    let h = headers(&[
        "Name",
        "Mon Check In Time",
        "Mon Check Out Time",
        "Tue Check In Time",
    ]);
    let err = resolve_columns(&h, &ColumnAliases::default(), &ColumnOverrides::default())
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingColumn(c) if c.contains("Check Out Time") && c.contains("Tue Check In Time")
    ));

    let h = headers(&["Name", "Check In Time", "Check Out Time", "Check Out Time 2"]);
    let err = resolve_columns(&h, &ColumnAliases::default(), &ColumnOverrides::default())
        .unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(c) if c.contains("Check Out Time 2")));
}

#[test]
fn test_column_overrides() {
    let h = headers(&["Leerling", "Binnen", "Buiten"]);
    let overrides = ColumnOverrides {
        name: Some("leerling".into()),
        check_in: Some("Binnen".into()),
        check_out: Some("BUITEN".into()),
    };

    let map = resolve_columns(&h, &ColumnAliases::default(), &overrides).unwrap();
    assert_eq!(map.name, 0);
    assert_eq!(map.pairs.len(), 1);
    assert_eq!((map.pairs[0].check_in, map.pairs[0].check_out), (1, 2));

    let bad = ColumnOverrides {
        name: Some("Pupil".into()),
        ..Default::default()
    };
    let err = resolve_columns(&h, &ColumnAliases::default(), &bad).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(c) if c == "Pupil"));
}

#[test]
fn test_aliases_are_case_insensitive() {
    let h = headers(&["  NAAM ", "Start", "Einde"]);
    let map = resolve_columns(&h, &ColumnAliases::default(), &ColumnOverrides::default()).unwrap();
    assert_eq!(map.name, 0);
    assert_eq!((map.pairs[0].check_in, map.pairs[0].check_out), (1, 2));
}

#[test]
fn test_cell_formats() {
    let at = |s: &str| parse_cell(&RawCell::text(s)).unwrap().unwrap();

    assert_eq!(at("2025-02-10T08:15:00"), Stamp::DateTime(dt("2025-02-10", "08:15")));
    assert_eq!(at("10-02-2025 08:15"), Stamp::DateTime(dt("2025-02-10", "08:15")));
    assert_eq!(at("02/10/2025 8:15 PM"), Stamp::DateTime(dt("2025-02-10", "20:15")));
    assert_eq!(at("8:05AM"), Stamp::Time(NaiveTime::from_hms_opt(8, 5, 0).unwrap()));
    assert_eq!(at("17:30"), Stamp::Time(NaiveTime::from_hms_opt(17, 30, 0).unwrap()));

    assert_eq!(parse_cell(&RawCell::Empty), Ok(None));
    assert_eq!(
        parse_cell(&RawCell::text("yesterday")),
        Err(UnreadableCell("yesterday".into()))
    );
}

#[test]
fn test_whole_numbers_in_text_are_not_timestamps() {
    assert!(parse_cell(&RawCell::text("8")).is_err());
    assert!(parse_cell(&RawCell::text("16")).is_err());
    assert!(parse_cell(&RawCell::text("45698")).is_err());
    assert_eq!(
        parse_cell(&RawCell::text("45698.5")),
        Ok(Some(Stamp::DateTime(dt("2025-02-10", "12:00"))))
    );

    let table = read_csv_bytes(
        b"Name,Check In Time,Check Out Time\n\
          Alice,8,16\n",
    )
    .unwrap();
    let err = records_from_table(&table, &LoadOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidTimestamp { row: 2, value, .. } if value == "8"
    ));
}

#[test]
fn test_excel_serials() {
    assert_eq!(
        excel_serial_to_stamp(45698.0 + 1.0 / 3.0),
        Some(Stamp::DateTime(dt("2025-02-10", "08:00")))
    );
    assert_eq!(
        excel_serial_to_stamp(0.5),
        Some(Stamp::Time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()))
    );
    assert_eq!(
        excel_serial_to_stamp(0.999_999_9),
        Some(Stamp::Time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()))
    );
    assert_eq!(excel_serial_to_stamp(-1.0), None);
    assert_eq!(excel_serial_to_stamp(f64::NAN), None);
}

#[test]
fn test_bare_time_takes_partner_date() {
    let table = RawTable::new(
        headers(&["Name", "Check In Time", "Check Out Time"]),
        vec![vec![
            RawCell::text("Alice"),
            RawCell::text("2025-02-10 08:00"),
            RawCell::text("12:00"),
        ]],
    );

    let upload = records_from_table(&table, &LoadOptions::default()).unwrap();
    assert_eq!(upload.records[0].check_out(), dt("2025-02-10", "12:00"));
}

#[test]
fn test_xlsx_with_date_cells() {
    let path = write_xlsx(
        "loader_xlsx",
        &[
            ("Alice", dt("2025-02-10", "08:00"), dt("2025-02-10", "12:00")),
            ("Alice", dt("2025-02-11", "13:00"), dt("2025-02-11", "17:00")),
            ("Bob", dt("2025-02-12", "08:00"), dt("2025-02-12", "16:30")),
        ],
    );

    let table = read_table(Path::new(&path), None).unwrap();
    assert_eq!(table.cell(0, 1), &RawCell::DateTime(dt("2025-02-10", "08:00")));

    let upload = load_upload(Path::new(&path), &LoadOptions::default()).unwrap();

    assert_eq!(upload.records.len(), 3);
    assert_eq!(upload.first_date, NaiveDate::from_ymd_opt(2025, 2, 10));
    assert_eq!(upload.records[0].check_in(), dt("2025-02-10", "08:00"));
    assert_eq!(upload.records[2].duration().num_minutes(), 510);
}

#[test]
fn test_xlsx_unknown_sheet() {
    let path = write_xlsx(
        "loader_xlsx_sheet",
        &[("Alice", dt("2025-02-10", "08:00"), dt("2025-02-10", "12:00"))],
    );

    let opts = LoadOptions {
        sheet: Some("Week 8".into()),
        ..Default::default()
    };
    let err = load_upload(Path::new(&path), &opts).unwrap_err();
    assert!(matches!(err, AppError::SheetNotFound(s) if s == "Week 8"));

    let opts = LoadOptions {
        sheet: Some("attendance".into()),
        ..Default::default()
    };
    assert!(load_upload(Path::new(&path), &opts).is_ok());
}

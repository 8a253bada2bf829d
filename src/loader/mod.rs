//! Spreadsheet loader: turns an uploaded export into attendance records.
//!
//! Structural problems (missing columns, unreadable timestamps) fail the
//! whole upload. Row-level problems (empty name, check-out before check-in,
//! half-filled pair) only reject the affected row and are returned in
//! [`Upload::rejected`] so the caller can report them.

pub mod columns;
pub mod csv_reader;
pub mod excel_reader;
pub mod raw_table;
pub mod timestamp;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, RecordIssue};
use chrono::NaiveDate;
use columns::{ColumnAliases, ColumnOverrides, resolve_columns};
use raw_table::RawTable;
use std::path::Path;
use timestamp::{Stamp, excel_epoch, parse_cell};

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub sheet: Option<String>,
    pub aliases: ColumnAliases,
    pub overrides: ColumnOverrides,
}

impl LoadOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            sheet: None,
            aliases: ColumnAliases {
                name: cfg.name_columns.clone(),
                check_in: cfg.check_in_columns.clone(),
                check_out: cfg.check_out_columns.clone(),
            },
            overrides: ColumnOverrides::default(),
        }
    }
}

/// Result of loading one file.
#[derive(Debug, Default)]
pub struct Upload {
    pub source: String,
    pub records: Vec<AttendanceRecord>,
    /// Rows left out of the aggregation, one error per row.
    pub rejected: Vec<AppError>,
    /// Earliest date carried by a check-in cell, if any cell had a date.
    pub first_date: Option<NaiveDate>,
}

pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn read_table(path: &Path, sheet: Option<&str>) -> AppResult<RawTable> {
    if is_spreadsheet(path) {
        excel_reader::read_workbook(path, sheet)
    } else {
        csv_reader::read_csv(path)
    }
}

pub fn load_upload(path: &Path, opts: &LoadOptions) -> AppResult<Upload> {
    let table = read_table(path, opts.sheet.as_deref())?;
    let mut upload = records_from_table(&table, opts)?;
    upload.source = path.display().to_string();
    Ok(upload)
}

pub fn records_from_table(table: &RawTable, opts: &LoadOptions) -> AppResult<Upload> {
    let map = resolve_columns(&table.headers, &opts.aliases, &opts.overrides)?;
    let mut upload = Upload::default();

    for (idx, row) in table.rows.iter().enumerate() {
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }

        let row_no = table.row_number(idx);
        let name = table.cell(idx, map.name).to_string();

        for pair in &map.pairs {
            let check_in = parse_stamp(table, idx, pair.check_in)?;
            let check_out = parse_stamp(table, idx, pair.check_out)?;

            let (check_in, check_out) = match (check_in, check_out) {
                (None, None) => continue,
                (Some(i), Some(o)) => (i, o),
                _ if name.trim().is_empty() => {
                    upload.rejected.push(AppError::EmptyName { row: row_no });
                    continue;
                }
                _ => {
                    upload.rejected.push(AppError::IncompletePair {
                        row: row_no,
                        name: name.trim().to_string(),
                    });
                    continue;
                }
            };

            let (in_dt, out_dt) = place_pair(check_in, check_out);

            match AttendanceRecord::new(&name, in_dt, out_dt) {
                Ok(record) => {
                    if let Some(d) = check_in.date() {
                        upload.first_date = Some(upload.first_date.map_or(d, |f| f.min(d)));
                    }
                    upload.records.push(record);
                }
                Err(RecordIssue::EmptyName) => {
                    upload.rejected.push(AppError::EmptyName { row: row_no });
                }
                Err(RecordIssue::NegativeDuration { name }) => {
                    upload
                        .rejected
                        .push(AppError::NegativeDuration { row: row_no, name });
                }
            }
        }
    }

    Ok(upload)
}

fn parse_stamp(table: &RawTable, idx: usize, col: usize) -> AppResult<Option<Stamp>> {
    parse_cell(table.cell(idx, col)).map_err(|bad| AppError::InvalidTimestamp {
        row: table.row_number(idx),
        column: table.headers.get(col).cloned().unwrap_or_default(),
        value: bad.0,
    })
}

/// A bare time takes the date of its partner; two bare times share the
/// Excel epoch day.
fn place_pair(
    check_in: Stamp,
    check_out: Stamp,
) -> (chrono::NaiveDateTime, chrono::NaiveDateTime) {
    let anchor = check_in
        .date()
        .or_else(|| check_out.date())
        .unwrap_or_else(excel_epoch);
    (check_in.on(anchor), check_out.on(anchor))
}

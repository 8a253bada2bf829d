//! Spreadsheet input (xlsx, xlsm, xls, ods) through calamine.

use crate::errors::{AppError, AppResult};
use crate::loader::raw_table::{RawCell, RawTable};
use crate::loader::timestamp::{Stamp, excel_serial_to_stamp};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Reads one worksheet: `sheet` by name (case-insensitive) or the first one.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> AppResult<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let selected = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| AppError::SheetNotFound(wanted.to_string()))?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| AppError::SheetNotFound("(workbook has no sheets)".into()))?,
    };

    let range = workbook.worksheet_range(&selected)?;
    let header_row = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(first) => first.iter().map(|c| to_raw(c).to_string()).collect(),
        None => Vec::new(),
    };

    let rows = rows.map(|r| r.iter().map(to_raw).collect()).collect();

    Ok(RawTable {
        headers,
        rows,
        header_row,
    })
}

fn to_raw(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::text(s),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        // Time-only and out-of-range date cells stay numeric for the parser
        Data::DateTime(dt) => match excel_serial_to_stamp(dt.as_f64()) {
            Some(Stamp::DateTime(d)) => RawCell::DateTime(d),
            _ => RawCell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => RawCell::text(s),
        other => RawCell::text(&other.to_string()),
    }
}

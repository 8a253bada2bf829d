//! Interpretation of check-in/check-out cells.
//!
//! Accepts the date-time and time layouts seen in attendance exports, Excel
//! serial numbers and native spreadsheet date cells.

use crate::loader::raw_table::RawCell;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use thiserror::Error;

const DATETIME_FORMATS: [&str; 14] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %I:%M%p",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M%p",
    "%d.%m.%Y %H:%M",
];

const TIME_FORMATS: [&str; 5] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p", "%I:%M%p"];

/// Largest serial Excel accepts (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

const SECONDS_PER_DAY: i64 = 86_400;

/// Cell content that is not a recognizable timestamp.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("not a timestamp: '{0}'")]
pub struct UnreadableCell(pub String);

/// A parsed timestamp cell: either a full date-time or a bare time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl Stamp {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Stamp::DateTime(dt) => Some(dt.date()),
            Stamp::Time(_) => None,
        }
    }

    /// Places the stamp on a date: date-times keep their own date, bare
    /// times go on `anchor`.
    pub fn on(&self, anchor: NaiveDate) -> NaiveDateTime {
        match self {
            Stamp::DateTime(dt) => *dt,
            Stamp::Time(t) => anchor.and_time(*t),
        }
    }
}

/// Day 0 of the Excel 1900 date system.
pub fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("1899-12-30 is a valid date")
}

/// Parses one cell; `Ok(None)` for empty cells.
pub fn parse_cell(cell: &RawCell) -> Result<Option<Stamp>, UnreadableCell> {
    let stamp = match cell {
        RawCell::Empty => return Ok(None),
        RawCell::DateTime(dt) => Some(Stamp::DateTime(*dt)),
        RawCell::Number(n) => excel_serial_to_stamp(*n),
        RawCell::Text(s) => parse_text(s),
    };
    stamp
        .map(Some)
        .ok_or_else(|| UnreadableCell(cell.to_string()))
}

fn parse_text(s: &str) -> Option<Stamp> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Stamp::DateTime(dt.naive_local()));
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Stamp::DateTime(dt));
        }
    }

    for fmt in TIME_FORMATS.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(Stamp::Time(t));
        }
    }

    // Serials exported as text. Whole numbers are rejected: in a text
    // column "8" means hours far more often than 1900-01-07.
    s.parse::<f64>()
        .ok()
        .filter(|n| n.fract() != 0.0)
        .and_then(excel_serial_to_stamp)
}

/// Converts an Excel serial (days since 1899-12-30, fraction = time of day)
/// to a stamp, rounded to the second. Serials below 1 are times only and
/// never round up into the next day.
pub fn excel_serial_to_stamp(serial: f64) -> Option<Stamp> {
    if !serial.is_finite() || !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }

    let seconds = (serial * SECONDS_PER_DAY as f64).round() as i64;

    if serial < 1.0 {
        let seconds = seconds.min(SECONDS_PER_DAY - 1) as u32;
        return NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).map(Stamp::Time);
    }

    let dt = excel_epoch().and_hms_opt(0, 0, 0)? + TimeDelta::seconds(seconds);
    Some(Stamp::DateTime(dt))
}

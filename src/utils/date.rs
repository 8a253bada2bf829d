use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// ISO week label in the form `W07-2025`.
pub fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("W{:02}-{}", iso.week(), iso.year())
}

/// Validates a user supplied week label and normalizes it (`w7-2025` → `W07-2025`).
pub fn parse_week_label(s: &str) -> AppResult<String> {
    let re = Regex::new(r"^[Ww](\d{1,2})-(\d{4})$").map_err(|e| AppError::Other(e.to_string()))?;

    let caps = re
        .captures(s.trim())
        .ok_or_else(|| AppError::InvalidWeek(s.to_string()))?;

    let week: u32 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidWeek(s.to_string()))?;
    let year: i32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidWeek(s.to_string()))?;

    // Rejects week 53 in years that only have 52
    NaiveDate::from_isoywd_opt(year, week, chrono::Weekday::Mon)
        .ok_or_else(|| AppError::InvalidWeek(s.to_string()))?;

    Ok(format!("W{:02}-{}", week, year))
}

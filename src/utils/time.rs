//! Time utilities: duration strings from the config file and minute formatting.

use crate::errors::{AppError, AppResult};
use regex::Regex;

/// Parses durations such as `16h`, `16h30m`, `990m` or a bare number of hours.
pub fn parse_duration_to_minutes(s: &str) -> AppResult<i64> {
    let raw = s.trim().to_ascii_lowercase();

    if let Ok(hours) = raw.parse::<i64>() {
        return Ok(hours * 60);
    }

    let re = Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?$")
        .map_err(|e| AppError::Other(e.to_string()))?;

    let caps = re
        .captures(&raw)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some())
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let part = |i: usize| -> AppResult<i64> {
        caps.get(i)
            .map(|m| m.as_str().parse::<i64>())
            .transpose()
            .map(|v| v.unwrap_or(0))
            .map_err(|_| AppError::InvalidDuration(s.to_string()))
    };

    Ok(part(1)? * 60 + part(2)?)
}

/// `H:MM` with a leading `-` for negative values (e.g. `8:05`, `-1:30`).
pub fn format_minutes_hhmm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

/// Fractional hours with two decimals, as shown in the weekly table.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

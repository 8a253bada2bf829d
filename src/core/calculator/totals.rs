//! Duration sums for one student and their conversion to hours/minutes.

use crate::models::AttendanceRecord;

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Exact attended time of a group of records, in milliseconds.
pub fn total_millis<'a, I>(records: I) -> i64
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .map(|r| r.duration().num_milliseconds())
        .sum()
}

pub fn millis_to_hours(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_HOUR
}

/// Converts to whole minutes, rounding half away from zero.
pub fn millis_to_minutes(millis: i64) -> i64 {
    let half = MILLIS_PER_MINUTE / 2;
    if millis >= 0 {
        (millis + half) / MILLIS_PER_MINUTE
    } else {
        -((-millis + half) / MILLIS_PER_MINUTE)
    }
}

//! Weekly attendance aggregation.
//!
//! Pure and synchronous: records and the prior session state go in, the
//! summary rows and the next session state come out. No I/O happens here.

use crate::core::calculator::deviation::{DEFAULT_TARGET_MINUTES, calculate_deviation};
use crate::core::calculator::totals::{millis_to_hours, millis_to_minutes, total_millis};
use crate::models::{AttendanceRecord, SessionState, WeeklySummary};
use std::collections::BTreeMap;

/// Aggregator with a configurable weekly target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    target_minutes: i64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            target_minutes: DEFAULT_TARGET_MINUTES,
        }
    }
}

impl Aggregator {
    pub fn new(target_minutes: i64) -> Self {
        Self { target_minutes }
    }

    pub fn target_minutes(&self) -> i64 {
        self.target_minutes
    }

    /// Groups `records` by student and produces one summary row per student,
    /// sorted by name. `state` is left untouched; the updated state is
    /// returned alongside the rows.
    pub fn aggregate(
        &self,
        records: &[AttendanceRecord],
        state: &SessionState,
    ) -> (Vec<WeeklySummary>, SessionState) {
        let mut groups: BTreeMap<&str, Vec<&AttendanceRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.student_name()).or_default().push(record);
        }

        let mut next_state = state.clone();
        let mut rows = Vec::with_capacity(groups.len());

        for (name, group) in groups {
            let millis = total_millis(group);
            let week_minutes = millis_to_minutes(millis);
            let cumulative_minutes = next_state.add_minutes(name, week_minutes);

            rows.push(WeeklySummary {
                student_name: name.to_string(),
                hours_this_week: millis_to_hours(millis),
                week_minutes,
                deviation_minutes: calculate_deviation(week_minutes, self.target_minutes),
                cumulative_minutes,
            });
        }

        (rows, next_state)
    }
}

/// Aggregates with the default 16-hour target.
pub fn aggregate(
    records: &[AttendanceRecord],
    state: &SessionState,
) -> (Vec<WeeklySummary>, SessionState) {
    Aggregator::default().aggregate(records, state)
}

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// One check-in/check-out pair for one student.
///
/// Fields are private: a record can only be built through [`AttendanceRecord::new`],
/// so every record that reaches the aggregator has a non-empty name and a
/// non-negative duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    student_name: String,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
}

/// Why a row could not become an [`AttendanceRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    EmptyName,
    NegativeDuration { name: String },
}

impl AttendanceRecord {
    pub fn new(
        student_name: &str,
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    ) -> Result<Self, RecordIssue> {
        let name = student_name.trim();
        if name.is_empty() {
            return Err(RecordIssue::EmptyName);
        }

        if check_out < check_in {
            return Err(RecordIssue::NegativeDuration {
                name: name.to_string(),
            });
        }

        Ok(Self {
            student_name: name.to_string(),
            check_in,
            check_out,
        })
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn check_in(&self) -> NaiveDateTime {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDateTime {
        self.check_out
    }

    pub fn duration(&self) -> TimeDelta {
        self.check_out - self.check_in
    }
}

use serde::Serialize;

/// Per-student totals for one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub student_name: String,
    pub hours_this_week: f64,
    /// Minutes this week, rounded once from the exact duration.
    pub week_minutes: i64,
    /// `week_minutes - target`; positive means above target.
    pub deviation_minutes: i64,
    pub cumulative_minutes: i64,
}

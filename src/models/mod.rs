pub mod attendance_record;
pub mod session_state;
pub mod week_overview;
pub mod weekly_summary;

pub use attendance_record::{AttendanceRecord, RecordIssue};
pub use session_state::SessionState;
pub use week_overview::{StudentOverview, WeekOverview};
pub use weekly_summary::WeeklySummary;

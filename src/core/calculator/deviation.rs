/// Weekly target of the attendance programme: 16 hours.
pub const DEFAULT_TARGET_MINUTES: i64 = 16 * 60;

/// Signed distance from the target; positive means the target was exceeded.
pub fn calculate_deviation(week_minutes: i64, target_minutes: i64) -> i64 {
    week_minutes - target_minutes
}

/// True when the week reaches the target (used for green/red colouring).
pub fn meets_target(week_minutes: i64, target_minutes: i64) -> bool {
    week_minutes >= target_minutes
}

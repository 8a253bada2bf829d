/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Deviation color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_deviation(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Green when the week reaches the target, red otherwise.
pub fn color_for_target(met: bool) -> &'static str {
    if met { GREEN } else { RED }
}

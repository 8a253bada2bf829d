pub mod deviation;
pub mod totals;

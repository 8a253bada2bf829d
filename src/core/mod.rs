pub mod aggregator;
pub mod calculator;
pub mod config;
pub mod log;

pub use aggregator::{Aggregator, aggregate};

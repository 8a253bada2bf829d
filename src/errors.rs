//! Unified application error type.
//! All modules (loader, core, db, cli, export) return AppError so the
//! binary can report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Session store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input files
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Required column missing: {0}")]
    MissingColumn(String),

    #[error("Row {row}: invalid timestamp '{value}' in column '{column}'")]
    InvalidTimestamp {
        row: usize,
        column: String,
        value: String,
    },

    // ---------------------------
    // Record validation
    // ---------------------------
    #[error("Row {row}: check-out before check-in for '{name}'")]
    NegativeDuration { row: usize, name: String },

    #[error("Row {row}: empty student name")]
    EmptyName { row: usize },

    #[error("Row {row}: '{name}' has only one of check-in/check-out")]
    IncompletePair { row: usize, name: String },

    // ---------------------------
    // Parsing of user arguments
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid week label: {0} (expected Www-YYYY)")]
    InvalidWeek(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod reset;
pub mod show;
pub mod upload;

use crate::cli::parser::InputArgs;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::loader::{LoadOptions, Upload};
use crate::loader::columns::ColumnOverrides;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Loader options from the config file plus command-line overrides.
pub(crate) fn load_options(input: &InputArgs, cfg: &Config) -> LoadOptions {
    LoadOptions {
        sheet: input.sheet.clone(),
        overrides: ColumnOverrides {
            name: input.name_col.clone(),
            check_in: input.in_col.clone(),
            check_out: input.out_col.clone(),
        },
        ..LoadOptions::from_config(cfg)
    }
}

/// Prints one warning per row that was left out of the totals.
pub(crate) fn report_rejected(upload: &Upload) {
    for issue in &upload.rejected {
        warning(format!("Skipped: {issue}"));
    }
}

/// Internal log write that never fails the command.
pub(crate) fn log_quietly(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

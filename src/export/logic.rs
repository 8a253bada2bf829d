// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_week_overview;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::OverviewExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export of the session overview.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the overview of every upload in the session.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    ///
    /// Returns `Ok(false)` when the session is empty and nothing was written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        target_minutes: i64,
        force: bool,
    ) -> AppResult<bool> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let overview = load_week_overview(&pool.conn)?;

        if overview.is_empty() {
            warning("No uploads in the current session: nothing to export.");
            return Ok(false);
        }

        ensure_writable(path, force)?;

        let data = OverviewExport::new(overview, target_minutes);

        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
            ExportFormat::Xlsx => export_xlsx(&data, path)?,
        }

        Ok(true)
    }
}

use crate::cli::commands::{load_options, log_quietly, report_rejected};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Aggregator;
use crate::db::pool::DbPool;
use crate::db::queries::{load_session_state, save_upload, week_already_uploaded};
use crate::errors::AppResult;
use crate::loader::load_upload;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::render::weekly_table;
use crate::utils::date::{parse_week_label, today, week_label};
use crate::utils::path::expand_tilde;

/// Handle the `upload` command: one file in, one aggregation pass, the
/// updated cumulative totals stored back into the session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Upload { file, week, input } = cmd {
        let target = cfg.target_minutes()?;
        let opts = load_options(input, cfg);

        // Parse everything before touching the session: a malformed file
        // leaves the stored totals as they were.
        let upload = load_upload(&expand_tilde(file), &opts)?;
        report_rejected(&upload);

        let label = match week {
            Some(w) => parse_week_label(w)?,
            None => week_label(upload.first_date.unwrap_or_else(today)),
        };

        if upload.records.is_empty() {
            warning(format!("No valid attendance records in {}.", upload.source));
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if week_already_uploaded(&pool.conn, &label)? {
            warning(format!(
                "{label} was already uploaded in this session: its minutes are added again."
            ));
        }

        let state = load_session_state(&pool.conn)?;
        let (rows, next_state) = Aggregator::new(target).aggregate(&upload.records, &state);

        save_upload(&mut pool.conn, &label, &upload.source, &rows, &next_state)?;

        log_quietly(
            &pool.conn,
            "upload",
            &label,
            &format!(
                "{} records, {} students from {}",
                upload.records.len(),
                rows.len(),
                upload.source
            ),
        );

        header(format!("{label} ({})", upload.source));
        print!("{}", weekly_table(&rows, cfg.separator()));
        println!();

        if !upload.rejected.is_empty() {
            info(format!("{} row(s) skipped.", upload.rejected.len()));
        }
        success(format!("{label} added: {} student(s).", rows.len()));
    }

    Ok(())
}

use crate::cli::commands::{load_options, report_rejected};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Aggregator;
use crate::errors::{AppError, AppResult};
use crate::loader::load_upload;
use crate::models::SessionState;
use crate::ui::messages::{error, header, warning};
use crate::ui::render::weekly_table;
use crate::utils::date::{today, week_label};
use crate::utils::path::expand_tilde;

/// Handle the `report` command: the files are aggregated in order with a
/// session that lives only for this invocation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { files, input } = cmd {
        let aggregator = Aggregator::new(cfg.target_minutes()?);
        let opts = load_options(input, cfg);

        let mut state = SessionState::new();
        let mut failed = 0usize;

        for file in files {
            let upload = match load_upload(&expand_tilde(file), &opts) {
                Ok(u) => u,
                Err(e) => {
                    error(format!("{file}: {e}"));
                    failed += 1;
                    continue;
                }
            };
            report_rejected(&upload);

            if upload.records.is_empty() {
                warning(format!("No valid attendance records in {}.", upload.source));
                continue;
            }

            let (rows, next_state) = aggregator.aggregate(&upload.records, &state);
            state = next_state;

            let label = week_label(upload.first_date.unwrap_or_else(today));
            header(format!("{label} ({})", upload.source));
            print!("{}", weekly_table(&rows, cfg.separator()));
            println!();
        }

        if failed > 0 {
            return Err(AppError::Other(format!(
                "{failed} file(s) could not be processed"
            )));
        }
    }

    Ok(())
}

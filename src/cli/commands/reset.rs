use crate::cli::commands::log_quietly;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{count_uploads, reset_session};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let uploads = count_uploads(&pool.conn)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Forget {uploads} uploaded week(s) and all cumulative totals?"
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        reset_session(&mut pool.conn)?;
        log_quietly(
            &pool.conn,
            "reset",
            "",
            &format!("Session reset, {uploads} upload(s) discarded"),
        );

        success("Cumulative table has been reset.");
    }

    Ok(())
}

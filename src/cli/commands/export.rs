use crate::cli::commands::log_quietly;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let written = ExportLogic::export(&mut pool, *format, file, cfg.target_minutes()?, *force)?;

        if written {
            log_quietly(&pool.conn, "export", format.as_str(), file);
        }
    }
    Ok(())
}

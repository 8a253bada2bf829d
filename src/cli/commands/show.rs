use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_week_overview;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render::overview_table;
use crate::utils::time::format_minutes_hhmm;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let target = cfg.target_minutes()?;
    let pool = DbPool::new(&cfg.database)?;
    let overview = load_week_overview(&pool.conn)?;

    if overview.is_empty() {
        info("No data yet. Upload a weekly export to start.");
        return Ok(());
    }

    header("Overview (per week)");
    print!("{}", overview_table(&overview, target, cfg.separator()));
    println!();
    info(format!(
        "Green = at least {}, red = less than {}.",
        format_minutes_hhmm(target),
        format_minutes_hhmm(target)
    ));

    Ok(())
}

//! Internal operation log kept next to the session tables.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// One row of the `log` table.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Appends an operation to the log, stamped with the local time.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    Ok(())
}

/// Log rows oldest first; `limit` keeps only the most recent ones.
pub fn read_log(conn: &Connection, limit: Option<usize>) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message
         FROM log ORDER BY id DESC LIMIT ?1",
    )?;

    // SQLite treats a negative LIMIT as no limit
    let limit = limit.map_or(-1, |n| n as i64);

    let mut rows = stmt
        .query_map([limit], |row| {
            Ok(LogRow {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.reverse();
    Ok(rows)
}

//! Reads and writes of session data.

use crate::errors::AppResult;
use crate::models::{SessionState, WeekOverview, WeeklySummary};
use chrono::Local;
use rusqlite::{Connection, params};

/// Loads the cumulative minutes of the running session.
pub fn load_session_state(conn: &Connection) -> AppResult<SessionState> {
    let mut stmt = conn.prepare("SELECT student_name, minutes FROM cumulative")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }

    Ok(entries.into_iter().collect())
}

/// Records one processed upload and replaces the stored session state, in a
/// single transaction. Returns the new upload id.
pub fn save_upload(
    conn: &mut Connection,
    week_label: &str,
    source: &str,
    summaries: &[WeeklySummary],
    state: &SessionState,
) -> AppResult<i64> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO uploads (week_label, source, uploaded_at) VALUES (?1, ?2, ?3)",
        params![week_label, source, Local::now().to_rfc3339()],
    )?;
    let upload_id = tx.last_insert_rowid();

    {
        let mut ins = tx.prepare(
            "INSERT INTO upload_minutes (upload_id, student_name, minutes) VALUES (?1, ?2, ?3)",
        )?;
        for s in summaries {
            ins.execute(params![upload_id, s.student_name, s.week_minutes])?;
        }

        let mut upsert = tx.prepare(
            "INSERT INTO cumulative (student_name, minutes) VALUES (?1, ?2)
             ON CONFLICT(student_name) DO UPDATE SET minutes = excluded.minutes",
        )?;
        for (name, minutes) in state.iter() {
            upsert.execute(params![name, minutes])?;
        }
    }

    tx.commit()?;
    Ok(upload_id)
}

/// True when an upload with this week label is already in the session.
pub fn week_already_uploaded(conn: &Connection, week_label: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM uploads WHERE week_label = ?1 LIMIT 1")?;
    Ok(stmt.exists([week_label])?)
}

/// Per-week minutes of every upload, pivoted by student.
pub fn load_week_overview(conn: &Connection) -> AppResult<WeekOverview> {
    let mut stmt = conn.prepare(
        "SELECT u.week_label, m.student_name, m.minutes
         FROM upload_minutes m
         JOIN uploads u ON u.id = m.upload_id
         ORDER BY u.id ASC, m.student_name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, i64>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(WeekOverview::from_rows(out))
}

pub fn count_uploads(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM uploads", [], |r| r.get(0))?)
}

/// Ends the session: drops cumulative state and upload history.
/// The internal log is kept.
pub fn reset_session(conn: &mut Connection) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let removed = tx.execute("DELETE FROM upload_minutes", [])?;
    tx.execute("DELETE FROM uploads", [])?;
    tx.execute("DELETE FROM cumulative", [])?;
    tx.commit()?;
    Ok(removed)
}

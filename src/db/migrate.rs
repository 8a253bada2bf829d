//! Versioned schema migrations for the session store.
//!
//! Each migration is recorded in `log` as `migration_applied` with its
//! version as target, and skipped once recorded.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

type MigrationFn = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: [(&str, &str, MigrationFn); 2] = [
    (
        "20250901_0001_session_tables",
        "Created cumulative, uploads and upload_minutes tables",
        create_session_tables,
    ),
    (
        "20250915_0002_upload_week_index",
        "Added index on uploads(week_label)",
        add_week_index,
    ),
];

/// Ensure that the `log` table exists; migrations are tracked inside it.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_session_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cumulative (
            student_name TEXT PRIMARY KEY,
            minutes      INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS uploads (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            week_label  TEXT NOT NULL,
            source      TEXT NOT NULL DEFAULT '',
            uploaded_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS upload_minutes (
            upload_id    INTEGER NOT NULL REFERENCES uploads(id) ON DELETE CASCADE,
            student_name TEXT NOT NULL,
            minutes      INTEGER NOT NULL,
            PRIMARY KEY (upload_id, student_name)
        );
        "#,
    )
}

fn add_week_index(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_uploads_week ON uploads(week_label);")
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Called every time the session store is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;
    }

    Ok(())
}

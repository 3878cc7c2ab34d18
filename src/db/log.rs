use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Target of the most recent log line for `operation`, if any.
pub fn last_target(conn: &Connection, operation: &str) -> AppResult<Option<String>> {
    let target = conn
        .query_row(
            "SELECT target FROM log WHERE operation = ?1 ORDER BY id DESC LIMIT 1",
            [operation],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(target.filter(|t| !t.is_empty()))
}

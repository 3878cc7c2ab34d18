use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
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
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `inspections` table. Answer, flag, observation and photo maps
/// are stored as JSON documents.
fn create_inspections_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS inspections (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            ship              TEXT NOT NULL,
            zone              TEXT NOT NULL,
            user              TEXT NOT NULL,
            date              TEXT NOT NULL,
            time              TEXT NOT NULL,
            conforms          TEXT NOT NULL DEFAULT '{}',
            does_not_conform  TEXT NOT NULL DEFAULT '{}',
            pest              TEXT NOT NULL DEFAULT '{}',
            repair            TEXT NOT NULL DEFAULT '{}',
            observations      TEXT NOT NULL DEFAULT '{}',
            photos            TEXT NOT NULL DEFAULT '[]',
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_inspections_date ON inspections(date);
        "#,
    )?;
    Ok(())
}

fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            email          TEXT NOT NULL UNIQUE,
            password_hash  TEXT NOT NULL,
            role           TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// One inspection per (ship, zone, day), enforced by the store itself.
///
/// Rows written before this migration may already violate the rule; in that
/// case the index is not created and the application-level check stays the
/// only guard until the duplicates are resolved.
fn migrate_unique_ship_zone_date(conn: &Connection) -> Result<()> {
    let version = "20260315_0002_unique_ship_zone_date";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let duplicates: i64 = conn.query_row(
        "SELECT COUNT(*) FROM (
             SELECT 1 FROM inspections
             GROUP BY ship, zone, date
             HAVING COUNT(*) > 1
         )",
        [],
        |row| row.get(0),
    )?;

    if duplicates > 0 {
        warning(format!(
            "Found {duplicates} duplicated ship/zone/date group(s): unique index not created"
        ));
        return Ok(());
    }

    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_inspections_ship_zone_date
             ON inspections(ship, zone, date);",
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, "Unique index on inspections(ship, zone, date)"],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `init` and every time a database is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base tables
    if !table_exists(conn, "inspections")? {
        create_inspections_table(conn)?;
        success("Created inspections table.");
    }

    if !table_exists(conn, "users")? {
        create_users_table(conn)?;
    }

    // 3) Versioned migrations
    migrate_unique_ship_zone_date(conn)?;

    Ok(())
}

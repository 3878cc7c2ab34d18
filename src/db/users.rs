use crate::errors::{AppError, AppResult};
use crate::models::UserRole;
use chrono::Local;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

/// Stored credentials of one user.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

pub fn insert_user(
    conn: &Connection,
    email: &str,
    password_hash: &str,
    role: UserRole,
) -> AppResult<()> {
    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO users (email, password_hash, role, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![email, password_hash, role.to_db_str(), created_at],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(ref err, _) if is_constraint(err) => {
            AppError::UserExists(email.to_string())
        }
        other => AppError::Db(other),
    })?;
    Ok(())
}

fn is_constraint(err: &rusqlite::ffi::Error) -> bool {
    err.code == ErrorCode::ConstraintViolation
}

pub fn find_user(conn: &Connection, email: &str) -> AppResult<Option<UserRow>> {
    let row = conn
        .query_row(
            "SELECT email, password_hash, role FROM users WHERE email = ?1",
            [email],
            |row| {
                let role: String = row.get(2)?;
                Ok(UserRow {
                    email: row.get(0)?,
                    password_hash: row.get(1)?,
                    role: UserRole::from_db_str(&role),
                })
            },
        )
        .optional()?;
    Ok(row)
}

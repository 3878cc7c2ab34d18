use crate::db::log::{last_target, ttlog};
use crate::db::users::{find_user, insert_user};
use crate::errors::{AppError, AppResult};
use crate::models::UserRole;
use regex::Regex;
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// SHA-256 of `email:password`, hex encoded.
pub fn hash_password(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub struct LoginLogic;

impl LoginLogic {
    pub fn register(
        conn: &Connection,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<()> {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::Config(format!("invalid email address '{email}'")));
        }
        if !is_valid_password(password) {
            return Err(AppError::Config(format!(
                "password must have at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        insert_user(conn, &email, &hash_password(&email, password), role)?;
        let message = format!("Created user with role {}", role.to_db_str());
        ttlog(conn, "user_add", &email, &message)?;
        Ok(())
    }

    /// Check credentials and return the user's role. Every mismatch,
    /// including malformed input, is reported as invalid credentials.
    pub fn login(conn: &Connection, email: &str, password: &str) -> AppResult<UserRole> {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) || !is_valid_password(password) {
            return Err(AppError::InvalidCredentials);
        }

        let user = find_user(conn, &email)?.ok_or(AppError::InvalidCredentials)?;
        if user.password_hash != hash_password(&email, password) {
            return Err(AppError::InvalidCredentials);
        }

        let message = format!("Logged in as {}", user.role.to_db_str());
        ttlog(conn, "login", &user.email, &message)?;
        Ok(user.role)
    }

    /// Email of the most recent successful login.
    pub fn current_user(conn: &Connection) -> AppResult<Option<String>> {
        last_target(conn, "login")
    }
}

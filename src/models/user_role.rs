use clap::ValueEnum;
use serde::Serialize;

/// Role stored for each user. Administrators work on reports,
/// inspectors on the daily status board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum UserRole {
    #[value(name = "admin")]
    Administration,
    #[value(name = "inspector")]
    Inspector,
}

impl UserRole {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            UserRole::Administration => "Administración",
            UserRole::Inspector => "Inspector",
        }
    }

    /// Convert DB string → enum. Anything that is not an administrator is
    /// treated as an inspector.
    pub fn from_db_str(s: &str) -> Self {
        if s == "Administración" {
            UserRole::Administration
        } else {
            UserRole::Inspector
        }
    }

    /// Command suggested right after login.
    pub fn landing_command(&self) -> &'static str {
        match self {
            UserRole::Administration => "report",
            UserRole::Inspector => "status",
        }
    }
}

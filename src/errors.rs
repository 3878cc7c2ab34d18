//! Unified application error type.
//! All modules (db, core, ai, export, cli) return AppError so that the CLI
//! can turn every failure into a single readable message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (use YYYY-MM-DD or DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Unknown checklist item: {0}")]
    UnknownItem(String),

    // ---------------------------
    // Inspection workflow
    // ---------------------------
    #[error("An inspection for {ship} / {zone} on {date} already exists")]
    DuplicateInspection {
        ship: String,
        zone: String,
        date: String,
    },

    #[error("No inspection found for {ship} / {zone} on {date}")]
    NoInspectionFound {
        ship: String,
        zone: String,
        date: String,
    },

    #[error("Checklist incomplete: {answered} of {expected} items answered")]
    IncompleteChecklist { answered: usize, expected: usize },

    #[error("No inspection session in progress. Start one with `session start`")]
    NoActiveSession,

    #[error("An inspection session for {0} is already in progress (use --force to discard it)")]
    SessionInProgress(String),

    #[error("No submitting user: pass --user or run `login` first")]
    NoCurrentUser,

    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Login failed: the email, the password or both are incorrect")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    UserExists(String),

    // ---------------------------
    // Narrative generation
    // ---------------------------
    #[error("The AI service returned an empty response")]
    EmptyAiResponse,

    #[error("AI service error: {0}")]
    Ai(String),

    #[error("No AI API key configured. Set GEMINI_API_KEY or `ai_api_key` in the config file")]
    MissingApiKey,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Image error: {0}")]
    Image(String),

    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True when the failure came from the environment (store, filesystem,
    /// network) and repeating the same action may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Db(_) | AppError::Ai(_) | AppError::EmptyAiResponse
        )
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, AppError::DuplicateInspection { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;

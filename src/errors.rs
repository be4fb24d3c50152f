//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Seed image not found: {}", .0.display())]
    MissingImage(PathBuf),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid changeset: {0}")]
    InvalidChangeset(String),

    #[error("Malformed changeset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column '{0}' is read-only")]
    ReadOnlyColumn(String),

    #[error("Invalid value for column '{column}': {reason}")]
    InvalidField { column: String, reason: String },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid result row: {0}")]
    InvalidRow(String),

    #[error("Result {0} no longer exists; reload the table and retry")]
    StaleRow(i64),

    #[error("Row index {index} is out of range (snapshot has {len} rows)")]
    RowIndexOutOfRange { index: usize, len: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn invalid_field(column: &str, reason: impl Into<String>) -> Self {
        AppError::InvalidField {
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

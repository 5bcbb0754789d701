//! Unified application error type.
//! All modules (storage, core, cli, notify) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Hours file
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write hours file {path}: {source}")]
    HoursWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Failed to read confirmation from stdin: {0}")]
    Confirmation(io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Notifications
    // ---------------------------
    #[error("Notification error: {0}")]
    Notify(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

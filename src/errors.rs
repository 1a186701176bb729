//! Unified application error type.
//! Every module (store, core, config, cli) returns AppError so that the
//! binary has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Store
    // ---------------------------
    #[error("Session log I/O error: {0}")]
    StoreIo(#[from] io::Error),

    #[error("Session log is unreadable: {0}")]
    StoreUnreadable(String),

    // ---------------------------
    // Session state machine
    // ---------------------------
    #[error("Invalid state: {0}")]
    InvalidState(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // External tools
    // ---------------------------
    #[error("Editor error: {0}")]
    Editor(String),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(e) => AppError::StoreIo(e),
                other => AppError::StoreUnreadable(format!("{other:?}")),
            }
        } else {
            AppError::StoreUnreadable(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

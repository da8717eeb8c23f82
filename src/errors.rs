//! Unified application error type.
//! All modules (api, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Remote service
    // ---------------------------
    /// The HTTP exchange itself failed (non-2xx status, connection, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The envelope carried a non-zero application code.
    #[error("{0}")]
    Api(String),

    #[error("Login failed: {0}")]
    Auth(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid format: {0}")]
    Format(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

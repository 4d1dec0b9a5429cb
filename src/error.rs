//! Crate-wide error type and Result alias.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure: DNS, connect, timeout, aborted body.
    #[error("network error: {0}")]
    Network(String),

    /// The backend responded, but with an error status or a payload
    /// that does not match the listing contract.
    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// Grid invariant violation, e.g. inserting a row whose uid is
    /// already displayed.
    #[error("grid error: {0}")]
    Grid(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_status() {
            AppError::Api(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

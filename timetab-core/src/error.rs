//! Error types for timetab.

use thiserror::Error;

/// Errors that can occur in timetab operations.
#[derive(Error, Debug)]
pub enum TimetabError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for timetab operations.
pub type TimetabResult<T> = Result<T, TimetabError>;

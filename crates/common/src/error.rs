//! Error types

use thiserror::Error;

/// Main error type for Track
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

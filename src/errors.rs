use std::sync::PoisonError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Contact list lock was poisoned by a panicking writer")]
    LockPoisoned,
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(_err: PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}

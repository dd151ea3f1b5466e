//! Error types for text transforms

use thiserror::Error;

/// Result type for text transforms
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors that can occur while transforming display strings.
#[derive(Debug, Error)]
pub enum TextError {
    /// Input could not be interpreted as a number
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

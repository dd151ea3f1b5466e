//! Error types for i18n operations

use thiserror::Error;

/// Errors that can occur while loading or parsing message bundles.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Bundle bytes are not valid UTF-8
    #[error("bundle is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Failed to parse a TOML message bundle
    #[error("failed to parse message bundle: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error while reading a bundle
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid plural category name in a bundle
    #[error("invalid plural category: {0}")]
    InvalidPluralCategory(String),
}

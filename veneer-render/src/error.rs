//! Error types for the rendering gateway

use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template not found
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template execution error
    #[error("template rendering error: {0}")]
    Render(String),

    /// Template parsing error
    #[error("template parsing error: {0}")]
    Parse(String),

    /// IO error when loading templates or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<handlebars::RenderError> for RenderError {
    fn from(err: handlebars::RenderError) -> Self {
        RenderError::Render(err.to_string())
    }
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(err: handlebars::TemplateError) -> Self {
        RenderError::Parse(err.to_string())
    }
}

use std::io;

use thiserror::Error;

/// Library-wide error type for routegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Service or sub-service name is empty or cannot be folded into an identifier.
    #[error(
        "Invalid name '{0}': must contain letters or digits and start with a letter, '_' or '$'"
    )]
    InvalidName(String),

    /// A required input field was empty or absent.
    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// The persisted URI config exists but is not a valid document.
    #[error("URI config at {path} is corrupt: {details}")]
    ConfigCorrupt { path: String, details: String },

    /// Writing a generated file or the URI config failed.
    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A path resolved outside the repository root.
    #[error("Path escapes repository root: {0}")]
    PathTraversal(String),

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn missing_input<S: Into<String>>(field: S) -> Self {
        AppError::MissingInput(field.into())
    }
}

//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a configuration from being loaded.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file exists but could not be read.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML or does not match the schema.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A structural rule was violated.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required field is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field holds a value outside its allowed set.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ParseError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

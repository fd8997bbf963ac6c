//! Error types for stylesheet loading and style interpretation.

use std::path::PathBuf;

use crate::parser::SyntaxError;

/// Result type alias for stylemap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or interpreting a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stylesheet text is malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// File I/O error.
    #[error("failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No interpreter is registered for the property.
    #[error("unknown style '{property}'")]
    UnknownStyle { property: String },

    /// The raw value could not be interpreted for the property.
    #[error("invalid value for style '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-style error.
    pub fn unknown_style(property: impl Into<String>) -> Self {
        Self::UnknownStyle {
            property: property.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// The source line of a syntax error, if this is one.
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Syntax(err) => Some(err.line),
            _ => None,
        }
    }
}

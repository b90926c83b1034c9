//! Error types for loading, encoding and writing configuration documents.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::Format;

/// Errors that can occur while converting a configuration document.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input file does not exist or could not be read.
    #[error("Input file not found: {} ({source})", .path.display())]
    NotFound { path: PathBuf, source: io::Error },

    /// The input was not valid syntax for its declared format.
    /// `message` is the underlying parser's diagnostic, including line and
    /// column when the parser reports them.
    #[error("Error parsing {} file: {message}", .format.label())]
    Parse { format: Format, message: String },

    /// A format tag outside `yaml`, `json`, `toml`.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The value tree has a shape the target format cannot express.
    #[error("Error writing {} file: {message}", .format.label())]
    Encode { format: Format, message: String },

    /// The output file could not be created or written.
    #[error("Failed to write output file: {} ({source})", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Short class name of the error, stable across messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::NotFound { .. } => "not found",
            ConvertError::Parse { .. } => "parse error",
            ConvertError::UnsupportedFormat(_) => "unsupported format",
            ConvertError::Encode { .. } => "encode error",
            ConvertError::Write { .. } => "write error",
        }
    }

    pub(crate) fn parse(format: Format, message: impl ToString) -> Self {
        ConvertError::Parse {
            format,
            message: message.to_string(),
        }
    }

    pub(crate) fn encode(format: Format, message: impl ToString) -> Self {
        ConvertError::Encode {
            format,
            message: message.to_string(),
        }
    }
}

/// Convenience alias used throughout config-convert.
pub type Result<T> = std::result::Result<T, ConvertError>;

//! One input file → one output file.

use std::fmt;
use std::path::PathBuf;

use tracing::warn;

use crate::error::Result;
use crate::format::Format;
use crate::{loader, writer};

/// A single conversion request: where to read, how to parse it, where to
/// write, and what to write it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub input_format: Format,
    pub output: PathBuf,
    pub output_format: Format,
}

impl Conversion {
    pub fn new(
        input: impl Into<PathBuf>,
        input_format: Format,
        output: impl Into<PathBuf>,
        output_format: Format,
    ) -> Self {
        Self {
            input: input.into(),
            input_format,
            output: output.into(),
            output_format,
        }
    }

    /// True when no format change is requested. The document is still parsed
    /// and re-serialized, so formatting, comments and key layout may change.
    pub fn is_same_format(&self) -> bool {
        self.input_format == self.output_format
    }

    /// Load the input, then write it in the output format.
    pub fn run(&self) -> Result<()> {
        if self.is_same_format() {
            warn!("Input and output formats are the same. No conversion will occur.");
        }
        let value = loader::load(&self.input, self.input_format)?;
        writer::write(&value, &self.output, self.output_format)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) to {} ({})",
            self.input.display(),
            self.input_format,
            self.output.display(),
            self.output_format
        )
    }
}

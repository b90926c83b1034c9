//! The closed set of document formats.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// A format tag selecting parser and serializer behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Every supported format, in CLI listing order.
    pub const ALL: [Format; 3] = [Format::Yaml, Format::Json, Format::Toml];

    /// The tag strings accepted by [`Format::from_str`].
    pub const NAMES: [&'static str; 3] = ["yaml", "json", "toml"];

    /// Lowercase tag, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }

    /// Uppercase name used in human-readable messages.
    pub fn label(self) -> &'static str {
        match self {
            Format::Yaml => "YAML",
            Format::Json => "JSON",
            Format::Toml => "TOML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConvertError::UnsupportedFormat(s.to_string()))
    }
}

//! Writer — serializes a [`Value`] into a target format and writes it to disk.
//!
//! Before serializing, the tree is checked against the target format's limits:
//!
//! - **TOML**: the document root must be a table, `null` has no spelling and
//!   integers stop at `i64::MAX`.
//! - **JSON**: NaN and infinities have no spelling.
//! - **YAML**: every tree is representable.
//!
//! Anything that fails the check is reported as [`ConvertError::Encode`] with
//! the location of the offending value, instead of being dropped or coerced by
//! the serializer.
//!
//! # Example
//! ```
//! use config_convert::{writer, Format, Value};
//! let err = writer::render(&Value::Integer(1), Format::Toml).unwrap_err();
//! assert_eq!(err.kind(), "encode error");
//! assert_eq!(writer::render(&Value::Integer(1), Format::Json).unwrap(), "1\n");
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::types::Value;

/// Serialize `value` as `format` and write it to `path`, creating or
/// truncating the file.
///
/// The document is fully rendered before the file is opened, so an encode
/// failure leaves `path` untouched. A filesystem failure yields
/// [`ConvertError::Write`] and may leave a partially written file.
pub fn write(value: &Value, path: &Path, format: Format) -> Result<()> {
    let rendered = render(value, format)?;
    fs::write(path, &rendered).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = rendered.len(), %format, "wrote output file");
    Ok(())
}

/// Serialize `value` as `format`. YAML and JSON nest with 2-space indentation;
/// TOML uses its own table layout. Output always ends with a newline.
pub fn render(value: &Value, format: Format) -> Result<String> {
    validate(value, format)?;
    match format {
        Format::Json => {
            let mut out =
                serde_json::to_string_pretty(value).map_err(|e| ConvertError::encode(format, e))?;
            out.push('\n');
            Ok(out)
        }
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| ConvertError::encode(format, e)),
        Format::Toml => toml::to_string(value).map_err(|e| ConvertError::encode(format, e)),
    }
}

/// Check that `value` can be expressed in `format` without losing or
/// inventing data.
pub fn validate(value: &Value, format: Format) -> Result<()> {
    let rejected = match format {
        Format::Yaml => None,
        Format::Json => find_rejected(value, &mut Vec::new(), &reject_for_json),
        Format::Toml => {
            if !value.is_mapping() {
                return Err(ConvertError::encode(
                    format,
                    format!(
                        "document root must be a table, found {}",
                        value.type_name()
                    ),
                ));
            }
            find_rejected(value, &mut Vec::new(), &reject_for_toml)
        }
    };
    match rejected {
        Some((location, reason)) => Err(ConvertError::encode(
            format,
            format!("{reason} at {location}"),
        )),
        None => Ok(()),
    }
}

fn reject_for_json(value: &Value) -> Option<&'static str> {
    match value {
        Value::Float(f) if !f.is_finite() => Some("non-finite float cannot be represented"),
        _ => None,
    }
}

fn reject_for_toml(value: &Value) -> Option<&'static str> {
    match value {
        Value::Null => Some("null value cannot be represented"),
        Value::Unsigned(_) => Some("integer above i64::MAX cannot be represented"),
        _ => None,
    }
}

/// One step from the document root towards a nested value.
#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Renders a path like `server.ports[2]`, or `document root` when empty.
struct Location<'a, 'b>(&'b [Segment<'a>]);

impl fmt::Display for Location<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("document root");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Depth-first search for the first value `reject` refuses, returning its
/// location and the reason.
fn find_rejected<'a>(
    value: &'a Value,
    path: &mut Vec<Segment<'a>>,
    reject: &dyn Fn(&Value) -> Option<&'static str>,
) -> Option<(String, &'static str)> {
    if let Some(reason) = reject(value) {
        return Some((Location(path).to_string(), reason));
    }
    match value {
        Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(Segment::Index(index));
                let found = find_rejected(item, path, reject);
                path.pop();
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        Value::Mapping(entries) => {
            for (key, item) in entries {
                path.push(Segment::Key(key));
                let found = find_rejected(item, path, reject);
                path.pop();
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        _ => None,
    }
}

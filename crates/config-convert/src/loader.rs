//! Loader — reads a document from disk and parses it into a [`Value`].
//!
//! Each format is parsed by its standard crate (`serde_json`, `serde_yaml`,
//! `toml`) into that crate's own value type, which is then folded into the
//! generic tree. Parser diagnostics are passed through untouched so line and
//! column information survives into the error message.
//!
//! # Example
//! ```
//! use config_convert::{loader, Format, Value};
//! let value = loader::parse_str("port = 8080", Format::Toml).unwrap();
//! assert_eq!(value.get("port"), Some(&Value::Integer(8080)));
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::types::Value;

/// Read the file at `path` and parse it as `format`.
///
/// A missing or unreadable file yields [`ConvertError::NotFound`]; content that
/// is not valid UTF-8 or not valid `format` syntax yields [`ConvertError::Parse`].
pub fn load(path: &Path, format: Format) -> Result<Value> {
    let bytes = fs::read(path).map_err(|source| ConvertError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), %format, "read input file");

    let text = String::from_utf8(bytes)
        .map_err(|e| ConvertError::parse(format, format!("input is not valid UTF-8: {e}")))?;
    parse_str(&text, format)
}

/// Parse an in-memory document as `format`.
pub fn parse_str(text: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => {
            let value: serde_json::Value =
                serde_json::from_str(text).map_err(|e| ConvertError::parse(format, e))?;
            Ok(from_json(value))
        }
        Format::Yaml => {
            // An empty stream is a document with no content, not a syntax error.
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            let mut value: serde_yaml::Value =
                serde_yaml::from_str(text).map_err(|e| ConvertError::parse(format, e))?;
            // `<<: *anchor` entries are folded into their mapping, not kept as keys.
            value
                .apply_merge()
                .map_err(|e| ConvertError::parse(format, e))?;
            from_yaml(value)
        }
        Format::Toml => {
            let table: toml::Table =
                toml::from_str(text).map_err(|e| ConvertError::parse(format, e))?;
            Ok(from_toml_table(table))
        }
    }
}

fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Unsigned(u)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Sequence(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(map) => {
            Value::Mapping(map.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}

fn from_yaml(value: serde_yaml::Value) -> Result<Value> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Unsigned(u)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut entries = Vec::with_capacity(mapping.len());
            for (key, value) in mapping {
                entries.push((yaml_key(key)?, from_yaml(value)?));
            }
            Value::Mapping(entries)
        }
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

/// Mapping keys must be strings in the generic tree. Scalar keys are written
/// out the way YAML spells them; collection keys have no string form.
fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => Err(ConvertError::parse(
            Format::Yaml,
            "mapping keys must be scalars, found a collection key",
        )),
    }
}

fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => from_toml_table(table),
    }
}

fn from_toml_table(table: toml::Table) -> Value {
    Value::Mapping(table.into_iter().map(|(k, v)| (k, from_toml(v))).collect())
}

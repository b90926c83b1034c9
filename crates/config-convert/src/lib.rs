//! # config-convert
//!
//! Converts configuration documents between **YAML**, **JSON** and **TOML**.
//!
//! Every conversion goes through the same three stages: the [`loader`] parses
//! the input into a format-agnostic [`Value`] tree, the [`writer`] checks that
//! the tree is representable in the target format and serializes it, and
//! [`Conversion`] ties the two together for one input/output pair.
//!
//! ## Quick start
//!
//! ```rust
//! use config_convert::{loader, writer, Format};
//!
//! let value = loader::parse_str(r#"{"a": 1, "b": [1, 2, 3]}"#, Format::Json).unwrap();
//! let yaml = writer::render(&value, Format::Yaml).unwrap();
//! assert_eq!(yaml, "a: 1\nb:\n- 1\n- 2\n- 3\n");
//! ```
//!
//! ## Modules
//!
//! - [`format`] — the closed set of format tags
//! - [`types`] — the generic `Value` tree
//! - [`loader`] — file/string → `Value`
//! - [`writer`] — `Value` → string/file, with per-format shape validation
//! - [`convert`] — one input → output conversion
//! - [`error`] — error taxonomy shared by every stage

pub mod convert;
pub mod error;
pub mod format;
pub mod loader;
pub mod types;
pub mod writer;

pub use convert::Conversion;
pub use error::ConvertError;
pub use format::Format;
pub use types::Value;

//! # conftext
//!
//! Core building blocks for configuration text formats: a styled tree writer
//! and the shared lexical scanning primitives that concrete format readers
//! are built upon.
//!
//! ## What it provides
//!
//! - **[`Value`]**: a six-kind tagged union (null, booleans, numbers, strings,
//!   lists, insertion-ordered tables) representing configuration data
//! - **[`render`]**: a writer that walks a `Value` tree and emits styled text,
//!   with indentation, newline placement and separator spacing controlled by
//!   an immutable [`Style`]
//! - **[`scan`]**: stateless scanning primitives (whitespace runs, `#` comment
//!   elision, bare-key validation) shared by any line-oriented config grammar
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! The writer and the scanner are independent. A format parser drives the
//! scanner while building a `Value`; the writer later renders a `Value` back
//! to text. Nothing is shared between the two at runtime.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! conftext = "0.1"
//! ```
//!
//! ### Rendering a value tree
//!
//! ```rust
//! use conftext::{conf, to_string, Style, to_string_with_style};
//!
//! let value = conf!({
//!     "name": "Alice",
//!     "active": true
//! });
//!
//! // Default style: tab-indented, one entry per line.
//! let text = to_string(&value).unwrap();
//! assert_eq!(text, "{\n\t\"name\": \"Alice\",\n\t\"active\": true\n}");
//!
//! // Flat style.
//! let flat = Style::new().with_indent_tables(false).with_indent_lists(false);
//! let text = to_string_with_style(&value, &flat).unwrap();
//! assert_eq!(text, r#"{"name": "Alice","active": true}"#);
//! ```
//!
//! ### Scanning format input
//!
//! ```rust
//! use conftext::{scan, StrCursor};
//!
//! let mut cursor = StrCursor::new("  # header comment\n  key = 1");
//! assert_eq!(scan::skip_insignificant(&mut cursor).unwrap(), 'k');
//! assert!(scan::is_identifier_sequence("key", false));
//! ```
//!
//! ## What it does not provide
//!
//! Grammar-level parsers for concrete formats, file I/O, schema validation,
//! comment round-tripping and streaming parsing are out of scope. This crate
//! is the layer those are built on.

pub mod cursor;
pub mod error;
pub mod macros;
pub mod scan;
pub mod sink;
pub mod style;
pub mod table;
pub mod value;
pub mod write;

pub use cursor::{Cursor, StrCursor};
pub use error::{Error, Result};
pub use sink::{IoSink, Sink};
pub use style::Style;
pub use table::Table;
pub use value::{Number, Value};
pub use write::render;

use std::io;

/// Renders `value` to a `String` with the default [`Style`].
///
/// The root must be a table.
///
/// # Examples
///
/// ```rust
/// use conftext::{conf, to_string};
///
/// let value = conf!({ "port": 8080 });
/// let text = to_string(&value).unwrap();
/// assert_eq!(text, "{\n\t\"port\": 8080\n}");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `value` is not a table.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_style(value, &Style::new())
}

/// Renders `value` to a `String` with a custom [`Style`].
///
/// # Examples
///
/// ```rust
/// use conftext::{conf, to_string_with_style, Style};
///
/// let value = conf!({ "tags": [1, 2] });
/// let style = Style::new()
///     .with_indent_tables(false)
///     .with_indent_lists(false)
///     .with_space_lists(true);
/// let text = to_string_with_style(&value, &style).unwrap();
/// assert_eq!(text, r#"{"tags": [1, 2]}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `value` is not a table.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_style(value: &Value, style: &Style) -> Result<String> {
    let mut out = String::new();
    render(value, style, &mut out)?;
    Ok(out)
}

/// Renders `value` to an [`io::Write`] destination with the default
/// [`Style`], encoding as UTF-8.
///
/// # Examples
///
/// ```rust
/// use conftext::{conf, to_writer};
///
/// let value = conf!({ "port": 8080 });
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &value).unwrap();
/// assert!(!buffer.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `value` is not a table, or
/// [`Error::Io`] if the destination reports a write failure. Output written
/// before a failure stays written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, value: &Value) -> Result<()> {
    to_writer_with_style(writer, value, &Style::new())
}

/// Renders `value` to an [`io::Write`] destination with a custom [`Style`].
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `value` is not a table, or
/// [`Error::Io`] if the destination reports a write failure.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_style<W: io::Write>(writer: W, value: &Value, style: &Style) -> Result<()> {
    let mut sink = IoSink::new(writer);
    render(value, style, &mut sink)
}

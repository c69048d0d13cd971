//! The configurable tree writer.
//!
//! [`render`] walks a [`Value`] tree depth-first and emits styled text to a
//! [`Sink`], governed by a [`Style`]. The root must be a table; scalar and
//! list roots are rejected up front.
//!
//! Indentation depth is threaded through the recursive calls as an explicit
//! parameter, so the writer carries no state between calls and one `Style`
//! can drive any number of concurrent renders to distinct sinks.
//!
//! ## Examples
//!
//! ```rust
//! use conftext::{conf, render, Style};
//!
//! let value = conf!({ "name": "Alice", "tags": ["a", "b"] });
//! let style = Style::new()
//!     .with_indent_tables(false)
//!     .with_indent_lists(false)
//!     .with_space_lists(true);
//!
//! let mut out = String::new();
//! render(&value, &style, &mut out).unwrap();
//! assert_eq!(out, r#"{"name": "Alice","tags": ["a", "b"]}"#);
//! ```

use crate::{Error, Result, Sink, Style, Table, Value};

/// Renders `value` to `out` according to `style`.
///
/// Keys are always emitted as quoted, escaped strings; this writer never
/// emits bare keys. Table entries render in insertion order. Numbers render
/// as their canonical `Display` text, never reparsed.
///
/// On failure, output already accepted by the sink stays written.
///
/// # Errors
///
/// - [`Error::InvalidRoot`] if `value` is not a [`Value::Table`]
/// - [`Error::Io`] if the sink reports a write failure
pub fn render<S: Sink>(value: &Value, style: &Style, out: &mut S) -> Result<()> {
    match value {
        Value::Table(table) => StyledWriter::new(style, out).table(table, 0),
        other => Err(Error::InvalidRoot(other.kind())),
    }
}

/// Depth-first emitter over a borrowed sink. One instance per `render` call.
pub(crate) struct StyledWriter<'a, S: Sink> {
    style: &'a Style,
    out: &'a mut S,
}

impl<'a, S: Sink> StyledWriter<'a, S> {
    pub(crate) fn new(style: &'a Style, out: &'a mut S) -> Self {
        StyledWriter { style, out }
    }

    /// Dispatches on the value kind. Exhaustive: a new `Value` variant will
    /// not compile until it is handled here.
    pub(crate) fn value(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => self.out.put_str("null"),
            Value::Bool(true) => self.out.put_str("true"),
            Value::Bool(false) => self.out.put_str("false"),
            Value::Number(n) => self.out.put_str(&n.to_string()),
            Value::String(s) => self.string(s),
            Value::List(list) => self.list(list, depth),
            Value::Table(table) => self.table(table, depth),
        }
    }

    fn table(&mut self, table: &Table, depth: usize) -> Result<()> {
        // An empty table is always exactly `{}`: the indent and newline
        // options only apply around entries, of which there are none.
        if table.is_empty() {
            return self.out.put_str("{}");
        }
        if self.style.newline_before_table {
            self.newline()?;
            self.indent(depth)?;
        }
        let inner = if self.style.indent_tables {
            depth + 1
        } else {
            depth
        };
        self.out.put_char('{')?;
        if self.style.indent_tables {
            self.newline()?;
        }
        let last = table.len() - 1;
        for (i, (key, value)) in table.iter().enumerate() {
            if self.style.indent_tables {
                self.indent(inner)?;
            }
            self.string(key)?;
            self.out.put_str(": ")?;
            self.value(value, inner)?;
            if i != last {
                self.out.put_char(',')?;
                if self.style.indent_tables {
                    self.newline()?;
                }
            }
        }
        if self.style.indent_tables {
            self.newline()?;
            self.indent(depth)?;
        }
        self.out.put_char('}')
    }

    fn list(&mut self, list: &[Value], depth: usize) -> Result<()> {
        if list.is_empty() {
            return self.out.put_str("[]");
        }
        if self.style.newline_before_list {
            self.newline()?;
            self.indent(depth)?;
        }
        let inner = if self.style.indent_lists {
            depth + 1
        } else {
            depth
        };
        self.out.put_char('[')?;
        if self.style.indent_lists {
            self.newline()?;
        }
        let last = list.len() - 1;
        for (i, element) in list.iter().enumerate() {
            if self.style.indent_lists {
                self.indent(inner)?;
            }
            self.value(element, inner)?;
            if i != last {
                self.out.put_char(',')?;
                if self.style.space_lists {
                    self.out.put_char(' ')?;
                }
                if self.style.indent_lists {
                    self.newline()?;
                }
            }
        }
        if self.style.indent_lists {
            self.newline()?;
            self.indent(depth)?;
        }
        self.out.put_char(']')
    }

    fn string(&mut self, s: &str) -> Result<()> {
        self.out.put_char('"')?;
        for c in s.chars() {
            match c {
                '"' => self.out.put_str("\\\"")?,
                '\\' => self.out.put_str("\\\\")?,
                '\n' => self.out.put_str("\\n")?,
                '\r' => self.out.put_str("\\r")?,
                '\t' => self.out.put_str("\\t")?,
                '\u{0008}' => self.out.put_str("\\b")?,
                '\u{000C}' => self.out.put_str("\\f")?,
                _ => self.out.put_char(c)?,
            }
        }
        self.out.put_char('"')
    }

    fn indent(&mut self, depth: usize) -> Result<()> {
        for _ in 0..depth {
            self.out.put_str(&self.style.indent)?;
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.out.put_str(&self.style.newline)
    }
}

//! Style configuration for the tree writer.
//!
//! A [`Style`] controls line breaks, spacing and indentation of rendered
//! output. It is built once through fluent `with_*` setters, is immutable
//! thereafter, and can be reused across any number of writes.
//!
//! ## Examples
//!
//! ```rust
//! use conftext::{conf, to_string_with_style, Style};
//!
//! let value = conf!({ "enabled": true });
//!
//! // Default style: tab indentation, LF newlines.
//! let text = to_string_with_style(&value, &Style::new()).unwrap();
//! assert_eq!(text, "{\n\t\"enabled\": true\n}");
//!
//! // Everything on one line.
//! let flat = Style::new()
//!     .with_indent_tables(false)
//!     .with_indent_lists(false);
//! let text = to_string_with_style(&value, &flat).unwrap();
//! assert_eq!(text, "{\"enabled\": true}");
//! ```

/// Formatting options consumed by the tree writer.
///
/// Defaults:
///
/// - `indent` = one tab character
/// - `newline` = LF (`"\n"`)
/// - `indent_tables` = `true`
/// - `indent_lists` = `true`
/// - `space_lists` = `false`
/// - `newline_before_table` = `false`
/// - `newline_before_list` = `false`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// The indentation unit, repeated once per nesting level.
    pub indent: String,
    /// The newline sequence, e.g. `"\n"` or `"\r\n"`.
    pub newline: String,
    /// Put each table entry on its own indented line.
    pub indent_tables: bool,
    /// Put each list element on its own indented line.
    pub indent_lists: bool,
    /// Write a single space after each list separator.
    pub space_lists: bool,
    /// Write a newline (and current indentation) before a table's opening
    /// brace.
    pub newline_before_table: bool,
    /// Write a newline (and current indentation) before a list's opening
    /// bracket.
    pub newline_before_list: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            indent: "\t".to_string(),
            newline: "\n".to_string(),
            indent_tables: true,
            indent_lists: true,
            space_lists: false,
            newline_before_table: false,
            newline_before_list: false,
        }
    }
}

impl Style {
    /// Creates the default style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftext::Style;
    ///
    /// let style = Style::new();
    /// assert_eq!(style.indent, "\t");
    /// assert!(style.indent_tables);
    /// assert!(!style.space_lists);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit, for instance `"    "` for four spaces.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the newline sequence, for instance `"\r\n"`.
    #[must_use]
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Sets whether table entries are indented on their own lines.
    #[must_use]
    pub fn with_indent_tables(mut self, indent_tables: bool) -> Self {
        self.indent_tables = indent_tables;
        self
    }

    /// Sets whether list elements are indented on their own lines.
    #[must_use]
    pub fn with_indent_lists(mut self, indent_lists: bool) -> Self {
        self.indent_lists = indent_lists;
        self
    }

    /// Sets whether a space follows each list separator. Composable with
    /// [`with_indent_lists`](Style::with_indent_lists): both a space and a
    /// newline may follow a separator.
    #[must_use]
    pub fn with_space_lists(mut self, space_lists: bool) -> Self {
        self.space_lists = space_lists;
        self
    }

    /// Sets whether a newline precedes a table's opening brace.
    #[must_use]
    pub fn with_newline_before_table(mut self, newline_before_table: bool) -> Self {
        self.newline_before_table = newline_before_table;
        self
    }

    /// Sets whether a newline precedes a list's opening bracket.
    #[must_use]
    pub fn with_newline_before_list(mut self, newline_before_list: bool) -> Self {
        self.newline_before_list = newline_before_list;
        self
    }
}

//! Shared lexical primitives for text-format readers.
//!
//! Every line-oriented configuration grammar needs the same things at every
//! token boundary: skip whitespace, skip whole-line `#` comments, and decide
//! whether a run of characters is a valid unquoted key. These are factored out
//! here once, as stateless functions over a [`Cursor`], so that independent
//! grammars share one consistent definition.
//!
//! Two skip variants exist on purpose. [`skip_insignificant`] elides comments
//! and is the right call between tokens; [`skip_spacing`] treats `#` as an
//! ordinary character and is the only safe variant inside constructs where `#`
//! is literal data (for example multi-line strings).
//!
//! ## Examples
//!
//! ```rust
//! use conftext::{scan, StrCursor};
//!
//! let mut cursor = StrCursor::new("  # comment\n  42");
//! assert_eq!(scan::skip_insignificant(&mut cursor).unwrap(), '4');
//! ```

use crate::{Cursor, Error, Result};

/// Characters skipped between tokens: tab, space, linefeed, carriage return.
pub const WHITESPACE_OR_NEWLINE: &[char] = &['\t', ' ', '\n', '\r'];

/// Characters skipped within a line: tab and space.
pub const WHITESPACE: &[char] = &['\t', ' '];

/// The line terminator recognized by [`read_line`].
pub const NEWLINE: &[char] = &['\n'];

/// Characters never valid in a bare key, even in lenient mode.
const BARE_KEY_FORBIDDEN: &[char] = &['.', '[', ']', '#', '='];

/// Returns the next "useful" character, consuming it. Skips whitespace,
/// newlines and `#` comments (each comment is consumed up to, not including,
/// its line terminator).
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the input ends before a useful
/// character is found, including inside a trailing comment. Whether that EOF
/// is a valid end of document or a syntax error is the calling parser's
/// decision.
pub fn skip_insignificant(cursor: &mut impl Cursor) -> Result<char> {
    let mut next = cursor.next_skipping(WHITESPACE_OR_NEWLINE);
    while next == Some('#') {
        cursor.take_until(NEWLINE)?;
        next = cursor.next_skipping(WHITESPACE_OR_NEWLINE);
    }
    next.ok_or(Error::UnexpectedEof)
}

/// Returns the next non-space character, consuming it. Skips tab and space,
/// plus linefeed and carriage return when `include_newlines` is true.
///
/// Unlike [`skip_insignificant`], a `#` is returned as-is, never treated as a
/// comment start.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the input ends before a non-space
/// character is found.
pub fn skip_spacing(cursor: &mut impl Cursor, include_newlines: bool) -> Result<char> {
    let skip = if include_newlines {
        WHITESPACE_OR_NEWLINE
    } else {
        WHITESPACE
    };
    cursor.next_skipping(skip).ok_or(Error::UnexpectedEof)
}

/// Consumes and returns all the characters before the next newline. The
/// newline itself is left unconsumed for the caller to handle.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the input ends before a newline.
pub fn read_line(cursor: &mut impl Cursor) -> Result<String> {
    cursor.take_until(NEWLINE)
}

/// Returns `true` if `c` may appear in a bare (unquoted) key.
///
/// Strict mode accepts ASCII letters, ASCII digits, `-` and `_`. Lenient mode
/// accepts any character above the space character except `.`, `[`, `]`, `#`
/// and `=`, widening bare keys to punctuation and non-ASCII text.
#[must_use]
pub fn is_identifier_char(c: char, lenient: bool) -> bool {
    if lenient {
        return c > ' ' && !BARE_KEY_FORBIDDEN.contains(&c);
    }
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Returns `true` if every character of `s` satisfies [`is_identifier_char`]
/// under the same `lenient` flag. The empty sequence is trivially valid.
#[must_use]
pub fn is_identifier_sequence(s: &str, lenient: bool) -> bool {
    s.chars().all(|c| is_identifier_char(c, lenient))
}

//! Error types shared by the writer and the scanning primitives.
//!
//! ## Error Categories
//!
//! - [`Error::Io`]: the character sink reported a write failure
//! - [`Error::UnexpectedEof`]: input ended while a scanning primitive was still
//!   looking for a terminator
//! - [`Error::InvalidRoot`]: a non-table value was handed to the writer's entry
//!   point
//!
//! End of input is deliberately its own variant rather than a generic message:
//! a format parser often treats EOF at a token boundary as the valid end of a
//! document, and only EOF in the middle of a construct as an error. Matching on
//! [`Error::UnexpectedEof`] lets callers make that call.
//!
//! ## Examples
//!
//! ```rust
//! use conftext::{scan, Error, StrCursor};
//!
//! let mut cursor = StrCursor::new("   # only a comment");
//! match scan::skip_insignificant(&mut cursor) {
//!     Err(Error::UnexpectedEof) => {} // no useful character in this input
//!     other => panic!("expected end of input, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors reported by this crate.
///
/// There are no internal retries anywhere: every failure is a hard stop of the
/// current operation, surfaced to the immediate caller. Output already written
/// to a sink before a failure stays written; callers needing atomicity must
/// buffer externally.
#[derive(Debug, Error)]
pub enum Error {
    /// The character sink failed to accept output. The underlying
    /// [`std::io::Error`] is preserved unmodified.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// End of input reached while searching for a terminator or a useful
    /// character.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The value handed to the writer's entry point was not a table.
    #[error("top-level value must be a table, found {0}")]
    InvalidRoot(&'static str),

    /// Conversion or other caller-side error with a display message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an error with a custom display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftext::Error;
    ///
    /// let err = Error::custom("expected integer, found string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Returns `true` if this error is the distinguished end-of-input signal.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Error::UnexpectedEof)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

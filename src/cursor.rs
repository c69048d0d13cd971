//! Character input abstraction used by the scanning primitives.
//!
//! A [`Cursor`] is a forward-only view over a stream of characters. End of
//! input is signaled as `None` from [`peek`](Cursor::peek) and
//! [`next`](Cursor::next) rather than as an error, so callers decide for
//! themselves whether EOF at a given position is valid.
//!
//! The scanning primitives in [`scan`](crate::scan) only ever sequence calls
//! to this trait; they never reach around it, and they never read further than
//! the caller asked for.
//!
//! [`StrCursor`] is the in-memory implementation over `&str`. Buffered or
//! decoding implementations over readers belong to the caller.

use crate::{Error, Result};

/// A forward-only cursor over a character stream.
///
/// Implementors supply [`peek`](Cursor::peek) and [`next`](Cursor::next);
/// the set-skipping and read-until operations are provided in terms of them.
pub trait Cursor {
    /// Returns the next character without consuming it, or `None` at end of
    /// input.
    fn peek(&mut self) -> Option<char>;

    /// Consumes and returns the next character, or `None` at end of input.
    fn next(&mut self) -> Option<char>;

    /// Consumes every character belonging to `skip`, then consumes and returns
    /// the first character outside the set. Returns `None` if the input ends
    /// before such a character is found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftext::{Cursor, StrCursor};
    ///
    /// let mut cursor = StrCursor::new("  \t x");
    /// assert_eq!(cursor.next_skipping(&[' ', '\t']), Some('x'));
    /// ```
    fn next_skipping(&mut self, skip: &[char]) -> Option<char> {
        loop {
            match self.next() {
                Some(c) if skip.contains(&c) => continue,
                other => return other,
            }
        }
    }

    /// Consumes and returns every character before the first one belonging to
    /// `terminators`. The terminator itself is left unconsumed for the caller
    /// to handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`] if the input ends before a terminator
    /// is reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftext::{Cursor, StrCursor};
    ///
    /// let mut cursor = StrCursor::new("key = value\nrest");
    /// let line = cursor.take_until(&['\n']).unwrap();
    /// assert_eq!(line, "key = value");
    /// assert_eq!(cursor.peek(), Some('\n'));
    /// ```
    fn take_until(&mut self, terminators: &[char]) -> Result<String> {
        let mut taken = String::new();
        loop {
            match self.peek() {
                Some(c) if terminators.contains(&c) => return Ok(taken),
                Some(c) => {
                    self.next();
                    taken.push(c);
                }
                None => return Err(Error::UnexpectedEof),
            }
        }
    }
}

/// An in-memory [`Cursor`] over a string slice.
///
/// # Examples
///
/// ```rust
/// use conftext::{Cursor, StrCursor};
///
/// let mut cursor = StrCursor::new("ab");
/// assert_eq!(cursor.peek(), Some('a'));
/// assert_eq!(cursor.next(), Some('a'));
/// assert_eq!(cursor.next(), Some('b'));
/// assert_eq!(cursor.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> StrCursor<'a> {
    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        StrCursor { input, position: 0 }
    }

    /// Returns the unread remainder of the input.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Returns `true` if the whole input has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.input.len()
    }
}

impl Cursor for StrCursor<'_> {
    fn peek(&mut self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.input[self.position..].chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }
}

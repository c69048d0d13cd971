//! Character output abstraction used by the writer.
//!
//! A [`Sink`] accepts characters and string slices. A failed write propagates
//! as [`Error::Io`](crate::Error::Io) unmodified; this crate imposes no retry
//! or buffering policy of its own, and whatever was written before a failure
//! stays written.
//!
//! `String` implements [`Sink`] infallibly for in-memory rendering;
//! [`IoSink`] adapts any [`std::io::Write`] destination.

use crate::Result;
use std::io;

/// A character output destination.
pub trait Sink {
    /// Writes a single character.
    fn put_char(&mut self, c: char) -> Result<()>;

    /// Writes a string slice.
    fn put_str(&mut self, s: &str) -> Result<()> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }
}

impl Sink for String {
    fn put_char(&mut self, c: char) -> Result<()> {
        self.push(c);
        Ok(())
    }

    fn put_str(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }
}

/// Adapts an [`io::Write`] destination into a [`Sink`], encoding characters
/// as UTF-8.
///
/// # Examples
///
/// ```rust
/// use conftext::{IoSink, Sink};
///
/// let mut buffer = Vec::new();
/// let mut sink = IoSink::new(&mut buffer);
/// sink.put_str("size: ").unwrap();
/// sink.put_char('9').unwrap();
/// assert_eq!(buffer, b"size: 9");
/// ```
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    /// Wraps `inner` as a character sink.
    pub fn new(inner: W) -> Self {
        IoSink { inner }
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn put_char(&mut self, c: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.inner.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        Ok(())
    }

    fn put_str(&mut self, s: &str) -> Result<()> {
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }
}

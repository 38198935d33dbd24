//! Byte cursor with exactly one byte of pushback.

use std::io::BufRead;

use crate::classify::is_space;

/// Reads bytes one at a time from a [`BufRead`] source and lets the caller
/// return at most one byte to the front of the stream.
///
/// End of input is `None`, which is distinct from every byte value.
///
/// # Example
///
/// ```
/// use mini_scanf::ByteCursor;
///
/// let mut cursor = ByteCursor::new(&b"ab"[..]);
/// let a = cursor.next();
/// assert_eq!(a, Some(b'a'));
/// cursor.unread(a);
/// assert_eq!(cursor.next(), Some(b'a'));
/// assert_eq!(cursor.next(), Some(b'b'));
/// assert_eq!(cursor.next(), None);
/// ```
#[derive(Debug)]
pub struct ByteCursor<R> {
    /// The buffered reader to read from.
    reader: R,
    /// Byte returned by `pushback`, served before the reader.
    pending: Option<u8>,
    /// Number of bytes consumed so far, net of pushback.
    pos: usize,
}

impl<R: BufRead> ByteCursor<R> {
    pub fn new(reader: R) -> Self {
        ByteCursor {
            reader,
            pending: None,
            pos: 0,
        }
    }

    /// Bytes consumed since the cursor was created.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the reader. A pushed-back byte is dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Returns the next unread byte, or `None` at end of input.
    ///
    /// Read errors other than `Interrupted` end the input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u8> {
        let byte = match self.pending.take() {
            Some(b) => Some(b),
            None => self.fill(),
        };
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    fn fill(&mut self) -> Option<u8> {
        loop {
            match self.reader.fill_buf() {
                Ok([]) => return None,
                Ok(buf) => {
                    let b = buf[0];
                    self.reader.consume(1);
                    return Some(b);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "read failed, treating as end of input");
                    return None;
                }
            }
        }
    }

    /// Makes `byte` the next value [`next`](Self::next) returns.
    ///
    /// # Panics
    ///
    /// Panics if a byte is already pushed back.
    pub fn pushback(&mut self, byte: u8) {
        assert!(
            self.pending.is_none(),
            "pushback while a byte is already pushed back"
        );
        self.pending = Some(byte);
        self.pos = self.pos.saturating_sub(1);
    }

    /// Pushes back a value returned by [`next`](Self::next). End of input is
    /// never pushed back.
    pub fn unread(&mut self, byte: Option<u8>) {
        if let Some(b) = byte {
            self.pushback(b);
        }
    }

    /// Consumes a run of whitespace (possibly empty) and leaves the cursor on
    /// the first byte after it.
    pub fn skip_whitespace(&mut self) {
        loop {
            match self.next() {
                Some(b) if is_space(b) => {}
                other => {
                    self.unread(other);
                    return;
                }
            }
        }
    }
}

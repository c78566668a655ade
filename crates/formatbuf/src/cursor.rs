//! Bounded write cursor over a caller-owned byte buffer.
//!
//! Every phase of the formatter writes through a single [`Cursor`]. The last
//! byte of the destination is reserved for the NUL terminator, so the cursor
//! accepts at most `capacity - 1` content bytes and silently drops the rest.

/// Write position into a destination of at least one byte.
#[derive(Debug)]
pub(crate) struct Cursor<'b> {
    buf: &'b mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'b> Cursor<'b> {
    /// Starts writing at offset zero.
    ///
    /// `buf` must not be empty; callers check this (statically for arrays,
    /// at runtime for slices) before constructing a cursor.
    pub(crate) fn new(buf: &'b mut [u8]) -> Self {
        debug_assert!(!buf.is_empty(), "cursor needs room for the terminator");
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    /// Resumes writing after `pos` existing content bytes.
    pub(crate) fn resume(buf: &'b mut [u8], pos: usize) -> Self {
        debug_assert!(pos < buf.len());
        Self {
            buf,
            pos,
            truncated: false,
        }
    }

    #[inline]
    fn limit(&self) -> usize {
        self.buf.len() - 1
    }

    /// Content bytes still writable before the terminator slot.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.limit() - self.pos
    }

    /// `true` once only the terminator slot is left.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.pos >= self.limit()
    }

    /// `true` if any write had to drop bytes.
    pub(crate) fn truncated(&self) -> bool {
        self.truncated
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        if self.is_full() {
            self.truncated = true;
            return;
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    /// Copies as much of `bytes` as fits.
    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        let n = bytes.len().min(self.remaining());
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        if n < bytes.len() {
            self.truncated = true;
        }
    }

    /// Copies `bytes` up to their own NUL terminator, if any.
    pub(crate) fn extend_c(&mut self, bytes: &[u8]) {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        self.extend(&bytes[..end]);
    }

    /// Writes the terminator and returns the content length.
    pub(crate) fn finish(self) -> usize {
        self.buf[self.pos] = 0;
        self.pos
    }
}

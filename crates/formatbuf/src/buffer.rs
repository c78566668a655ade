//! [`FormatBuffer`], the owned fixed-capacity destination.
//!
//! Rendering goes through the dispatcher; appending through `fmt::Write`.
//! Both keep the content NUL-terminated inside the storage.

use core::{
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
};

use bstr::BStr;

use crate::{Arg, FormatError, cursor::Cursor, dispatch};

/// A fixed-capacity, NUL-terminated text buffer that owns its storage.
///
/// The buffer holds at most `M - 1` content bytes followed by a NUL. Every
/// operation keeps that invariant: output that does not fit is truncated,
/// never written past the end. `M` must be greater than zero; a zero
/// capacity is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use formatbuf::{FormatBuffer, args};
///
/// let mut buf = FormatBuffer::<16>::new();
/// buf.print("t=%d ms", &args![-40i32]);
/// assert_eq!(buf, "t=-40 ms");
///
/// // Output is clipped to the capacity, and stays terminated.
/// let small = FormatBuffer::<4>::with_format("%d", &args![12345i32]);
/// assert_eq!(small.as_c_str(), c"123");
/// ```
///
/// ```compile_fail
/// let buf = formatbuf::FormatBuffer::<0>::new();
/// ```
#[derive(Clone)]
pub struct FormatBuffer<const M: usize> {
    buf: [u8; M],
}

impl<const M: usize> FormatBuffer<M> {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(M > 0, "FormatBuffer capacity must be greater than zero") };
        Self { buf: [0; M] }
    }

    /// Creates a buffer holding `fmt` rendered with `args`.
    #[must_use]
    pub fn with_format(fmt: impl AsRef<[u8]>, args: &[Arg<'_>]) -> Self {
        let mut buffer = Self::new();
        buffer.print(fmt, args);
        buffer
    }

    /// Renders `fmt` with `args`, replacing the current content.
    ///
    /// Returns the content length in bytes. See the crate documentation for
    /// the format language.
    pub fn print(&mut self, fmt: impl AsRef<[u8]>, args: &[Arg<'_>]) -> usize {
        dispatch::render(&mut self.buf, fmt.as_ref(), args)
    }

    /// Resets the content to the empty string.
    pub fn clear(&mut self) {
        self.buf[0] = 0;
    }

    /// The content as a NUL-terminated C string.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        // The storage always holds a NUL, so the fallback is never taken.
        CStr::from_bytes_until_nul(&self.buf).unwrap_or_default()
    }

    /// The content bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.as_c_str().to_bytes()
    }

    /// The content bytes including the terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.as_c_str().to_bytes_with_nul()
    }

    /// The content as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidUtf8`] when a byte-string argument was
    /// not UTF-8, or when truncation cut a multi-byte character in half.
    pub fn to_str(&self) -> Result<&str, FormatError> {
        Ok(core::str::from_utf8(self.as_bytes())?)
    }

    /// Content length in bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// `true` when the content is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf[0] == 0
    }

    /// Total storage size, terminator included.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        M
    }

    /// `true` when the content occupies all `M - 1` usable bytes, which is
    /// the case whenever output has been truncated.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == M - 1
    }
}

impl<const M: usize> Default for FormatBuffer<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: usize> AsRef<[u8]> for FormatBuffer<M> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const M: usize> AsRef<CStr> for FormatBuffer<M> {
    fn as_ref(&self) -> &CStr {
        self.as_c_str()
    }
}

/// Appends after the current content, truncating like [`FormatBuffer::print`].
///
/// Text after an interior NUL is not part of the content and is dropped.
/// Returns [`fmt::Error`] once any bytes had to be dropped.
impl<const M: usize> fmt::Write for FormatBuffer<M> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let len = self.len();
        let mut cursor = Cursor::resume(&mut self.buf, len);
        let (text, had_nul) = match s.bytes().position(|b| b == 0) {
            Some(nul) => (&s.as_bytes()[..nul], true),
            None => (s.as_bytes(), false),
        };
        cursor.extend(text);
        let dropped = had_nul || cursor.truncated();
        cursor.finish();
        if dropped { Err(fmt::Error) } else { Ok(()) }
    }
}

impl<const M: usize> fmt::Display for FormatBuffer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl<const M: usize> fmt::Debug for FormatBuffer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatBuffer")
            .field("capacity", &M)
            .field("content", &BStr::new(self.as_bytes()))
            .finish()
    }
}

// Bytes after the terminator are stale and take no part in comparisons.
impl<const M: usize> PartialEq for FormatBuffer<M> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const M: usize> Eq for FormatBuffer<M> {}

impl<const M: usize> Hash for FormatBuffer<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<const M: usize> PartialEq<str> for FormatBuffer<M> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const M: usize> PartialEq<&str> for FormatBuffer<M> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const M: usize> PartialEq<[u8]> for FormatBuffer<M> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const M: usize> PartialEq<&[u8]> for FormatBuffer<M> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

#[cfg(feature = "serde")]
impl<const M: usize> serde::Serialize for FormatBuffer<M> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_str() {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(self.as_bytes()),
        }
    }
}

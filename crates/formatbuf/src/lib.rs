//! Bounded, allocation-free printf-style formatting into fixed-size buffers.
//!
//! `formatbuf` renders a small format language plus a list of typed
//! arguments into caller-owned storage. It never allocates, never panics on
//! bad input and never writes past the end of the destination: output that
//! does not fit is truncated, and the result is always NUL-terminated.
//!
//! # Format language
//!
//! | Directive | Argument kinds        | Output                                  |
//! |-----------|-----------------------|-----------------------------------------|
//! | `%d`      | signed integers       | base 10                                 |
//! | `%u`      | unsigned integers     | base 10                                 |
//! | `%x`      | any integer           | base 16, lowercase, unsigned bit pattern|
//! | `%b`      | any integer           | base 2, unsigned bit pattern            |
//! | `%s`      | strings, byte strings | copied up to their own NUL              |
//! | `%c`      | `char`                | the character                           |
//! | `%a`      | `f32`                 | hexadecimal-scientific, as C99 `%a`     |
//! | `%%`      | none                  | a literal `%`                           |
//!
//! There are no flags, widths or precisions. Pairing an argument with a
//! directive outside this table, or with an unknown directive, renders
//! nothing for that argument. If a directive is left over once the
//! arguments run out, it and the rest of the format text are copied as
//! written, with `%%` left intact.
//!
//! ```rust
//! use formatbuf::{FormatBuffer, args, format};
//!
//! let buf = FormatBuffer::<32>::with_format("%s=%x (%a)", &args!["r1", 0xbeefu16, 1.5f32]);
//! assert_eq!(buf, "r1=beef (0x1.8p+0)");
//!
//! let mut raw = [0u8; 8];
//! let len = format(&mut raw, "%d%%", &args![-12i8]);
//! assert_eq!(&raw[..=len], b"-12%\0");
//! ```
//!
//! # Features
//!
//! - `log`: trace records (via the `log` facade) for skipped arguments and
//!   truncated output.
//! - `serde`: `Serialize` for [`FormatBuffer`].
//! - `fuzzing`: `arbitrary::Arbitrary` for [`Arg`].

#![no_std]

#[cfg(any(test, feature = "fuzzing"))]
extern crate std;

mod arg;
mod buffer;
mod cursor;
mod dispatch;
mod error;
mod float;
mod numbers;
mod scanner;
mod trace;

#[cfg(test)]
mod tests;

pub use arg::Arg;
pub use buffer::FormatBuffer;
pub use error::FormatError;

/// Renders `fmt` with `args` into a fixed-size array.
///
/// The array does not need to belong to a [`FormatBuffer`]; any
/// `[u8; N]` with `N > 0` works, and `N == 0` fails to compile. Returns the
/// content length; `buf[len]` is the NUL terminator.
pub fn format<const N: usize>(
    buf: &mut [u8; N],
    fmt: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> usize {
    const { assert!(N > 0, "destination must hold at least the terminator") };
    dispatch::render(buf, fmt.as_ref(), args)
}

/// Renders `fmt` with `args` into a slice whose size is only known at runtime.
///
/// Behaves like [`format`] once the slice has room for the terminator.
///
/// # Errors
///
/// Returns [`FormatError::ZeroCapacity`] if `buf` is empty; nothing is
/// written in that case.
pub fn format_slice(
    buf: &mut [u8],
    fmt: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<usize, FormatError> {
    if buf.is_empty() {
        return Err(FormatError::ZeroCapacity);
    }
    Ok(dispatch::render(buf, fmt.as_ref(), args))
}

/// Builds an array of [`Arg`]s from a heterogeneous list of values.
///
/// Each value goes through `Arg::from`, so only the supported kinds
/// compile.
///
/// ```rust
/// use formatbuf::{Arg, args};
///
/// let pack = args![1u8, -2i64, "three"];
/// assert_eq!(pack, [Arg::U8(1), Arg::I64(-2), Arg::Str(b"three")]);
/// ```
#[macro_export]
macro_rules! args {
    ( $( $arg:expr ),* $(,)? ) => {
        [ $( $crate::Arg::from($arg) ),* ]
    };
}

/// Creates a [`FormatBuffer`] from a format string and argument values.
///
/// The capacity is inferred from the binding's type.
///
/// ```rust
/// use formatbuf::{FormatBuffer, format_buffer};
///
/// let buf: FormatBuffer<16> = format_buffer!("%u%c", 42u32, '!');
/// assert_eq!(buf, "42!");
/// ```
#[macro_export]
macro_rules! format_buffer {
    ( $fmt:expr $(,)? ) => {
        $crate::FormatBuffer::with_format($fmt, &[])
    };
    ( $fmt:expr, $( $arg:expr ),+ $(,)? ) => {
        $crate::FormatBuffer::with_format($fmt, &$crate::args![$( $arg ),+])
    };
}

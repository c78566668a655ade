use core::ffi::CStr;

/// One formatting argument, drawn from the closed set of supported kinds.
///
/// Values are built with [`From`] (usually through the [`args!`] macro), and
/// `From` is only implemented for the kinds below. Passing any other type,
/// such as an `f64` or a `usize`, is a compile error rather than something
/// discovered while formatting.
///
/// ```rust
/// use formatbuf::{Arg, args};
///
/// let pack = args![-1i8, 7u64, 'x', "name", 0.5f32];
/// assert_eq!(pack[1], Arg::U64(7));
/// ```
///
/// ```compile_fail
/// use formatbuf::args;
///
/// let pack = args![1.0f64];
/// ```
///
/// [`args!`]: crate::args
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Arg<'a> {
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// A single character, written as its UTF-8 bytes.
    Char(char),
    /// A character sequence. Copying stops at the first NUL byte, if any.
    Str(&'a [u8]),
    /// A single-precision float.
    F32(f32),
}

impl Arg<'_> {
    /// Short name of the argument kind, used in trace records.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::I8(_) => "i8",
            Arg::I16(_) => "i16",
            Arg::I32(_) => "i32",
            Arg::I64(_) => "i64",
            Arg::U8(_) => "u8",
            Arg::U16(_) => "u16",
            Arg::U32(_) => "u32",
            Arg::U64(_) => "u64",
            Arg::Char(_) => "char",
            Arg::Str(_) => "str",
            Arg::F32(_) => "f32",
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Arg<'_> {
            #[inline]
            fn from(value: $ty) -> Self {
                Arg::$variant(value)
            }
        }
    )*};
}

impl_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    char => Char,
    f32 => F32,
}

impl<'a> From<&'a str> for Arg<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Arg::Str(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Arg::Str(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    #[inline]
    fn from(value: &'a [u8; N]) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    #[inline]
    fn from(value: &'a CStr) -> Self {
        Arg::Str(value.to_bytes())
    }
}

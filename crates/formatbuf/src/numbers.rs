//! Minimal-digit integer encoders for base 2, 10 and 16.
//!
//! Each encoder writes the least-significant digit first into a fixed-size
//! stack scratch ([`Digits`]) and reverses it in place. Scratch sizes are
//! chosen per width by the caller through the type aliases below; pushing
//! past them is a bug in the caller, not a runtime condition.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

/// Lowercase hexadecimal digit table.
pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Base-2 scratch for 32-bit values.
pub(crate) type Bin32 = Digits<32>;
/// Base-2 scratch for 64-bit values.
pub(crate) type Bin64 = Digits<64>;
/// Base-10 scratch for 32-bit values (10 digits plus sign).
pub(crate) type Dec32 = Digits<11>;
/// Base-10 scratch for 64-bit values (`u64::MAX` has 20 digits, `i64::MIN`
/// 19 plus sign).
pub(crate) type Dec64 = Digits<20>;
/// Base-16 scratch for 32-bit values.
pub(crate) type Hex32 = Digits<8>;
/// Base-16 scratch for 64-bit values.
pub(crate) type Hex64 = Digits<16>;

/// Fixed-capacity digit scratch living on the stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Digits<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> Digits<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, digit: u8) {
        self.buf[self.len] = digit;
        self.len += 1;
    }

    fn reverse(&mut self) {
        self.buf[..self.len].reverse();
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Unsigned machine words the encoders operate on.
pub(crate) trait Unsigned: Copy {
    fn is_zero(self) -> bool;
    /// Low `mask` bits as a table index.
    fn low(self, mask: u8) -> usize;
    fn shr(self, bits: u32) -> Self;
    /// `(self / 10, self % 10)`.
    fn div_rem_10(self) -> (Self, u8);
}

/// Signed machine words with a two's-complement magnitude.
pub(crate) trait Signed: Copy {
    type Unsigned: Unsigned;

    /// Magnitude and sign, computed without overflow for the minimum value.
    fn magnitude(self) -> (Self::Unsigned, bool);
}

macro_rules! impl_words {
    ($($s:ty => $u:ty),* $(,)?) => {$(
        impl Unsigned for $u {
            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn low(self, mask: u8) -> usize {
                (self & <$u>::from(mask)) as usize
            }

            #[inline]
            fn shr(self, bits: u32) -> Self {
                self >> bits
            }

            #[inline]
            fn div_rem_10(self) -> (Self, u8) {
                (self / 10, (self % 10) as u8)
            }
        }

        impl Signed for $s {
            type Unsigned = $u;

            #[inline]
            fn magnitude(self) -> ($u, bool) {
                // All ones for negative values, all zeros otherwise.
                let mask = self >> (<$s>::BITS - 1);
                ((self.wrapping_add(mask) ^ mask) as $u, mask != 0)
            }
        }
    )*};
}

impl_words!(i32 => u32, i64 => u64);

fn push_decimal<T: Unsigned, const N: usize>(digits: &mut Digits<N>, mut value: T) {
    loop {
        let (rest, digit) = value.div_rem_10();
        digits.push(b'0' + digit);
        value = rest;
        if value.is_zero() {
            break;
        }
    }
}

/// Binary digits of `value`, most significant first.
pub(crate) fn base2<T: Unsigned, const N: usize>(mut value: T) -> Digits<N> {
    let mut digits = Digits::new();
    loop {
        digits.push(b'0' + value.low(1) as u8);
        value = value.shr(1);
        if value.is_zero() {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Decimal digits of an unsigned `value`.
pub(crate) fn base10<T: Unsigned, const N: usize>(value: T) -> Digits<N> {
    let mut digits = Digits::new();
    push_decimal(&mut digits, value);
    digits.reverse();
    digits
}

/// Decimal digits of a signed `value`, with a leading `-` when negative.
pub(crate) fn base10_signed<T: Signed, const N: usize>(value: T) -> Digits<N> {
    let (magnitude, negative) = value.magnitude();
    let mut digits = Digits::new();
    push_decimal(&mut digits, magnitude);
    if negative {
        digits.push(b'-');
    }
    digits.reverse();
    digits
}

/// Lowercase hexadecimal digits of `value`.
pub(crate) fn base16<T: Unsigned, const N: usize>(mut value: T) -> Digits<N> {
    let mut digits = Digits::new();
    loop {
        digits.push(HEX_DIGITS[value.low(0xf)]);
        value = value.shr(4);
        if value.is_zero() {
            break;
        }
    }
    digits.reverse();
    digits
}

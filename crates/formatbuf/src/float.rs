//! Hexadecimal-scientific (`%a`) encoding of IEEE-754 single-precision values.
//!
//! The value is taken apart from its raw bit pattern, never through the
//! host's float printing. The 23-bit fraction is shown as six nibbles of
//! `fraction << 1`, which lines the first nibble up with the first four
//! bits after the binary point (the C99 layout).

use crate::{
    cursor::Cursor,
    numbers::{Dec32, Digits, HEX_DIGITS, base10},
};

const EXPONENT_BIAS: i32 = 127;
const EXPONENT_MAX: u32 = 0xff;
const FRACTION_BITS: u32 = 23;
const FRACTION_MASK: u32 = (1 << FRACTION_BITS) - 1;
const FRACTION_NIBBLES: u32 = 6;

/// Sign, biased exponent and fraction fields of an `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fields {
    negative: bool,
    exponent: u32,
    fraction: u32,
}

impl Fields {
    fn of(value: f32) -> Self {
        let bits = value.to_bits();
        Self {
            negative: bits >> 31 != 0,
            exponent: (bits >> FRACTION_BITS) & EXPONENT_MAX,
            fraction: bits & FRACTION_MASK,
        }
    }
}

/// All six fraction nibbles, leading and trailing zeros kept.
fn fraction_nibbles(fraction: u32) -> Digits<6> {
    let aligned = fraction << 1;
    let mut nibbles = Digits::new();
    for shift in (0..FRACTION_NIBBLES).rev() {
        nibbles.push(HEX_DIGITS[((aligned >> (shift * 4)) & 0xf) as usize]);
    }
    nibbles
}

fn strip_trailing_zeros(digits: &[u8]) -> &[u8] {
    let end = digits.iter().rposition(|&d| d != b'0').map_or(0, |i| i + 1);
    &digits[..end]
}

fn sign(out: &mut Cursor<'_>, negative: bool) {
    if negative {
        out.push(b'-');
    }
}

/// Renders `value` in `%a` notation.
pub(crate) fn encode(value: f32, out: &mut Cursor<'_>) {
    let Fields {
        negative,
        exponent,
        fraction,
    } = Fields::of(value);
    sign(out, negative);

    match (exponent, fraction) {
        (0, 0) => out.extend(b"0x0p+0"),
        (0, _) => {
            out.extend(b"0x0.");
            out.extend(fraction_nibbles(fraction).as_bytes());
            out.extend(b"p-126");
        }
        (EXPONENT_MAX, 0) => out.extend(b"inf"),
        (EXPONENT_MAX, _) => out.extend(b"nan"),
        _ => {
            if fraction == 0 {
                out.extend(b"0x1");
            } else {
                out.extend(b"0x1.");
                out.extend(strip_trailing_zeros(fraction_nibbles(fraction).as_bytes()));
            }
            // `exponent` is at most 254 here, so the cast is lossless.
            #[allow(clippy::cast_possible_wrap)]
            let unbiased = exponent as i32 - EXPONENT_BIAS;
            out.push(b'p');
            out.push(if unbiased < 0 { b'-' } else { b'+' });
            let digits: Dec32 = base10(unbiased.unsigned_abs());
            out.extend(digits.as_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn render(value: f32) -> std::string::String {
        let mut storage = [0u8; 32];
        let mut cursor = Cursor::new(&mut storage);
        encode(value, &mut cursor);
        let len = cursor.finish();
        std::string::String::from_utf8(storage[..len].to_vec()).unwrap()
    }

    #[rstest]
    #[case(1.0, "0x1p+0")]
    #[case(2.0, "0x1p+1")]
    #[case(0.5, "0x1p-1")]
    #[case(1.5, "0x1.8p+0")]
    #[case(-3.0, "-0x1.8p+1")]
    #[case(0.1, "0x1.99999ap-4")]
    #[case(f32::MAX, "0x1.fffffep+127")]
    #[case(f32::MIN_POSITIVE, "0x1p-126")]
    #[case(f32::EPSILON, "0x1p-23")]
    fn normal_values(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(render(value), expected);
    }

    #[rstest]
    #[case(0.0, "0x0p+0")]
    #[case(-0.0, "-0x0p+0")]
    #[case(f32::INFINITY, "inf")]
    #[case(f32::NEG_INFINITY, "-inf")]
    #[case(f32::NAN, "nan")]
    #[case(f32::from_bits(0xffc0_0000), "-nan")]
    #[case(f32::from_bits(0x7f80_0001), "nan")]
    fn special_values(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(render(value), expected);
    }

    #[rstest]
    #[case(0x0000_0001, "0x0.000002p-126")]
    #[case(0x0040_0000, "0x0.800000p-126")]
    #[case(0x007f_ffff, "0x0.fffffep-126")]
    #[case(0x8000_0001, "-0x0.000002p-126")]
    fn subnormals_keep_every_nibble(#[case] bits: u32, #[case] expected: &str) {
        assert_eq!(render(f32::from_bits(bits)), expected);
    }

    #[test]
    fn fields_split_raw_bits() {
        assert_eq!(
            Fields::of(-1.5),
            Fields {
                negative: true,
                exponent: 127,
                fraction: 0x40_0000,
            }
        );
    }

    #[test]
    fn truncated_float_stays_in_bounds() {
        let mut storage = [0xffu8; 5];
        let mut cursor = Cursor::new(&mut storage);
        encode(-1.5, &mut cursor);
        assert_eq!(cursor.finish(), 4);
        assert_eq!(&storage, b"-0x1\0");
    }
}

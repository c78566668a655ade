//! `%a` output checked against its grammar and decoded back to the bits.

use std::{string::String, sync::LazyLock, vec::Vec};

use quickcheck::QuickCheck;
use regex::Regex;

use crate::{FormatBuffer, args};

static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)(?:(inf)|(nan)|0x([01])(?:\.([0-9a-f]{1,6}))?p([+-][0-9]+))$").unwrap()
});

fn render(value: f32) -> String {
    let buf = FormatBuffer::<32>::with_format("%a", &args![value]);
    String::from(buf.to_str().unwrap())
}

/// Rebuilds the bit pattern from a rendered literal; `None` for NaN.
fn decode(text: &str) -> Option<u32> {
    let caps = GRAMMAR.captures(text).unwrap_or_else(|| panic!("{text:?} is not a hex float"));
    let sign = if caps[1].is_empty() { 0 } else { 1 << 31 };
    if caps.get(2).is_some() {
        return Some(sign | 0xff << 23);
    }
    if caps.get(3).is_some() {
        return None;
    }
    let nibbles = caps.get(5).map_or("", |m| m.as_str());
    let digits = u32::from_str_radix(if nibbles.is_empty() { "0" } else { nibbles }, 16).unwrap();
    let aligned = digits << (4 * (6 - nibbles.len()));
    let fraction = aligned >> 1;
    let exponent: i32 = caps[6].parse().unwrap();
    if &caps[4] == "0" {
        // Zero keeps no digits, subnormals keep all six.
        assert!(
            (fraction == 0 && nibbles.is_empty() && exponent == 0)
                || (nibbles.len() == 6 && exponent == -126),
            "bad subnormal layout {text:?}"
        );
        return Some(sign | fraction);
    }
    assert!(!nibbles.ends_with('0'), "normal fraction keeps trailing zeros in {text:?}");
    let biased = u32::try_from(exponent + 127).unwrap();
    Some(sign | biased << 23 | fraction)
}

#[test]
fn every_bit_pattern_decodes_back() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bits: u32) -> bool {
        let value = f32::from_bits(bits);
        let text = render(value);
        match decode(&text) {
            Some(decoded) => decoded == bits,
            None => value.is_nan() && text.starts_with('-') == value.is_sign_negative(),
        }
    }

    QuickCheck::new()
        .tests(10_000)
        .quickcheck(prop as fn(u32) -> bool);
}

#[test]
fn boundary_patterns_decode_back() {
    let boundaries: Vec<u32> = [
        0x0000_0000,
        0x0000_0001,
        0x007f_ffff,
        0x0080_0000,
        0x3f80_0000,
        0x7f7f_ffff,
        0x7f80_0000,
    ]
    .into_iter()
    .flat_map(|bits| [bits, bits | 0x8000_0000])
    .collect();
    for bits in boundaries {
        assert_eq!(decode(&render(f32::from_bits(bits))), Some(bits));
    }
}

#[test]
fn documented_values() {
    assert_eq!(render(1.0), "0x1p+0");
    assert_eq!(render(0.0), "0x0p+0");
    assert_eq!(render(-0.0), "-0x0p+0");
    assert_eq!(render(f32::INFINITY), "inf");
    assert_eq!(render(f32::NAN), "nan");
    assert_eq!(render(-f32::NAN), "-nan");
}

//! Argument dispatch: pairs each argument with the directive scanned for it.
//!
//! Arguments are consumed strictly in order. A pairing outside the
//! compatibility table below renders nothing, and arguments that arrive
//! after the output filled up or the format text ran out render nothing
//! either. Neither case is an error.
//!
//! | Kind                  | Specifiers      |
//! |-----------------------|-----------------|
//! | `I8`/`I16`/`I32`      | `b`, `d`, `x`   |
//! | `I64`                 | `b`, `d`, `x`   |
//! | `U8`/`U16`/`U32`      | `b`, `u`, `x`   |
//! | `U64`                 | `b`, `u`, `x`   |
//! | `Char`                | `c`             |
//! | `Str`                 | `s`             |
//! | `F32`                 | `a`             |
//!
//! `b` and `x` always show the unsigned bit pattern of the argument's own
//! width, so `-1i8` prints as `ff`, not `ffffffff`.

use crate::{
    arg::Arg,
    cursor::Cursor,
    float,
    numbers::{
        Bin32, Bin64, Dec32, Dec64, Digits, Hex32, Hex64, base2, base10, base10_signed, base16,
    },
    scanner::{Scan, Scanner, Specifier},
    trace::trace,
};

/// Renders `fmt` with `args` into `out` and returns the content length.
///
/// `out` must hold at least one byte; the byte after the content is always
/// set to NUL.
pub(crate) fn render(out: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> usize {
    let mut cursor = Cursor::new(out);
    let mut scanner = Scanner::new(fmt);
    let mut pending = scanner.scan(&mut cursor);

    for arg in args {
        match pending {
            Scan::Directive(directive) => {
                if !render_arg(*arg, directive.spec, &mut cursor) {
                    trace!(
                        "{} argument does not pair with %{}, skipped",
                        arg.kind(),
                        bstr::BStr::new(directive.text)
                    );
                }
                pending = scanner.scan(&mut cursor);
            }
            Scan::End | Scan::Full => {
                trace!("{} argument has no directive left, skipped", arg.kind());
            }
        }
    }

    // A directive left without an argument is echoed, and the text after it
    // is copied as written.
    if let Scan::Directive(directive) = pending {
        cursor.push(b'%');
        cursor.extend(directive.text);
        cursor.extend_c(scanner.rest());
    }

    if cursor.truncated() || pending == Scan::Full {
        trace!("output reached capacity, truncated: {}", cursor.truncated());
    }
    cursor.finish()
}

fn emit<const N: usize>(out: &mut Cursor<'_>, digits: &Digits<N>) {
    out.extend(digits.as_bytes());
}

/// Renders one argument; `false` when the pairing is not in the table.
fn render_arg(arg: Arg<'_>, spec: Specifier, out: &mut Cursor<'_>) -> bool {
    match arg {
        Arg::I8(v) => {
            let bits = u8::from_ne_bytes(v.to_ne_bytes());
            signed32(i32::from(v), u32::from(bits), spec, out)
        }
        Arg::I16(v) => {
            let bits = u16::from_ne_bytes(v.to_ne_bytes());
            signed32(i32::from(v), u32::from(bits), spec, out)
        }
        Arg::I32(v) => signed32(v, u32::from_ne_bytes(v.to_ne_bytes()), spec, out),
        Arg::I64(v) => signed64(v, spec, out),
        Arg::U8(v) => unsigned32(u32::from(v), spec, out),
        Arg::U16(v) => unsigned32(u32::from(v), spec, out),
        Arg::U32(v) => unsigned32(v, spec, out),
        Arg::U64(v) => unsigned64(v, spec, out),
        Arg::Char(c) if spec == Specifier::Char => {
            if c != '\0' {
                let mut utf8 = [0u8; 4];
                out.extend(c.encode_utf8(&mut utf8).as_bytes());
            }
            true
        }
        Arg::Str(s) if spec == Specifier::Str => {
            out.extend_c(s);
            true
        }
        Arg::F32(v) if spec == Specifier::HexFloat => {
            float::encode(v, out);
            true
        }
        Arg::Char(_) | Arg::Str(_) | Arg::F32(_) => false,
    }
}

/// `value` for `%d`, `bits` (same-width unsigned pattern) for `%b`/`%x`.
fn signed32(value: i32, bits: u32, spec: Specifier, out: &mut Cursor<'_>) -> bool {
    match spec {
        Specifier::Binary => {
            let digits: Bin32 = base2(bits);
            emit(out, &digits);
            true
        }
        Specifier::SignedDecimal => {
            let digits: Dec32 = base10_signed(value);
            emit(out, &digits);
            true
        }
        Specifier::Hex => {
            let digits: Hex32 = base16(bits);
            emit(out, &digits);
            true
        }
        _ => false,
    }
}

fn signed64(value: i64, spec: Specifier, out: &mut Cursor<'_>) -> bool {
    let bits = u64::from_ne_bytes(value.to_ne_bytes());
    match spec {
        Specifier::Binary => {
            let digits: Bin64 = base2(bits);
            emit(out, &digits);
            true
        }
        Specifier::SignedDecimal => {
            let digits: Dec64 = base10_signed(value);
            emit(out, &digits);
            true
        }
        Specifier::Hex => {
            let digits: Hex64 = base16(bits);
            emit(out, &digits);
            true
        }
        _ => false,
    }
}

fn unsigned32(value: u32, spec: Specifier, out: &mut Cursor<'_>) -> bool {
    match spec {
        Specifier::Binary => {
            let digits: Bin32 = base2(value);
            emit(out, &digits);
            true
        }
        Specifier::UnsignedDecimal => {
            let digits: Dec32 = base10(value);
            emit(out, &digits);
            true
        }
        Specifier::Hex => {
            let digits: Hex32 = base16(value);
            emit(out, &digits);
            true
        }
        _ => false,
    }
}

fn unsigned64(value: u64, spec: Specifier, out: &mut Cursor<'_>) -> bool {
    match spec {
        Specifier::Binary => {
            let digits: Bin64 = base2(value);
            emit(out, &digits);
            true
        }
        Specifier::UnsignedDecimal => {
            let digits: Dec64 = base10(value);
            emit(out, &digits);
            true
        }
        Specifier::Hex => {
            let digits: Hex64 = base16(value);
            emit(out, &digits);
            true
        }
        _ => false,
    }
}

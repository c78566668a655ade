//! Format scanner: copies literal text and stops at each conversion.
//!
//! The scanner walks the format text once, left to right. Literal bytes go
//! straight to the output cursor; `%%` collapses to a single `%`; `%` followed
//! by anything else ends the scan and hands that character to the
//! dispatcher. A NUL byte ends the text as it would a C string.

use crate::cursor::Cursor;

const MARKER: u8 = b'%';

/// The character after a conversion marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Specifier {
    /// `%b`: base 2, unsigned bit pattern.
    Binary,
    /// `%d`: signed base 10.
    SignedDecimal,
    /// `%u`: unsigned base 10.
    UnsignedDecimal,
    /// `%x`: base 16, lowercase, unsigned bit pattern.
    Hex,
    /// `%s`: character sequence.
    Str,
    /// `%c`: single character.
    Char,
    /// `%a`: hexadecimal-scientific float.
    HexFloat,
    /// Anything else. Pairs with no argument kind.
    Unknown(u8),
}

impl Specifier {
    /// Classifies the first byte after a conversion marker.
    #[must_use]
    pub(crate) fn from_byte(byte: u8) -> Self {
        match byte {
            b'b' => Specifier::Binary,
            b'd' => Specifier::SignedDecimal,
            b'u' => Specifier::UnsignedDecimal,
            b'x' => Specifier::Hex,
            b's' => Specifier::Str,
            b'c' => Specifier::Char,
            b'a' => Specifier::HexFloat,
            other => Specifier::Unknown(other),
        }
    }
}

/// A conversion found in the format text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Directive<'f> {
    pub(crate) spec: Specifier,
    /// The specifier's source bytes (one byte, or a whole UTF-8 sequence).
    pub(crate) text: &'f [u8],
}

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan<'f> {
    /// A conversion is waiting for an argument.
    Directive(Directive<'f>),
    /// The format text is exhausted.
    End,
    /// Only the terminator slot is left in the output.
    Full,
}

#[derive(Debug)]
pub(crate) struct Scanner<'f> {
    fmt: &'f [u8],
    pos: usize,
}

impl<'f> Scanner<'f> {
    pub(crate) fn new(fmt: &'f [u8]) -> Self {
        Self { fmt, pos: 0 }
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        match self.fmt.get(self.pos + offset) {
            Some(0) | None => None,
            Some(&b) => Some(b),
        }
    }

    /// Length of the UTF-8 sequence starting at `self.pos + 1`.
    fn spec_len(&self, lead: u8) -> usize {
        if lead.is_ascii() {
            return 1;
        }
        let mut len = 1;
        while let Some(b) = self.peek_at(1 + len) {
            if b & 0xc0 != 0x80 {
                break;
            }
            len += 1;
        }
        len
    }

    /// The format text not yet scanned, exactly as written.
    pub(crate) fn rest(&self) -> &'f [u8] {
        &self.fmt[self.pos..]
    }

    /// Copies literal text into `out` until the next conversion.
    pub(crate) fn scan(&mut self, out: &mut Cursor<'_>) -> Scan<'f> {
        loop {
            if out.is_full() {
                return Scan::Full;
            }
            let Some(byte) = self.peek_at(0) else {
                return Scan::End;
            };
            if byte != MARKER {
                out.push(byte);
                self.pos += 1;
                continue;
            }
            match self.peek_at(1) {
                None => {
                    // A lone trailing marker is literal text.
                    out.push(MARKER);
                    self.pos += 1;
                    return Scan::End;
                }
                Some(MARKER) => {
                    out.push(MARKER);
                    self.pos += 2;
                }
                Some(lead) => {
                    let start = self.pos + 1;
                    let end = start + self.spec_len(lead);
                    self.pos = end;
                    return Scan::Directive(Directive {
                        spec: Specifier::from_byte(lead),
                        text: &self.fmt[start..end],
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn scan_once(fmt: &[u8]) -> (Scan<'_>, std::vec::Vec<u8>) {
        let mut storage = [0u8; 32];
        let mut cursor = Cursor::new(&mut storage);
        let scan = Scanner::new(fmt).scan(&mut cursor);
        let len = cursor.finish();
        (scan, storage[..len].to_vec())
    }

    #[rstest]
    #[case(b'b', Specifier::Binary)]
    #[case(b'd', Specifier::SignedDecimal)]
    #[case(b'u', Specifier::UnsignedDecimal)]
    #[case(b'x', Specifier::Hex)]
    #[case(b's', Specifier::Str)]
    #[case(b'c', Specifier::Char)]
    #[case(b'a', Specifier::HexFloat)]
    #[case(b'q', Specifier::Unknown(b'q'))]
    #[case(b'X', Specifier::Unknown(b'X'))]
    fn classifies_specifiers(#[case] byte: u8, #[case] expected: Specifier) {
        assert_eq!(Specifier::from_byte(byte), expected);
    }

    #[test]
    fn stops_at_directive_without_copying_marker() {
        let (scan, out) = scan_once(b"id=%d!");
        assert_eq!(
            scan,
            Scan::Directive(Directive {
                spec: Specifier::SignedDecimal,
                text: b"d",
            })
        );
        assert_eq!(out, b"id=");
    }

    #[test]
    fn escaped_marker_collapses() {
        let (scan, out) = scan_once(b"100%% done");
        assert_eq!(scan, Scan::End);
        assert_eq!(out, b"100% done");
    }

    #[test]
    fn trailing_marker_is_literal() {
        let (scan, out) = scan_once(b"50%");
        assert_eq!(scan, Scan::End);
        assert_eq!(out, b"50%");
    }

    #[test]
    fn nul_ends_format_text() {
        let (scan, out) = scan_once(b"ab\0%d");
        assert_eq!(scan, Scan::End);
        assert_eq!(out, b"ab");
    }

    #[test]
    fn marker_before_nul_is_literal() {
        let (scan, out) = scan_once(b"x%\0d");
        assert_eq!(scan, Scan::End);
        assert_eq!(out, b"x%");
    }

    #[test]
    fn multibyte_specifier_is_consumed_whole() {
        let fmt = "%é.".as_bytes();
        let (scan, out) = scan_once(fmt);
        assert_eq!(
            scan,
            Scan::Directive(Directive {
                spec: Specifier::Unknown(0xc3),
                text: "é".as_bytes(),
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn reports_full_before_reading_more() {
        let mut storage = [0u8; 3];
        let mut cursor = Cursor::new(&mut storage);
        let mut scanner = Scanner::new(b"abc%d");
        assert_eq!(scanner.scan(&mut cursor), Scan::Full);
        assert_eq!(cursor.finish(), 2);
        assert_eq!(&storage, b"ab\0");
    }

    #[test]
    fn rest_starts_after_directive() {
        let mut storage = [0u8; 8];
        let mut cursor = Cursor::new(&mut storage);
        let mut scanner = Scanner::new(b"a%s b%%");
        assert!(matches!(scanner.scan(&mut cursor), Scan::Directive(_)));
        assert_eq!(scanner.rest(), b" b%%");
    }

    #[test]
    fn resumes_after_directive() {
        let mut storage = [0u8; 16];
        let mut cursor = Cursor::new(&mut storage);
        let mut scanner = Scanner::new(b"%s and %c.");
        assert!(matches!(scanner.scan(&mut cursor), Scan::Directive(_)));
        assert!(matches!(scanner.scan(&mut cursor), Scan::Directive(_)));
        assert_eq!(scanner.scan(&mut cursor), Scan::End);
        assert_eq!(cursor.finish(), 6);
        assert_eq!(&storage[..7], b" and .\0");
    }
}

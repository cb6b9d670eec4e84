//! ASCII-only byte classification.
//!
//! Every predicate is a single indexed read into a 256-entry table built at
//! compile time. Nothing here consults the host locale or Unicode category
//! data: bytes `>= 0x80` are never digits, signs, or space, whatever the
//! surrounding encoding happens to be.
//!
//! The terminator byte (`0x00`) has an empty class, so every `eat_while`
//! loop driven by these predicates stops at the end of the text.

use bitflags::bitflags;

bitflags! {
    /// Lexical role(s) of a single byte within a numeric literal.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ByteClass: u8 {
        /// `0`-`9`.
        const DIGIT = 1 << 0;
        /// Horizontal or vertical ASCII space: ` `, `\t`, `\n`, VT, FF, `\r`.
        const SPACE = 1 << 1;
        /// `+` or `-`.
        const SIGN = 1 << 2;
        /// `e` or `E`.
        const EXPONENT_MARKER = 1 << 3;
        /// `.`, the only decimal separator ever recognized.
        const DECIMAL_POINT = 1 << 4;
        /// `%`.
        const PERCENT = 1 << 5;
    }
}

/// Class of a byte, evaluated at compile time to fill [`BYTE_CLASS`].
const fn class_of(b: u8) -> ByteClass {
    match b {
        b'0'..=b'9' => ByteClass::DIGIT,
        b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => ByteClass::SPACE,
        b'+' | b'-' => ByteClass::SIGN,
        b'e' | b'E' => ByteClass::EXPONENT_MARKER,
        b'.' => ByteClass::DECIMAL_POINT,
        b'%' => ByteClass::PERCENT,
        _ => ByteClass::empty(),
    }
}

/// 256-entry classification table.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
pub static BYTE_CLASS: [ByteClass; 256] = {
    let mut table = [ByteClass::empty(); 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = class_of(i as u8);
        i += 1;
    }
    table
};

/// Returns the class of `b`.
#[inline]
pub fn classify(b: u8) -> ByteClass {
    BYTE_CLASS[b as usize]
}

/// `0`-`9` only.
#[inline]
pub fn is_ascii_decimal_digit(b: u8) -> bool {
    classify(b).contains(ByteClass::DIGIT)
}

/// Space, tab, newline, vertical tab, form feed, carriage return.
///
/// This is also exactly the C-locale `isspace` set.
#[inline]
pub fn is_ascii_horizontal_or_vertical_space(b: u8) -> bool {
    classify(b).contains(ByteClass::SPACE)
}

#[inline]
pub fn is_sign(b: u8) -> bool {
    classify(b).contains(ByteClass::SIGN)
}

#[inline]
pub fn is_exponent_marker(b: u8) -> bool {
    classify(b).contains(ByteClass::EXPONENT_MARKER)
}

//! Locale-fixed text-to-`f64` conversion.
//!
//! [`digits_to_double`] converts the leading numeric prefix of narrow text
//! the way C `strtod` does under the "C" locale: the decimal point is
//! always `.`, there is no digit grouping, and no process or thread locale
//! setting can change that.
//!
//! The rules live in a single [`InvariantGrammar`] value, [`INVARIANT`],
//! built at compile time. It holds no mutable state, so any number of
//! threads can convert through it at once without coordination.

use numlit_core::ascii::BYTE_CLASS;
use numlit_core::{ByteClass, Cursor};
use tracing::trace;

/// Fixed numeric formatting rules shared by every conversion.
#[derive(Debug)]
pub struct InvariantGrammar {
    /// The only recognized decimal separator.
    decimal_point: u8,
    /// ASCII-only classification, shared with the scanner.
    classes: &'static [ByteClass; 256],
}

/// The process-wide grammar. Constructed at compile time, never mutated.
pub static INVARIANT: InvariantGrammar = InvariantGrammar {
    decimal_point: b'.',
    classes: &BYTE_CLASS,
};

/// Result of converting a numeric prefix.
///
/// `end` is the number of bytes consumed, counted from the start of the
/// input (leading space included). `end == 0` means nothing was
/// convertible; `value` is then `0.0` and must not be taken as a parsed
/// zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converted {
    pub value: f64,
    pub end: usize,
}

impl Converted {
    const NOTHING: Self = Self { value: 0.0, end: 0 };

    /// `true` when no bytes were consumed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.end == 0
    }
}

impl InvariantGrammar {
    pub fn decimal_point(&self) -> u8 {
        self.decimal_point
    }

    #[inline]
    fn is(&self, b: u8, class: ByteClass) -> bool {
        self.classes[b as usize].contains(class)
    }

    /// Locate the longest convertible prefix.
    ///
    /// Returns `(start, end)` where `start` is the first non-space byte.
    /// Accepts a superset of the scanner grammar minus the percent sign:
    /// the mantissa needs a digit on at least one side of the point, and
    /// an exponent marker without digits is left unconsumed.
    pub fn numeric_prefix(&self, text: &[u8]) -> Option<(usize, usize)> {
        let digit = |b| self.is(b, ByteClass::DIGIT);
        let sign = |b| self.is(b, ByteClass::SIGN);

        let mut cursor = Cursor::new(text);
        cursor.eat_while(|b| self.is(b, ByteClass::SPACE));
        let start = cursor.pos();

        cursor.eat_if(sign);
        let mut mantissa_digits = cursor.eat_while(digit);
        if cursor.eat_if(|b| b == self.decimal_point) {
            mantissa_digits += cursor.eat_while(digit);
        }
        if mantissa_digits == 0 {
            return None;
        }

        let before_exponent = cursor;
        if cursor.eat_if(|b| self.is(b, ByteClass::EXPONENT_MARKER)) {
            cursor.eat_if(sign);
            if cursor.eat_while(digit) == 0 {
                cursor = before_exponent;
            }
        }

        Some((start, cursor.pos()))
    }

    /// Convert the leading numeric prefix of `text`.
    pub fn convert(&self, text: &[u8]) -> Converted {
        let Some((start, end)) = self.numeric_prefix(text) else {
            return Converted::NOTHING;
        };

        // The prefix is pure ASCII, so it is always valid UTF-8.
        let parsed = std::str::from_utf8(&text[start..end])
            .ok()
            .and_then(|digits| digits.parse::<f64>().ok());

        match parsed {
            Some(value) => Converted { value, end },
            None => {
                trace!(start, end, "numeric prefix rejected by f64 parser");
                Converted::NOTHING
            }
        }
    }
}

/// Convert the leading numeric prefix of `text` with [`INVARIANT`].
///
/// ```
/// let c = numlit::digits_to_double(b"  2.5e1 apples");
/// assert_eq!(c.value, 25.0);
/// assert_eq!(c.end, 7);
/// ```
#[inline]
pub fn digits_to_double(text: &[u8]) -> Converted {
    INVARIANT.convert(text)
}

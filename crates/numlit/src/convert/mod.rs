//! Literal-to-value conversion with percent handling.
//!
//! These entry points never panic and never unwind. Failure is reported
//! through [`UNDEFINED`] (a quiet NaN), through `Option`, or through a
//! `bool`, depending on the entry point.
//!
//! Floating-point conversion goes scanner first, then the locale-fixed
//! primitive: the scanner decides *whether* the text is a literal and
//! where it ends, the primitive decides its value. Integer conversion
//! ([`parse_integer`]) is a separate, more permissive path.

use numlit_core::ascii::{is_ascii_decimal_digit, is_ascii_horizontal_or_vertical_space};
use numlit_core::{find_numeric_literal, is_fully_numeric, Cursor, LiteralSpan};
use tracing::trace;

use crate::invariant::digits_to_double;

/// Value returned when text is not a numeric literal.
///
/// A quiet NaN, distinct from every finite value. Test with
/// [`is_undefined`], never with `==`.
pub const UNDEFINED: f64 = f64::NAN;

/// Percent literals are scaled by this factor.
const PERCENT_SCALE: f64 = 0.01;

/// Returns `true` if `x` is the undefined sentinel (any NaN).
#[inline]
pub fn is_undefined(x: f64) -> bool {
    x.is_nan()
}

/// Convert the value of an already scanned literal.
///
/// `span` must come from scanning `text`. Returns `None` only if the
/// primitive consumes nothing, which the scanner grammar rules out.
pub(crate) fn convert_span(text: &[u8], span: &LiteralSpan) -> Option<f64> {
    debug_assert!(!span.is_empty(), "scanner returned an empty literal");

    let converted = digits_to_double(text);
    if converted.is_failure() {
        trace!(start = span.start, end = span.end, "literal did not convert");
        return None;
    }
    debug_assert_eq!(
        converted.end,
        span.digits_end(),
        "scanner and primitive disagree on literal extent"
    );

    if span.is_percent() {
        Some(PERCENT_SCALE * converted.value)
    } else {
        Some(converted.value)
    }
}

/// Convert the numeric literal at the start of `text`.
///
/// Leading space is skipped. Anything after the literal is ignored; use
/// [`is_fully_numeric`] or [`crate::NumericLiteral`] to reject it.
pub fn try_parse_numeric_literal(text: &[u8]) -> Option<f64> {
    let Some(span) = find_numeric_literal(text) else {
        trace!(len = text.len(), "no numeric literal");
        return None;
    };
    convert_span(text, &span)
}

/// Convert the numeric literal at the start of `text`, or return
/// [`UNDEFINED`].
///
/// ```
/// use numlit::{is_undefined, parse_numeric_literal};
///
/// assert_eq!(parse_numeric_literal(b"50%"), 0.5);
/// assert_eq!(parse_numeric_literal(b"-3.25e2"), -325.0);
/// assert!(is_undefined(parse_numeric_literal(b"1e")));
/// assert!(is_undefined(parse_numeric_literal(b".5")));
/// ```
pub fn parse_numeric_literal(text: &[u8]) -> f64 {
    try_parse_numeric_literal(text).unwrap_or(UNDEFINED)
}

/// [`parse_numeric_literal`] over the bytes of a `&str`.
///
/// UTF-8 is already narrow text: every byte of a multi-byte character is
/// `>= 0x80` and never matches the literal grammar, so no transcoding is
/// needed.
pub fn string_to_double(text: &str) -> f64 {
    parse_numeric_literal(text.as_bytes())
}

/// Returns `true` if `text` is one numeric literal, optionally surrounded
/// by ASCII space.
pub fn is_string_numeric(text: &str) -> bool {
    is_fully_numeric(text.as_bytes())
}

/// Base-10 integer conversion with C `strtoll` semantics.
///
/// Skips leading ASCII space, accepts one optional sign, then consumes
/// digits up to the first non-digit. Out-of-range values saturate to
/// `i64::MAX` or `i64::MIN`. Returns 0 when there are no digits. No
/// decimal point, exponent, or percent is recognized: `"2.9"` gives 2.
pub fn parse_integer(text: &str) -> i64 {
    let mut cursor = Cursor::new(text.as_bytes());
    cursor.eat_while(is_ascii_horizontal_or_vertical_space);

    let negative = cursor.current() == b'-';
    cursor.eat_if(|b| b == b'+' || b == b'-');

    let mut value: i64 = 0;
    let mut overflowed = false;
    while is_ascii_decimal_digit(cursor.current()) {
        let digit = i64::from(cursor.current() - b'0');
        cursor.advance();
        if overflowed {
            continue;
        }
        // Accumulate toward the sign so i64::MIN is reachable.
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        match next {
            Some(v) => value = v,
            None => overflowed = true,
        }
    }

    if overflowed {
        trace!(negative, "integer literal saturated");
        if negative {
            i64::MIN
        } else {
            i64::MAX
        }
    } else {
        value
    }
}

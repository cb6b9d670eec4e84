//! Hand-written scanner for numeric literals.
//!
//! Recognizes the longest literal starting at the first non-space byte:
//!
//! ```text
//! literal  = space* sign? digit+ ( "." digit* )? exponent? "%"?
//! exponent = ( "e" | "E" ) sign? digit+
//! sign     = "+" | "-"
//! space    = " " | "\t" | "\n" | VT | FF | "\r"
//! ```
//!
//! The leading digit is mandatory, so `.5` is not a literal while `5.` is.
//! An exponent marker that is not followed by a digit (after an optional
//! sign) rejects the whole literal rather than ending it before the `e`.
//!
//! No match is a normal outcome, reported as `None`. Nothing here
//! allocates.

use bitflags::bitflags;

use crate::ascii::{is_ascii_decimal_digit, is_exponent_marker, is_sign};
use crate::Cursor;

bitflags! {
    /// Optional parts of the grammar that a scanned literal contains.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LiteralShape: u8 {
        /// Leading `+` or `-`.
        const SIGN = 1 << 0;
        /// A decimal point (possibly with no digits after it).
        const FRACTION = 1 << 1;
        /// An exponent part with at least one digit.
        const EXPONENT = 1 << 2;
        /// Trailing `%`.
        const PERCENT = 1 << 3;
    }
}

/// Half-open byte range `[start, end)` of a numeric literal.
///
/// `start` is the first non-space byte; `end` is one past the last byte
/// of the literal, including the percent sign if present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LiteralSpan {
    pub start: usize,
    pub end: usize,
    pub shape: LiteralShape,
}

impl LiteralSpan {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false` for spans produced by the scanner.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    #[inline]
    pub fn is_percent(&self) -> bool {
        self.shape.contains(LiteralShape::PERCENT)
    }

    /// End of the numeric part, excluding a trailing `%`.
    #[inline]
    pub fn digits_end(&self) -> usize {
        if self.is_percent() {
            self.end - 1
        } else {
            self.end
        }
    }
}

/// Single-use scanner driving a [`Cursor`] through the literal grammar.
pub struct NumericScanner<'a> {
    cursor: Cursor<'a>,
    shape: LiteralShape,
}

impl<'a> NumericScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            shape: LiteralShape::empty(),
        }
    }

    /// Scan one literal from the cursor position.
    ///
    /// Returns `None` when no literal begins at the first non-space byte.
    pub fn scan(mut self) -> Option<LiteralSpan> {
        self.cursor.eat_space();
        let start = self.cursor.pos();

        if self.cursor.eat_if(is_sign) {
            self.shape |= LiteralShape::SIGN;
        }
        self.integer_part()?;
        self.fraction();
        self.exponent()?;
        if self.cursor.eat_if(|b| b == b'%') {
            self.shape |= LiteralShape::PERCENT;
        }

        let end = self.cursor.pos();
        debug_assert!(end > start, "successful scan must consume input");
        Some(LiteralSpan {
            start,
            end,
            shape: self.shape,
        })
    }

    /// At least one digit. Rejects `.5`, `+.5`, `-e3`.
    fn integer_part(&mut self) -> Option<()> {
        if self.cursor.eat_while(is_ascii_decimal_digit) == 0 {
            return None;
        }
        Some(())
    }

    fn fraction(&mut self) {
        if self.cursor.eat_if(|b| b == b'.') {
            self.shape |= LiteralShape::FRACTION;
            self.cursor.eat_while(is_ascii_decimal_digit);
        }
    }

    /// `None` only for a marker without digits, which invalidates the
    /// whole literal.
    fn exponent(&mut self) -> Option<()> {
        if !self.cursor.eat_if(is_exponent_marker) {
            return Some(());
        }
        self.cursor.eat_if(is_sign);
        if self.cursor.eat_while(is_ascii_decimal_digit) == 0 {
            return None;
        }
        self.shape |= LiteralShape::EXPONENT;
        Some(())
    }
}

/// Find the end of the numeric literal at the start of `text`.
///
/// Leading space is skipped. Returns the byte offset just past the
/// literal (past the `%` if there is one), or `None` if `text` does not
/// start with a literal.
pub fn scan_numeric_literal(text: &[u8]) -> Option<usize> {
    find_numeric_literal(text).map(|span| span.end)
}

/// Like [`scan_numeric_literal`], also reporting start and shape.
pub fn find_numeric_literal(text: &[u8]) -> Option<LiteralSpan> {
    find_numeric_literal_at(text, 0)
}

/// Scan from byte offset `from`. Offsets in the returned span are
/// absolute positions in `text`.
pub fn find_numeric_literal_at(text: &[u8], from: usize) -> Option<LiteralSpan> {
    NumericScanner::new(Cursor::at(text, from)).scan()
}

/// Position of the first non-space byte at or after `from`, if one
/// occurs before the terminator.
pub fn trailing_input(text: &[u8], from: usize) -> Option<usize> {
    let mut cursor = Cursor::at(text, from);
    cursor.eat_space();
    if cursor.is_at_terminator() {
        None
    } else {
        Some(cursor.pos())
    }
}

/// Returns `true` if `text` is exactly one numeric literal, optionally
/// surrounded by ASCII space.
pub fn is_fully_numeric(text: &[u8]) -> bool {
    match scan_numeric_literal(text) {
        Some(end) => trailing_input(text, end).is_none(),
        None => false,
    }
}

/// Iterator over consecutive literals, each scan resuming where the
/// previous literal ended.
///
/// Iteration stops at the first position where no literal begins, which
/// includes the end of the text.
///
/// ```
/// use numlit_core::Literals;
///
/// let ends: Vec<usize> = Literals::new(b"1 2.5 30%").map(|s| s.end).collect();
/// assert_eq!(ends, [1, 5, 9]);
/// ```
pub struct Literals<'a> {
    text: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> Literals<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            pos: 0,
            done: false,
        }
    }

    /// Offset where the next scan would start.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl Iterator for Literals<'_> {
    type Item = LiteralSpan;

    fn next(&mut self) -> Option<LiteralSpan> {
        if self.done {
            return None;
        }
        match find_numeric_literal_at(self.text, self.pos) {
            Some(span) => {
                self.pos = span.end;
                Some(span)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Literals<'_> {}

#[cfg(test)]
mod tests;

//! Result-typed numeric literal for callers that prefer `?` to sentinels.

use std::str::FromStr;

use numlit_core::{find_numeric_literal, trailing_input, Cursor, LiteralSpan};

use crate::convert::convert_span;

/// Why text is not exactly one numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// No literal starts at the first non-space byte. Malformed exponents
    /// (`1e`, `2E+`) land here too.
    #[error("no numeric literal at byte {offset}")]
    NoLiteral { offset: usize },
    /// A literal was found, but non-space input follows it.
    #[error("unexpected input after numeric literal at byte {offset}")]
    TrailingInput { offset: usize },
    /// The literal was recognized but produced no value.
    #[error("numeric literal at bytes {start}..{end} did not convert")]
    Unconvertible { start: usize, end: usize },
}

/// A whole-text numeric literal and its value.
///
/// ```
/// use numlit::NumericLiteral;
///
/// let lit: NumericLiteral = " 12.5% ".parse()?;
/// assert_eq!(lit.value(), 0.125);
/// assert!(lit.is_percent());
/// # Ok::<(), numlit::LiteralError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericLiteral {
    value: f64,
    span: LiteralSpan,
}

impl NumericLiteral {
    /// Parse `text`, which must be one literal optionally surrounded by
    /// ASCII space.
    pub fn from_bytes(text: &[u8]) -> Result<Self, LiteralError> {
        let Some(span) = find_numeric_literal(text) else {
            let mut cursor = Cursor::new(text);
            cursor.eat_space();
            return Err(LiteralError::NoLiteral {
                offset: cursor.pos(),
            });
        };
        if let Some(offset) = trailing_input(text, span.end) {
            return Err(LiteralError::TrailingInput { offset });
        }
        let value = convert_span(text, &span).ok_or(LiteralError::Unconvertible {
            start: span.start,
            end: span.end,
        })?;
        Ok(Self { value, span })
    }

    /// Converted value, percent scaling applied.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Where the literal sits in the parsed text.
    pub fn span(&self) -> LiteralSpan {
        self.span
    }

    pub fn is_percent(&self) -> bool {
        self.span.is_percent()
    }
}

impl FromStr for NumericLiteral {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

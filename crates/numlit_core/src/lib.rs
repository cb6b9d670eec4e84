//! Low-level scanner for numeric literals (standalone, no numlit_* dependencies).
//!
//! Finds where a literal such as `-3.25e2` or `50%` begins and ends in
//! narrow (8-bit) text, using ASCII-only classification so the result
//! never depends on the host locale. Converting the literal to a value
//! lives one layer up, in `numlit`.
//!
//! # Text Model
//!
//! Input is a byte slice. The end of the slice and the first NUL byte both
//! act as the C string terminator; see [`Cursor`].

pub mod ascii;
mod cursor;
mod scanner;

pub use ascii::ByteClass;
pub use cursor::Cursor;
pub use scanner::{
    find_numeric_literal, find_numeric_literal_at, is_fully_numeric, scan_numeric_literal,
    trailing_input, LiteralShape, LiteralSpan, Literals, NumericScanner,
};

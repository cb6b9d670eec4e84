//! Locale-independent numeric literal conversion.
//!
//! Converts text such as `42`, `-3.25e2`, or `50%` to `f64` with the same
//! result on every host, whatever its regional settings: the decimal point
//! is always `.`, digits are ASCII only, and a trailing `%` divides by 100.
//!
//! # Architecture
//!
//! ```text
//! text ──► numlit_core scanner ──► LiteralSpan (or no match)
//!                                       │
//!                                       ▼
//!                 invariant::digits_to_double ──► f64 (or UNDEFINED)
//! ```
//!
//! The scanner is stricter than the conversion primitive (it requires a
//! leading digit and rejects dangling exponents), so it decides validity
//! and the primitive only supplies the value.
//!
//! # Logging
//!
//! Failure paths emit `trace`-level events through `tracing`. Nothing is
//! recorded unless a subscriber is installed; see [`init_tracing`].

mod convert;
mod invariant;
mod literal;

use std::sync::Once;

pub use convert::{
    is_string_numeric, is_undefined, parse_integer, parse_numeric_literal, string_to_double,
    try_parse_numeric_literal, UNDEFINED,
};
pub use invariant::{digits_to_double, Converted, InvariantGrammar, INVARIANT};
pub use literal::{LiteralError, NumericLiteral};
pub use numlit_core::{
    find_numeric_literal, is_fully_numeric, scan_numeric_literal, LiteralShape, LiteralSpan,
    Literals,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=numlit=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

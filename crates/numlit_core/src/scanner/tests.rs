use pretty_assertions::assert_eq;

use super::*;

/// Helper: scan a string and return the end offset.
fn end_of(source: &str) -> Option<usize> {
    scan_numeric_literal(source.as_bytes())
}

/// Helper: scan a string and return the shape.
fn shape_of(source: &str) -> Option<LiteralShape> {
    find_numeric_literal(source.as_bytes()).map(|span| span.shape)
}

// === Required Leading Digit ===

#[test]
fn plain_integer() {
    assert_eq!(end_of("5"), Some(1));
    assert_eq!(end_of("12345"), Some(5));
}

#[test]
fn leading_point_is_rejected() {
    assert_eq!(end_of(".5"), None);
    assert_eq!(end_of("-.5"), None);
    assert_eq!(end_of("+.5e3"), None);
}

#[test]
fn sign_alone_is_rejected() {
    assert_eq!(end_of("+"), None);
    assert_eq!(end_of("-"), None);
    assert_eq!(end_of("- 5"), None);
}

#[test]
fn double_sign_is_rejected() {
    assert_eq!(end_of("--5"), None);
    assert_eq!(end_of("+-5"), None);
}

#[test]
fn empty_and_blank_do_not_match() {
    assert_eq!(end_of(""), None);
    assert_eq!(end_of("   "), None);
    assert_eq!(end_of("\t\r\n"), None);
}

#[test]
fn letters_do_not_match() {
    assert_eq!(end_of("abc"), None);
    assert_eq!(end_of("e5"), None);
    assert_eq!(end_of("inf"), None);
    assert_eq!(end_of("nan"), None);
}

// === Fraction ===

#[test]
fn fraction_digits() {
    assert_eq!(end_of("3.25"), Some(4));
    assert_eq!(shape_of("3.25"), Some(LiteralShape::FRACTION));
}

#[test]
fn bare_trailing_point_is_valid() {
    assert_eq!(end_of("5."), Some(2));
    assert_eq!(shape_of("5."), Some(LiteralShape::FRACTION));
}

#[test]
fn second_point_ends_literal() {
    assert_eq!(end_of("1.2.3"), Some(3));
}

#[test]
fn decimal_comma_ends_literal() {
    assert_eq!(end_of("3,14"), Some(1));
}

// === Exponent ===

#[test]
fn exponent_forms() {
    assert_eq!(end_of("1e5"), Some(3));
    assert_eq!(end_of("1E5"), Some(3));
    assert_eq!(end_of("1e+05"), Some(5));
    assert_eq!(end_of("-3.25e-2"), Some(8));
    assert_eq!(end_of("5.e3"), Some(4));
}

#[test]
fn exponent_without_digit_rejects_whole_literal() {
    assert_eq!(end_of("1e"), None);
    assert_eq!(end_of("1E+"), None);
    assert_eq!(end_of("+2.1E"), None);
    assert_eq!(end_of("2e-x"), None);
    assert_eq!(end_of("7e%"), None);
}

#[test]
fn exponent_marker_with_double_sign_rejects() {
    assert_eq!(end_of("1e+-3"), None);
}

#[test]
fn exponent_shape() {
    assert_eq!(
        shape_of("-1.5e3"),
        Some(LiteralShape::SIGN | LiteralShape::FRACTION | LiteralShape::EXPONENT)
    );
}

// === Percent ===

#[test]
fn percent_suffix_is_included() {
    assert_eq!(end_of("50%"), Some(3));
    assert_eq!(end_of("1.5e1%"), Some(6));
    assert_eq!(shape_of("50%"), Some(LiteralShape::PERCENT));
}

#[test]
fn only_one_percent_is_consumed() {
    assert_eq!(end_of("50%%"), Some(3));
}

#[test]
fn percent_after_space_is_not_part_of_literal() {
    assert_eq!(end_of("50 %"), Some(2));
}

#[test]
fn digits_end_excludes_percent() {
    let span = find_numeric_literal(b" 12%").unwrap_or_else(|| panic!("no literal"));
    assert_eq!(span.start, 1);
    assert_eq!(span.end, 4);
    assert_eq!(span.digits_end(), 3);
    assert_eq!(span.len(), 3);
    assert!(span.is_percent());
    assert!(!span.is_empty());
}

// === Leading Space & Terminators ===

#[test]
fn leading_space_is_skipped() {
    let span = find_numeric_literal(b" \t\n\x0B\x0C\r42").unwrap_or_else(|| panic!("no literal"));
    assert_eq!(span.start, 6);
    assert_eq!(span.end, 8);
}

#[test]
fn interior_null_terminates_text() {
    assert_eq!(scan_numeric_literal(b"12\x0034"), Some(2));
    assert_eq!(scan_numeric_literal(b"\x0012"), None);
    assert_eq!(scan_numeric_literal(b"1e\x005"), None);
}

#[test]
fn non_ascii_digits_are_not_digits() {
    // U+0663 ARABIC-INDIC DIGIT THREE
    assert_eq!(end_of("\u{663}"), None);
    // U+FF15 FULLWIDTH DIGIT FIVE
    assert_eq!(end_of("\u{FF15}"), None);
}

#[test]
fn scan_never_passes_the_end() {
    for source in ["0", "1.", "1e9", "9%", " 3 ", "-0.0e-0%"] {
        let end = end_of(source).unwrap_or_else(|| panic!("{source:?} should match"));
        assert!(end <= source.len(), "end {end} past {source:?}");
    }
}

// === Full-String Validity ===

#[test]
fn fully_numeric_table() {
    let cases: &[(&str, bool)] = &[
        ("", false),
        ("   ", false),
        (".5", false),
        ("5.", true),
        ("5", true),
        ("  12.5  ", true),
        ("12.5x", false),
        ("12.5 x", false),
        ("1e", false),
        ("1e3", true),
        ("-7%", true),
        ("7% ", true),
        ("7 %", false),
        ("1 2", false),
        ("\t-0\r\n", true),
        ("3,5", false),
    ];
    for &(source, expected) in cases {
        assert_eq!(
            is_fully_numeric(source.as_bytes()),
            expected,
            "is_fully_numeric({source:?})"
        );
    }
}

#[test]
fn fully_numeric_stops_at_interior_null() {
    assert!(is_fully_numeric(b"12 \x00garbage"));
}

#[test]
fn trailing_input_reports_first_non_space() {
    assert_eq!(trailing_input(b"12.5  x", 4), Some(6));
    assert_eq!(trailing_input(b"12.5   ", 4), None);
    assert_eq!(trailing_input(b"12.5", 4), None);
}

// === Rescanning ===

#[test]
fn rescan_from_end_finds_second_literal() {
    let text = b"-3.5e2 40%";
    let first = find_numeric_literal(text).unwrap_or_else(|| panic!("no first literal"));
    assert_eq!(first.end, 6);
    let second =
        find_numeric_literal_at(text, first.end).unwrap_or_else(|| panic!("no second literal"));
    assert_eq!(second.start, 7);
    assert_eq!(second.end, text.len());
    assert!(second.is_percent());
}

#[test]
fn literals_iterator_collects_all() {
    let spans: Vec<(usize, usize)> = Literals::new(b"1 22 3.5e1 4%")
        .map(|s| (s.start, s.end))
        .collect();
    assert_eq!(spans, vec![(0, 1), (2, 4), (5, 10), (11, 13)]);
}

#[test]
fn literals_iterator_stops_at_non_literal() {
    let mut iter = Literals::new(b"1 2 x 3");
    assert_eq!(iter.next().map(|s| s.end), Some(1));
    assert_eq!(iter.next().map(|s| s.end), Some(3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.pos(), 3);
    assert_eq!(iter.next(), None);
}

#[test]
fn adjacent_signed_literals() {
    let ends: Vec<usize> = Literals::new(b"1-2+3").map(|s| s.end).collect();
    assert_eq!(ends, vec![1, 3, 5]);
}

// === Property Tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::super::{find_numeric_literal, find_numeric_literal_at, is_fully_numeric};
    use proptest::prelude::*;

    /// Strategy for texts that the grammar accepts in full.
    fn literal() -> impl Strategy<Value = String> {
        (
            prop_oneof![Just(""), Just("+"), Just("-")],
            "[0-9]{1,12}",
            proptest::option::of("\\.[0-9]{0,8}"),
            proptest::option::of("[eE][+-]?[0-9]{1,3}"),
            proptest::bool::ANY,
        )
            .prop_map(|(sign, int, frac, exp, percent)| {
                format!(
                    "{sign}{int}{}{}{}",
                    frac.unwrap_or_default(),
                    exp.unwrap_or_default(),
                    if percent { "%" } else { "" }
                )
            })
    }

    proptest! {
        #[test]
        fn generated_literals_are_fully_numeric(lit in literal(), pad in "[ \t]{0,3}") {
            let text = format!("{pad}{lit}{pad}");
            prop_assert!(is_fully_numeric(text.as_bytes()), "{:?}", text);
            let span = find_numeric_literal(text.as_bytes());
            prop_assert_eq!(span.map(|s| s.end), Some(pad.len() + lit.len()));
        }

        #[test]
        fn scan_is_bounded(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            if let Some(span) = find_numeric_literal(&bytes) {
                prop_assert!(span.start < span.end);
                prop_assert!(span.end <= bytes.len());
            }
        }

        #[test]
        fn rescan_of_two_literals(a in literal(), b in literal()) {
            let text = format!("{a} {b}");
            let first = find_numeric_literal(text.as_bytes());
            prop_assert_eq!(first.map(|s| s.end), Some(a.len()));
            let second = find_numeric_literal_at(text.as_bytes(), a.len());
            prop_assert_eq!(second.map(|s| s.end), Some(text.len()));
        }

        #[test]
        fn dangling_exponent_never_matches(int in "[0-9]{1,6}", sign in "[+-]?", tail in "[a-z%]?") {
            let text = format!("{int}e{sign}{tail}");
            prop_assert!(find_numeric_literal(text.as_bytes()).is_none(), "{:?}", text);
        }
    }
}

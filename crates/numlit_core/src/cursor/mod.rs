//! Cursor over narrow, NUL-terminated text.
//!
//! The cursor advances through a byte slice one byte at a time. Reading at
//! or past the end of the slice yields `0x00`, the same value an embedded
//! NUL byte yields, so both behave as the C string terminator: no
//! classification predicate accepts `0x00`, and every scanning loop stops
//! there without an explicit bounds check at the call site.
//!
//! # Interior Null Bytes
//!
//! A NUL inside the slice ends the text, exactly as it would for a C
//! string. Bytes after it are never examined.

use crate::ascii::is_ascii_horizontal_or_vertical_space;

/// Cursor over a narrow byte slice with an implicit `0x00` terminator.
///
/// The cursor is [`Copy`], so a tentative step can be undone by restoring
/// an earlier snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a [u8],
    pos: usize,
}

/// Size assertion: a fat pointer plus one index.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(text: &'a [u8]) -> Self {
        Self { text, pos: 0 }
    }

    /// Create a cursor at byte offset `pos`.
    ///
    /// Offsets past the end of `text` are clamped to its length, where the
    /// cursor reads the terminator.
    pub fn at(text: &'a [u8], pos: usize) -> Self {
        Self {
            text,
            pos: pos.min(text.len()),
        }
    }

    /// Returns the byte at the current position, or `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.text.get(self.pos).copied().unwrap_or(0)
    }

    /// Returns the byte one position ahead of current, or `0x00`.
    ///
    /// Looking past a terminator is never meaningful, so a NUL at the
    /// current position also makes `peek` return `0x00`.
    #[inline]
    pub fn peek(&self) -> u8 {
        if self.is_at_terminator() {
            return 0;
        }
        self.text.get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    ///
    /// # Contract
    ///
    /// The cursor must not be at the terminator.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(!self.is_at_terminator(), "advance past terminator");
        self.pos += 1;
    }

    /// Consume the current byte if `pred` accepts it.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        if pred(self.current()) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`. This holds for every predicate in
    /// [`crate::ascii`].
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance past ASCII horizontal and vertical space.
    #[inline]
    pub fn eat_space(&mut self) {
        self.eat_while(is_ascii_horizontal_or_vertical_space);
    }

    /// Returns `true` at the end of the slice or at an interior NUL.
    #[inline]
    pub fn is_at_terminator(&self) -> bool {
        self.current() == 0
    }

    /// Current byte offset in the text.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The whole text this cursor walks over.
    #[inline]
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Bytes from `start` up to the current position.
    ///
    /// # Contract
    ///
    /// `start <= self.pos()`.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        &self.text[start..self.pos]
    }
}

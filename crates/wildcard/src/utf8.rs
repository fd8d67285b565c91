use std::str::from_utf8;

/// A single decoded codepoint together with the bytes it was decoded from.
///
/// Bytes that do not form a valid UTF-8 sequence decode one at a time
/// as [`char::REPLACEMENT_CHARACTER`], so advancing by [`Symbol::width`]
/// always makes progress and never splits a valid multi-byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
    pub ch: char,
    pub raw: &'a [u8],
}

impl<'a> Symbol<'a> {
    #[inline]
    pub fn width(&self) -> usize {
        self.raw.len()
    }

    /// Reports whether the symbol came from a well-formed UTF-8 sequence.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !(self.ch == char::REPLACEMENT_CHARACTER && self.raw.len() == 1)
    }
}

/// Returns the expected width of a UTF-8 sequence by its leading byte.
///
/// Continuation bytes and bytes that never start a valid sequence report 1.
#[inline]
pub fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

/// Decodes the symbol starting at byte offset `at`, if any.
#[inline]
pub fn decode(bytes: &[u8], at: usize) -> Option<Symbol<'_>> {
    let &b = bytes.get(at)?;
    if b.is_ascii() {
        return Some(Symbol {
            ch: b as char,
            raw: &bytes[at..at + 1],
        });
    }

    if let Some(raw) = bytes.get(at..at + utf8_char_width(b)) {
        if let Some(ch) = from_utf8(raw).ok().and_then(|s| s.chars().next()) {
            return Some(Symbol { ch, raw });
        }
    }

    Some(Symbol {
        ch: char::REPLACEMENT_CHARACTER,
        raw: &bytes[at..at + 1],
    })
}

/// Skips `n` symbols starting at `at` and returns the offset after them.
#[inline]
pub fn skip(bytes: &[u8], mut at: usize, n: usize) -> Option<usize> {
    for _ in 0..n {
        at += decode(bytes, at)?.width();
    }
    Some(at)
}

/// Iterates over the symbols of `bytes`.
#[inline]
pub fn symbols(bytes: &[u8]) -> impl Iterator<Item = Symbol<'_>> {
    let mut at = 0;
    std::iter::from_fn(move || {
        let symbol = decode(bytes, at)?;
        at += symbol.width();
        Some(symbol)
    })
}

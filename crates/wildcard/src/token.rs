// local imports
use crate::utf8::{Symbol, decode};

pub(crate) const STAR: u8 = b'*';
pub(crate) const QUESTION: u8 = b'?';
pub(crate) const DOT: u8 = b'.';
pub(crate) const BRACKET: u8 = b'[';
pub(crate) const ESCAPE: u8 = b'\\';

/// A token recognized at a pattern cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'p> {
    /// `*`
    Star,
    /// `?`
    Question,
    /// `.`
    Dot,
    /// `[`, the class itself is parsed by [`CharClass::parse`](crate::CharClass::parse).
    Class,
    /// `\x`, or a lone `\` at the end of the pattern which stands for itself.
    Escaped(Symbol<'p>),
    /// Any other codepoint.
    Literal(Symbol<'p>),
}

/// Reports whether `b` starts a token other than a literal.
#[inline]
pub fn is_wildcard_byte(b: u8) -> bool {
    matches!(b, STAR | QUESTION | DOT | BRACKET | ESCAPE)
}

/// Reports whether the pattern consists of literals only.
#[inline]
pub fn is_literal(pattern: &[u8]) -> bool {
    !pattern.iter().copied().any(is_wildcard_byte)
}

/// Returns the token at byte offset `at` and the number of bytes it spans.
///
/// For [`Token::Class`] only the opening bracket is counted.
#[inline]
pub(crate) fn scan(pattern: &[u8], at: usize) -> Option<(Token<'_>, usize)> {
    let symbol = decode(pattern, at)?;
    let token = match pattern[at] {
        STAR => Token::Star,
        QUESTION => Token::Question,
        DOT => Token::Dot,
        BRACKET => Token::Class,
        ESCAPE => {
            return Some(match decode(pattern, at + 1) {
                Some(escaped) => (Token::Escaped(escaped), 1 + escaped.width()),
                None => (Token::Escaped(symbol), 1),
            });
        }
        _ => return Some((Token::Literal(symbol), symbol.width())),
    };
    Some((token, 1))
}

/// Returns the run of plain literal bytes starting at `at`.
#[inline]
pub(crate) fn literal_run(pattern: &[u8], at: usize) -> &[u8] {
    let tail = &pattern[at.min(pattern.len())..];
    let end = tail.iter().copied().position(is_wildcard_byte).unwrap_or(tail.len());
    &tail[..end]
}

/// Collapses the run of `*` and `?` starting at `at`.
///
/// Returns the offset just past the run and the number of `?` in it.
#[inline]
pub(crate) fn wild_run(pattern: &[u8], mut at: usize) -> (usize, usize) {
    let mut min = 0;
    while let Some(&b) = pattern.get(at) {
        match b {
            STAR => {}
            QUESTION => min += 1,
            _ => break,
        }
        at += 1;
    }
    (at, min)
}

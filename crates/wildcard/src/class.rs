// std imports
use std::fmt;

// local imports
use crate::error::{Error, ErrorKind, Result};
use crate::token::{BRACKET, ESCAPE};
use crate::utf8::decode;

const CLOSE: u8 = b']';
const DASH: u8 = b'-';

/// A parsed bracket expression such as `[abc]`, `[!a-z]` or `[]-]`.
///
/// The class borrows its body from the pattern and evaluates membership over it,
/// so parsing never allocates. Membership is always case-sensitive.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CharClass<'p> {
    negated: bool,
    body: &'p [u8],
}

impl<'p> CharClass<'p> {
    /// Parses the class that starts with `[` at byte offset `at` of `pattern`.
    ///
    /// Returns the class and the offset just past its closing `]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::CharClass;
    ///
    /// let (class, end) = CharClass::parse(b"x[!a-c]y", 1).unwrap();
    /// assert_eq!(end, 7);
    /// assert!(class.negated());
    /// assert!(class.matches('d'));
    /// assert!(!class.matches('b'));
    /// ```
    pub fn parse(pattern: &'p [u8], at: usize) -> Result<(Self, usize)> {
        if pattern.get(at) != Some(&BRACKET) {
            return Err(Error::new(at, ErrorKind::ExpectedClass));
        }

        let mut pos = at + 1;
        let negated = matches!(pattern.get(pos), Some(b'!' | b'^'));
        if negated {
            pos += 1;
        }

        let start = pos;
        loop {
            match pattern.get(pos) {
                None => return Err(Error::new(at, ErrorKind::UnterminatedClass)),
                Some(&CLOSE) if pos != start => break,
                Some(_) => {
                    let (_, next) = item(pattern, pos).map_err(|kind| Error::new(at, kind))?;
                    pos = next;
                }
            }
        }

        let class = Self {
            negated,
            body: &pattern[start..pos],
        };

        Ok((class, pos + 1))
    }

    #[inline]
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Iterates over members and ranges in the order they appear.
    #[inline]
    pub fn items(&self) -> Items<'p> {
        Items { body: self.body, pos: 0 }
    }

    /// Iterates over individual members.
    pub fn chars(&self) -> impl Iterator<Item = char> + 'p {
        self.items().filter_map(|item| match item {
            ClassItem::Char(ch) => Some(ch),
            ClassItem::Range(..) => None,
        })
    }

    /// Iterates over ranges as `(start, end)` pairs.
    pub fn ranges(&self) -> impl Iterator<Item = (char, char)> + 'p {
        self.items().filter_map(|item| match item {
            ClassItem::Range(start, end) => Some((start, end)),
            ClassItem::Char(_) => None,
        })
    }

    /// Tests whether `ch` is accepted by the class, taking negation into account.
    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        self.items().any(|item| item.contains(ch)) != self.negated
    }
}

impl fmt::Debug for CharClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharClass")
            .field("negated", &self.negated)
            .field("items", &self.items().collect::<Vec<_>>())
            .finish()
    }
}

/// A single member or range of a [`CharClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    Char(char),
    Range(char, char),
}

impl ClassItem {
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        match *self {
            Self::Char(member) => member == ch,
            Self::Range(start, end) => start <= ch && ch <= end,
        }
    }
}

/// Iterator over the items of a [`CharClass`].
#[derive(Debug, Clone)]
pub struct Items<'p> {
    body: &'p [u8],
    pos: usize,
}

impl Iterator for Items<'_> {
    type Item = ClassItem;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.body.len() {
            return None;
        }
        // the body was validated by CharClass::parse
        let (item, next) = item(self.body, self.pos).ok()?;
        self.pos = next;
        Some(item)
    }
}

// ---

fn item(pattern: &[u8], pos: usize) -> std::result::Result<(ClassItem, usize), ErrorKind> {
    let (start, pos) = member(pattern, pos)?;

    if pattern.get(pos) == Some(&DASH) && pattern.get(pos + 1).is_some_and(|&b| b != CLOSE) {
        let (end, pos) = member(pattern, pos + 1)?;
        if start > end {
            return Err(ErrorKind::InvertedRange { start, end });
        }
        return Ok((ClassItem::Range(start, end), pos));
    }

    Ok((ClassItem::Char(start), pos))
}

fn member(pattern: &[u8], mut pos: usize) -> std::result::Result<(char, usize), ErrorKind> {
    if pattern.get(pos) == Some(&ESCAPE) {
        pos += 1;
    }
    let symbol = decode(pattern, pos).ok_or(ErrorKind::UnterminatedEscape)?;
    Ok((symbol.ch, pos + symbol.width()))
}

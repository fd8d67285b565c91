// third-party imports
use memchr::memmem;

// local imports
use crate::class::CharClass;
use crate::error::Result;
use crate::fold::eq_fold;
use crate::token::{self, Token, is_literal, literal_run, wild_run};
use crate::utf8::{Symbol, decode, skip, symbols};

/// Tests whether `pattern` matches the whole `subject`, case-sensitively.
///
/// Both pattern and subject are UTF-8 byte strings, matching advances one codepoint at a time.
///
/// # Errors
///
/// Returns an error if the pattern contains a malformed character class,
/// regardless of the subject.
///
/// # Examples
///
/// ```
/// assert_eq!(wildcard::matches(b"*.txt", b"document.txt"), Ok(true));
/// assert_eq!(wildcard::matches(b"file[0-9]", b"fileA"), Ok(false));
/// assert!(wildcard::matches(b"[z-a]", b"x").is_err());
/// ```
#[inline]
pub fn matches(pattern: &[u8], subject: &[u8]) -> Result<bool> {
    Matcher::new(pattern, subject, false).run()
}

/// Tests whether `pattern` matches the whole `subject`, comparing literals
/// by Unicode simple case folding.
///
/// Character classes stay case-sensitive.
///
/// # Examples
///
/// ```
/// assert_eq!(wildcard::matches_fold("CAFÉ*".as_bytes(), "café au lait".as_bytes()), Ok(true));
/// assert_eq!(wildcard::matches_fold(b"[a-z]bc", b"Abc"), Ok(false));
/// ```
#[inline]
pub fn matches_fold(pattern: &[u8], subject: &[u8]) -> Result<bool> {
    Matcher::new(pattern, subject, true).run()
}

/// Checks that every character class in the pattern is well-formed.
pub fn validate(pattern: &[u8]) -> Result<()> {
    let mut pos = 0;
    while let Some((token, len)) = token::scan(pattern, pos) {
        pos = match token {
            Token::Class => CharClass::parse(pattern, pos)?.1,
            _ => pos + len,
        };
    }
    Ok(())
}

// ---

struct Matcher<'a> {
    pattern: &'a [u8],
    subject: &'a [u8],
    fold: bool,
}

/// Positions of the pattern and subject cursors.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    pattern: usize,
    subject: usize,
}

/// The most recent star, to be retried with one more codepoint consumed.
#[derive(Debug, Clone, Copy)]
struct Checkpoint<'a> {
    /// Pattern offset just past the star run.
    pattern: usize,
    /// Subject offset the remainder of the pattern is tried from.
    anchor: usize,
    /// Literal bytes the remainder starts with, used to skip hopeless anchors.
    literal: Option<&'a [u8]>,
}

enum Step {
    Next(Cursor),
    Accept,
    Reject,
    Backtrack,
}

impl<'a> Matcher<'a> {
    #[inline]
    fn new(pattern: &'a [u8], subject: &'a [u8], fold: bool) -> Self {
        Self {
            pattern,
            subject,
            fold,
        }
    }

    fn run(&self) -> Result<bool> {
        if is_literal(self.pattern) {
            return Ok(self.compare_literal());
        }

        validate(self.pattern)?;

        let mut cursor = Cursor::default();
        let mut star: Option<Checkpoint<'a>> = None;

        loop {
            match self.step(cursor, &mut star)? {
                Step::Next(next) => {
                    cursor = next;
                    continue;
                }
                Step::Accept => return Ok(true),
                Step::Reject => return Ok(false),
                Step::Backtrack => {}
            }

            let Some(checkpoint) = star.as_mut() else {
                return Ok(false);
            };
            let Some(anchor) = self.next_anchor(checkpoint) else {
                return Ok(false);
            };

            checkpoint.anchor = anchor;
            cursor = Cursor {
                pattern: checkpoint.pattern,
                subject: anchor,
            };
        }
    }

    #[inline]
    fn step(&self, cursor: Cursor, star: &mut Option<Checkpoint<'a>>) -> Result<Step> {
        let Some((token, len)) = token::scan(self.pattern, cursor.pattern) else {
            return Ok(if cursor.subject == self.subject.len() {
                Step::Accept
            } else {
                Step::Backtrack
            });
        };

        let symbol = decode(self.subject, cursor.subject);
        let end = match (token, symbol) {
            (Token::Star, _) => return Ok(self.star(cursor, star)),
            (_, None) => None,
            (Token::Question, Some(_)) => Some(cursor.pattern + len),
            (Token::Dot, Some(ch)) => (!ch.ch.is_whitespace()).then_some(cursor.pattern + len),
            (Token::Class, Some(ch)) => {
                let (class, end) = CharClass::parse(self.pattern, cursor.pattern)?;
                class.matches(ch.ch).then_some(end)
            }
            (Token::Escaped(expected) | Token::Literal(expected), Some(ch)) => {
                self.same(expected, ch).then_some(cursor.pattern + len)
            }
        };

        Ok(match (end, symbol) {
            (Some(end), Some(ch)) => Step::Next(Cursor {
                pattern: end,
                subject: cursor.subject + ch.width(),
            }),
            _ => Step::Backtrack,
        })
    }

    /// Collapses the star run at the cursor and records it as the checkpoint.
    #[inline]
    fn star(&self, cursor: Cursor, star: &mut Option<Checkpoint<'a>>) -> Step {
        let (end, min) = wild_run(self.pattern, cursor.pattern);
        let Some(anchor) = skip(self.subject, cursor.subject, min) else {
            // any earlier star can only leave fewer codepoints
            return Step::Reject;
        };
        if end == self.pattern.len() {
            return Step::Accept;
        }
        *star = Some(Checkpoint {
            pattern: end,
            anchor,
            literal: self.skippable_literal(end),
        });

        Step::Next(Cursor {
            pattern: end,
            subject: anchor,
        })
    }

    /// Returns the next subject offset worth retrying the star checkpoint from.
    #[inline]
    fn next_anchor(&self, checkpoint: &Checkpoint<'_>) -> Option<usize> {
        let from = checkpoint.anchor + decode(self.subject, checkpoint.anchor)?.width();

        match checkpoint.literal {
            Some(literal) => memmem::find(&self.subject[from..], literal).map(|pos| from + pos),
            None => Some(from),
        }
    }

    /// Returns the literal bytes following a star if anchors can be found by searching for them.
    ///
    /// A literal starting with a continuation byte could be found inside a multi-byte subject
    /// codepoint, such literals are never searched for.
    #[inline]
    fn skippable_literal(&self, at: usize) -> Option<&'a [u8]> {
        if self.fold {
            return None;
        }
        match literal_run(self.pattern, at) {
            [] | [0x80..=0xBF, ..] => None,
            literal => Some(literal),
        }
    }

    #[inline]
    fn same(&self, expected: Symbol<'_>, actual: Symbol<'_>) -> bool {
        expected.raw == actual.raw
            || (self.fold && expected.is_valid() && actual.is_valid() && eq_fold(expected.ch, actual.ch))
    }

    fn compare_literal(&self) -> bool {
        if !self.fold {
            return self.pattern == self.subject;
        }

        let mut expected = symbols(self.pattern);
        let mut actual = symbols(self.subject);
        loop {
            match (expected.next(), actual.next()) {
                (Some(e), Some(a)) if self.same(e, a) => {}
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

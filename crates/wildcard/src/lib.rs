//! Glob-style wildcard matching for arbitrary text.
//!
//! This crate decides whether a whole subject matches a pattern. Patterns are interpreted on the
//! fly, nothing is compiled, and wildcards cross any separator, so the matcher is not
//! tied to filesystem paths.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one character
//! - `.` - Matches exactly one character that is not whitespace
//! - `[abc]`, `[a-z]` - Matches one character from the class
//! - `[!abc]`, `[^abc]` - Matches one character not in the class
//! - `\x` - Matches `x` literally
//! - A trailing `\` without a following character matches a literal backslash
//! - Any other character matches itself
//!
//! A character means a Unicode codepoint. Patterns and subjects are UTF-8 byte strings,
//! bytes that are not valid UTF-8 are treated as separate codepoints each.
//!
//! An invalid byte in a literal matches only the very same subject byte and is never folded.
//! Inside a character class an invalid byte stands for U+FFFD REPLACEMENT CHARACTER, as does
//! every invalid subject byte a class is tested against, so `[\xff]` matches any invalid
//! subject byte and a real U+FFFD:
//!
//! ```
//! use wildcard::matches;
//!
//! assert_eq!(matches(b"\xff", b"\xfe"), Ok(false));
//! assert_eq!(matches(b"[\xff]", b"\xfe"), Ok(true));
//! assert_eq!(matches(b"[\xff]", "\u{FFFD}".as_bytes()), Ok(true));
//! ```
//!
//! Within a class the first character after `[` (or after `[!`) is a member even if it is `]`,
//! `-` is literal when it comes first or last, and `\` escapes the next character.
//!
//! # Examples
//!
//! ```
//! use wildcard::{matches, matches_fold};
//!
//! assert_eq!(matches(b"*.txt", b"document.txt"), Ok(true));
//! assert_eq!(matches(b"a*b*c", b"axbyc"), Ok(true));
//! assert_eq!(matches(b"test?.log", b"test.log"), Ok(false));
//! assert_eq!(matches(br"a\*b", b"a*b"), Ok(true));
//! ```
//!
//! # Case Folding
//!
//! [`matches_fold`] compares literal characters by Unicode simple case folding.
//! Character classes remain case-sensitive:
//!
//! ```
//! use wildcard::matches_fold;
//!
//! assert_eq!(matches_fold("CAFÉ*".as_bytes(), "café au lait".as_bytes()), Ok(true));
//! assert_eq!(matches_fold(b"ABC", b"abc"), Ok(true));
//! assert_eq!(matches_fold(b"[a-z]bc", b"Abc"), Ok(false));
//! ```
//!
//! # Errors
//!
//! A pattern with a malformed character class is rejected with an [`Error`] whatever the
//! subject is. A mismatch is never an error.
//!
//! ```
//! use wildcard::{ErrorKind, matches};
//!
//! let err = matches(b"[z-a]", b"x").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::InvertedRange { start: 'z', end: 'a' });
//! ```

mod class;
mod error;
pub mod fold;
mod matcher;
mod token;
mod utf8;

pub use class::{CharClass, ClassItem, Items};
pub use error::{Error, ErrorKind, Result};
pub use matcher::{matches, matches_fold, validate};
pub use token::{is_literal, is_wildcard_byte};

// third-party imports
use thiserror::Error;

/// Error is returned when a pattern is malformed.
///
/// A subject never causes an error, a mismatch is reported as `Ok(false)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("malformed pattern at offset {offset}: {kind}")]
pub struct Error {
    /// Byte offset of the character class that failed to parse.
    pub offset: usize,
    pub kind: ErrorKind,
}

impl Error {
    #[inline]
    pub(crate) fn new(offset: usize, kind: ErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// ErrorKind tells what exactly is wrong with a malformed pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("expected '[' at the start of a character class")]
    ExpectedClass,
    #[error("unterminated character class")]
    UnterminatedClass,
    #[error("inverted range {start:?}-{end:?} in character class")]
    InvertedRange { start: char, end: char },
    #[error("unterminated escape in character class")]
    UnterminatedEscape,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

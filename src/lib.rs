//! Whole-subject glob wildcard matching with optional Unicode case folding.
//!
//! The matching engine lives in the [`wildcard`] crate and works on UTF-8 byte strings.
//! This crate accepts patterns and subjects in any [`Text`] representation, matches one
//! subject against many patterns in parallel with [`Batch`], and hosts the `globfold`
//! command line application.
//!
//! ```
//! assert_eq!(globfold::matches("file[0-9].txt", "file7.txt"), Ok(true));
//! assert_eq!(globfold::matches_fold("ПРИВЕТ*", "привет мир"), Ok(true));
//! ```

// public modules
pub mod app;
pub mod batch;
pub mod cli;
pub mod error;
pub mod matching;
pub mod settings;
pub mod text;

// public uses
pub use batch::{Batch, matches_fold_many, matches_many};
pub use matching::{matches, matches_fold};
pub use settings::Settings;
pub use text::Text;
pub use wildcard::{CharClass, ClassItem, ErrorKind as PatternErrorKind, validate};

/// PatternError is returned when a pattern is malformed.
pub type PatternError = wildcard::Error;

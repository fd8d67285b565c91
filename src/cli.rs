// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// ---

/// Selects subjects matching glob wildcard patterns.
///
/// Patterns support `*` for any run of characters, `?` for exactly one character,
/// `.` for one non-whitespace character, `[...]` character classes and `\` escapes.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Pattern to match subjects against, may be repeated.
    #[arg(short, long = "pattern", value_name = "PATTERN", required = true, number_of_values = 1)]
    pub patterns: Vec<String>,

    /// Compare literal characters using Unicode simple case folding.
    #[arg(short, long, env = "GLOBFOLD_IGNORE_CASE", overrides_with = "ignore_case")]
    pub ignore_case: bool,

    /// Select subjects that are not matched.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Require every pattern to match instead of any.
    #[arg(short = 'a', long = "all", env = "GLOBFOLD_MATCH_ALL")]
    pub match_all: bool,

    /// Print only the number of selected subjects.
    #[arg(short, long)]
    pub count: bool,

    /// Number of matching threads.
    #[arg(long, short = 'C', env = "GLOBFOLD_CONCURRENCY", overrides_with = "concurrency")]
    pub concurrency: Option<usize>,

    /// Configuration file path.
    #[arg(long, value_name = "FILE", env = "GLOBFOLD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subjects to match, one per line from standard input if none are given.
    #[arg(value_name = "SUBJECT")]
    pub subjects: Vec<String>,
}

//! Unicode simple case folding.
//!
//! Two codepoints are fold-equivalent when one of them belongs to the simple case folding
//! orbit of the other. For example, `k`, `K` and `K` (KELVIN SIGN, U+212A) form a single orbit,
//! so any two of them are equivalent, although lowercasing alone would not relate `K` and `k`
//! in both directions.

// std imports
use std::sync::LazyLock;

// third-party imports
use regex_syntax::hir::{ClassUnicode, ClassUnicodeRange};

// ---

/// Every codepoint with a non-trivial orbit, mapped to the smallest member of its orbit.
/// Sorted by codepoint, built on first use.
static ORBITS: LazyLock<Vec<(char, char)>> = LazyLock::new(|| {
    (0..=char::MAX as u32)
        .filter_map(char::from_u32)
        .filter(|&ch| has_case(ch))
        .filter_map(|ch| Some((ch, representative(&orbit(ch)?)?)))
        .collect()
});

/// Reports whether `a` and `b` are equal under Unicode simple case folding.
///
/// Comparison does not allocate, orbits are looked up in a table built on first use.
///
/// # Examples
///
/// ```
/// use wildcard::fold::eq_fold;
///
/// assert!(eq_fold('a', 'A'));
/// assert!(eq_fold('É', 'é'));
/// assert!(eq_fold('k', '\u{212A}'));
/// assert!(!eq_fold('a', 'b'));
/// ```
#[inline]
pub fn eq_fold(a: char, b: char) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }

    canonical(a) == canonical(b)
}

/// Returns the smallest codepoint of the simple case folding orbit of `ch`.
///
/// Codepoints without case map to themselves.
#[inline]
pub fn canonical(ch: char) -> char {
    let table = &*ORBITS;
    match table.binary_search_by_key(&ch, |&(member, _)| member) {
        Ok(i) => table[i].1,
        Err(_) => ch,
    }
}

/// Returns the simple case folding orbit of `ch`, the codepoint itself included.
///
/// Returns `None` if case folding tables are not available.
pub fn orbit(ch: char) -> Option<ClassUnicode> {
    let mut class = ClassUnicode::new([ClassUnicodeRange::new(ch, ch)]);
    class.try_case_fold_simple().ok()?;
    Some(class)
}

// ---

fn has_case(ch: char) -> bool {
    ch.to_lowercase().ne([ch]) || ch.to_uppercase().ne([ch])
}

fn representative(orbit: &ClassUnicode) -> Option<char> {
    match orbit.ranges() {
        [range] if range.start() == range.end() => None,
        [first, ..] => Some(first.start()),
        [] => None,
    }
}

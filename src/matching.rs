// local imports
use crate::text::Text;

// ---

/// Tests whether `pattern` matches the whole `subject`, case-sensitively.
///
/// Pattern and subject may use any [`Text`] representation, results do not depend on it.
///
/// # Examples
///
/// ```
/// assert_eq!(globfold::matches("*.txt", "document.txt"), Ok(true));
/// assert_eq!(globfold::matches(b"file[0-9]", b"file3"), Ok(true));
///
/// let chars: Vec<char> = "a*b*c".chars().collect();
/// assert_eq!(globfold::matches(&chars, "axbyc"), Ok(true));
/// ```
#[inline]
pub fn matches<P, S>(pattern: &P, subject: &S) -> wildcard::Result<bool>
where
    P: Text + ?Sized,
    S: Text + ?Sized,
{
    wildcard::matches(&pattern.utf8(), &subject.utf8())
}

/// Tests whether `pattern` matches the whole `subject`, comparing literal characters
/// by Unicode simple case folding. Character classes stay case-sensitive.
///
/// # Examples
///
/// ```
/// assert_eq!(globfold::matches_fold("CAFÉ*", "café au lait"), Ok(true));
/// assert_eq!(globfold::matches_fold("[a-z]bc", "Abc"), Ok(false));
/// ```
#[inline]
pub fn matches_fold<P, S>(pattern: &P, subject: &S) -> wildcard::Result<bool>
where
    P: Text + ?Sized,
    S: Text + ?Sized,
{
    wildcard::matches_fold(&pattern.utf8(), &subject.utf8())
}

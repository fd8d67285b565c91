use super::*;
use assert_matches::assert_matches;

fn malformed(pattern: &str) -> wildcard::Error {
    wildcard::validate(pattern.as_bytes()).unwrap_err()
}

#[test]
fn test_log() {
    let err = Error::Io(std::io::Error::other("test"));
    let mut buf = Vec::new();
    err.log_to(&mut buf, true).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\u{1b}[1m\u{1b}[91merror:\u{1b}[39m\u{1b}[0m test\n"
    );

    let mut buf = Vec::new();
    err.log_to(&mut buf, false).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "error: test\n");
}

#[test]
fn test_tips() {
    let err = Error::InvalidPattern {
        index: 2,
        pattern: "a[bc".to_string(),
        source: malformed("a[bc"),
    };
    assert_eq!(
        err.to_string(),
        "invalid pattern #2 \"a[bc\": malformed pattern at offset 1: unterminated character class"
    );

    let mut buf = Vec::new();
    err.log_to(&mut buf, false).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "error: invalid pattern #2 \"a[bc\": malformed pattern at offset 1: unterminated character class\n  tip: use \\[ to match a literal bracket\n"
    );

    let mut buf = Vec::new();
    err.log_to(&mut buf, true).unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("\u{1b}[1m\u{1b}[32m  tip:\u{1b}[39m\u{1b}[0m"));

    let err = Error::from(malformed("[z-a]"));
    assert_eq!(err.tip(), Some("list the lower bound of a range first"));
}

#[test]
fn test_from() {
    assert_matches!(Error::from(malformed("[")), Error::Pattern(_));
    assert_matches!(Error::from(std::io::Error::other("x")), Error::Io(_));
    assert_eq!(Error::from(std::io::Error::other("x")).tip(), None);
}

use super::*;
use assert_matches::assert_matches;
use rstest::rstest;

fn app(patterns: &[&str], options: Options) -> App {
    App::new(patterns.iter().map(|p| p.to_string()).collect(), options).unwrap()
}

fn run(app: &App, subjects: &[&str]) -> (usize, String) {
    let mut output = Vec::new();
    let n = app.run(subjects, &mut output).unwrap();
    (n, String::from_utf8(output).unwrap())
}

const SUBJECTS: &[&str] = &["readme.md", "main.rs", "Cargo.toml", "lib.RS", "build log.txt"];

#[rstest]
#[case(&["*.rs"], Options::default(), "main.rs\n")]
#[case(&["*.rs"], Options { ignore_case: true, ..Default::default() }, "main.rs\nlib.RS\n")]
#[case(&["*.rs", "*.md"], Options::default(), "readme.md\nmain.rs\n")]
#[case(&["*.rs", "m*"], Options { match_all: true, ..Default::default() }, "main.rs\n")]
#[case(&["*.rs"], Options { invert: true, ..Default::default() }, "readme.md\nCargo.toml\nlib.RS\nbuild log.txt\n")]
#[case(&["*.*"], Options::default(), "readme.md\nmain.rs\nCargo.toml\nlib.RS\nbuild log.txt\n")]
#[case(&["* *"], Options::default(), "build log.txt\n")]
#[case(&["[A-Z]*"], Options { ignore_case: true, ..Default::default() }, "Cargo.toml\n")]
fn test_run(#[case] patterns: &[&str], #[case] options: Options, #[case] expected: &str) {
    let app = app(patterns, options);
    let (n, output) = run(&app, SUBJECTS);
    assert_eq!(output, expected);
    assert_eq!(n, expected.lines().count());
}

#[test]
fn test_count() {
    let app = app(
        &["*.rs"],
        Options {
            count: true,
            ignore_case: true,
            ..Default::default()
        },
    );
    assert_eq!(run(&app, SUBJECTS), (2, "2\n".to_string()));
    assert_eq!(run(&app, &[]), (0, "0\n".to_string()));
}

#[test]
fn test_run_lines() {
    let app = app(&["caf?", "*\\*"], Options::default());
    let input: &[u8] = b"cafe\ncaf\xc3\xa9\ncaf\xff\nnope\nstar*\ncafes";
    let mut output = Vec::new();
    assert_eq!(app.run_lines(input, &mut output).unwrap(), 4);
    assert_eq!(output, b"cafe\ncaf\xc3\xa9\ncaf\xff\nstar*\n");
}

#[test]
fn test_invalid_pattern() {
    let result = App::new(vec!["*.rs".into(), "[z-a]".into()], Options::default());
    assert_matches!(
        result,
        Err(Error::InvalidPattern {
            index: 1,
            ref pattern,
            source: wildcard::Error {
                offset: 0,
                kind: wildcard::ErrorKind::InvertedRange { start: 'z', end: 'a' },
            },
        }) if pattern == "[z-a]"
    );
}

#[test]
fn test_concurrent_select() {
    let patterns: Vec<String> = (0..64).map(|i| format!("item-{i}")).collect();
    let app = App::new(
        patterns,
        Options {
            concurrency: 4,
            chunk_size: 1,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(app.select("item-63").unwrap());
    assert!(!app.select("item-64").unwrap());
}

#[rstest]
#[case(Outcome::Help, 0)]
#[case(Outcome::Closed, 0)]
#[case(Outcome::Selected(0), 1)]
#[case(Outcome::Selected(1), 0)]
#[case(Outcome::Selected(42), 0)]
fn test_exit_code(#[case] outcome: Outcome, #[case] expected: i32) {
    assert_eq!(outcome.exit_code(), expected);
}

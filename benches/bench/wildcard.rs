// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::{GROUP, ND};

criterion_group!(benches, bench, bench_syntax);

fn bench(c: &mut Criterion) {
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
    bench_with::<Glob>(c, "globfold");
    bench_with::<GlobFold>(c, "globfold-fold");
}

fn bench_with<Pattern: Wildcard>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group(format!("{}{}wildcard", GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    const P1X: (&str, &str) = ("1x", "_*");
    const P27X: (&str, &str) = ("27x", "SOME_VERY_VERY_LONG_PREFIX_*");
    const PMID: (&str, &str) = ("mid", "*_VERY_*_NAME");
    const PQ: (&str, &str) = ("q", "*?_NAME");

    let variants = [
        ("short", "_TEST", P1X, true),
        ("short", "TEST", P1X, false),
        ("long", "_TEST_SOME_VERY_VERY_LONG_NAME", P1X, true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", P27X, true),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", P27X, false),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", PMID, true),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAMES", PMID, false),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", PQ, true),
    ];

    for (name, input, (pname, pattern), expected) in &variants {
        let function = format!("{}{}matches", title, ND);
        let param = format!(
            "{}{}{}{}{}{}{}",
            name,
            ND,
            pname,
            ND,
            if *expected { "pos" } else { "neg" },
            ND,
            input.len(),
        );
        let pattern = Pattern::new(pattern);
        let setup = || String::from(*input);
        let routine = |input: String| black_box(&pattern).matches(&input);

        assert_eq!(routine(setup()), *expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(function, param), |b| {
            b.iter_batched(setup, routine, BatchSize::SmallInput);
        });
    }
}

fn bench_syntax(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}syntax", GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("class", "[a-z]*[0-9][!x]", "server_log_2025_file9y", true, false),
        ("class", "[a-z]*[0-9][!x]", "server_log_2025_file9x", false, false),
        ("dot", "....*.", "error: disk failure", true, false),
        ("fold", "ERROR: *FAILURE", "error: disk failure", true, true),
        ("fold", "straße*", "STRASSE and more", false, true),
        ("fold", "ΣΊΣΥΦΟΣ*", "σίσυφος the king", true, true),
        ("literal", "error: disk failure", "error: disk failure", true, false),
    ];

    for (name, pattern, input, expected, fold) in variants {
        let eval = move |input: &str| {
            if fold {
                globfold::matches_fold(pattern, input)
            } else {
                globfold::matches(pattern, input)
            }
        };

        assert_eq!(eval(input), Ok(expected));

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(name, pattern), |b| {
            b.iter(|| eval(black_box(input)));
        });
    }
}

// ---

trait Wildcard {
    fn new(pattern: &'static str) -> Self;
    fn matches(&self, what: &str) -> bool;
}

impl Wildcard for wildmatch::WildMatch {
    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}

struct Glob(&'static str);

impl Wildcard for Glob {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        globfold::matches(self.0, what).unwrap_or(false)
    }
}

struct GlobFold(&'static str);

impl Wildcard for GlobFold {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        globfold::matches_fold(self.0, what).unwrap_or(false)
    }
}

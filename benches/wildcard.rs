// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

// workspace imports
use pathmatch::{Matcher, Pattern};

criterion_group!(benches, bench_evaluate, bench_cached);
criterion_main!(benches);

const VARIANTS: &[(&str, &str, &str, bool)] = &[
    ("constant", "src/lib.rs", "src/lib.rs", true),
    ("single-star", "src/*.rs", "src/matcher.rs", true),
    ("single-star", "src/*.rs", "src/matcher/tests.rs", false),
    ("double-star", "src/**.rs", "src/matcher/tests.rs", true),
    ("complex", "src/**/*.rs", "src/a/b/c/d/lib.rs", true),
    ("complex", "**/*/**", "foo/bar/baz/bug", true),
    ("complex", "src/**/*.rs", "src/a/b/c/d/lib.txt", false),
];

fn bench_evaluate(c: &mut Criterion) {
    let mut c = c.benchmark_group("wildcard:evaluate");
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for (name, pattern, input, expected) in VARIANTS {
        let param = format!("{}:{}:{}", name, if *expected { "pos" } else { "neg" }, input.len());
        let pattern = Pattern::new(pattern);

        assert_eq!(pattern.captures(input).is_some(), *expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new("captures", &param), |b| {
            b.iter(|| black_box(&pattern).captures(black_box(input)).map(|caps| caps.len()));
        });
        c.bench_function(BenchmarkId::new("matches", &param), |b| {
            b.iter(|| black_box(&pattern).matches(black_box(input)));
        });
    }
}

fn bench_cached(c: &mut Criterion) {
    let mut c = c.benchmark_group("wildcard:cached");
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let matcher = Matcher::new();
    for (name, pattern, input, expected) in VARIANTS {
        let param = format!("{}:{}:{}", name, if *expected { "pos" } else { "neg" }, input.len());

        assert_eq!(matcher.matches(pattern, input), *expected);

        c.bench_function(BenchmarkId::new("cached", &param), |b| {
            b.iter(|| matcher.matches(black_box(pattern), black_box(input)));
        });
        c.bench_function(BenchmarkId::new("compile", &param), |b| {
            b.iter(|| Pattern::new(black_box(pattern)).matches(black_box(input)));
        });
    }
}

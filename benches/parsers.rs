use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use flexible_version::{parse, VersionValue};

const INPUT_S: &str = "1.0";
const INPUT_XL: &str = "10.0.19041.1";
const INPUT_TRUNCATED: &str = "1.2.3.4-beta3";
const INPUT_OVERFLOW: &str = "1.2.98765432109876543210987654321.4.5";

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser");

    for &input in [INPUT_S, INPUT_XL].iter() {
        let strict = BenchmarkId::new("strict_parser", input);
        group.bench_with_input(strict, input, |b, input| {
            b.iter(|| VersionValue::parse(black_box(input)).unwrap())
        });
        let flexible = BenchmarkId::new("flexible_parser", input);
        group.bench_with_input(flexible, input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }

    for &input in [INPUT_TRUNCATED, INPUT_OVERFLOW].iter() {
        let flexible = BenchmarkId::new("flexible_parser", input);
        group.bench_with_input(flexible, input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);

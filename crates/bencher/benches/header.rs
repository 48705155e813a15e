use std::hint::black_box;

use bencher::{TestCase, TestFile};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use micro_httputil::header::{normalize_header, parse_header, tokenize};

static CACHE_CONTROL_SMALL: TestFile =
    TestFile::new("cache_control_small.txt", include_str!("../resources/header/cache_control_small.txt"));
static CACHE_CONTROL_LARGE: TestFile =
    TestFile::new("cache_control_large.txt", include_str!("../resources/header/cache_control_large.txt"));
static SEC_CH_UA: TestFile = TestFile::new("sec_ch_ua.txt", include_str!("../resources/header/sec_ch_ua.txt"));

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::small("cache_control", CACHE_CONTROL_SMALL),
        TestCase::small("sec_ch_ua", SEC_CH_UA),
        TestCase::large("cache_control", CACHE_CONTROL_LARGE),
    ]
}

fn benchmark_tokenize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tokenize");

    for case in create_test_cases() {
        group.throughput(Throughput::Bytes(case.header_value().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.id()), &case, |b, case| {
            b.iter(|| {
                let tokens = tokenize(black_box(case.header_value())).expect("fixture should be tokenizable");
                black_box(tokens);
            });
        });
    }

    group.finish();
}

fn benchmark_normalize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("normalize_header");

    for case in create_test_cases() {
        group.throughput(Throughput::Bytes(case.header_value().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.id()), &case, |b, case| {
            b.iter(|| black_box(normalize_header(black_box(case.header_value()))));
        });
    }

    group.finish();
}

fn benchmark_parse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("parse_header");

    // sec-ch-ua lists start with quoted strings and are rejected early
    for case in create_test_cases() {
        group.throughput(Throughput::Bytes(case.header_value().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.id()), &case, |b, case| {
            b.iter(|| black_box(parse_header(black_box(case.header_value()))));
        });
    }

    group.finish();
}

criterion_group!(header, benchmark_tokenize, benchmark_normalize, benchmark_parse);
criterion_main!(header);

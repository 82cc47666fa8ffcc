use chatmark_engine::{parse_message, tokenize};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_parse_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_transcript(100);
    group.bench_function("parse_message", |b| {
        b.iter(|| {
            let blocks = parse_message(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let line = common::formatted_line();
    group.bench_function("tokenize", |b| {
        b.iter(|| {
            let spans = tokenize(std::hint::black_box(line));
            std::hint::black_box(spans);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_message, bench_tokenize);
criterion_main!(benches);

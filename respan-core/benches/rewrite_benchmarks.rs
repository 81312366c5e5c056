//! Performance benchmarks for emoji scanning and entity rewriting
//!
//! Run with: cargo bench --bench rewrite_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use respan_core::{rewrite_emoji, rewrite_entities, EmojiPattern, Extractor, PatternExtractor};
use std::hint::black_box;

/// Generate tweet-like text of the given size in bytes
fn generate_text(size: usize) -> String {
    let base = "Shipping today \u{1F680} thanks @ann/core #rust \u{1F469}\u{1F3FD}\u{200D}\u{1F4BB} https://example.com/post \u{1F1EF}\u{1F1F5}. ";
    let mut text = base.repeat(size / base.len() + 1);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

/// Benchmark whole-text emoji scanning
fn bench_emoji_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji_scan");
    let pattern = EmojiPattern::global();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("find_in", size), &text, |b, text| {
            b.iter(|| pattern.find_in(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark rewriting with pre-extracted entities
fn bench_rewrite_entities(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite_entities");
    let extractor = PatternExtractor::builtin().unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        let entities = extractor.extract_entities(&text);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("rewrite", size), &text, |b, text| {
            b.iter(|| rewrite_entities(black_box(text), &entities, |_, _| "<entity>"));
        });
    }

    group.finish();
}

/// Benchmark extraction plus rewriting, and emoji rewriting
fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let extractor = PatternExtractor::builtin().unwrap();
    let text = generate_text(10_240);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("extract_and_rewrite", |b| {
        b.iter(|| {
            let entities = extractor.extract_entities(black_box(&text));
            rewrite_entities(&text, &entities, |_, _| "<entity>")
        });
    });
    group.bench_function("rewrite_emoji", |b| {
        b.iter(|| rewrite_emoji(black_box(&text), |span, _| span.category.as_str()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_emoji_scan,
    bench_rewrite_entities,
    bench_end_to_end
);
criterion_main!(benches);

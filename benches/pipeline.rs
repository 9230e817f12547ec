//! Benchmarks for the text half of the pipeline: case, wrap and layout.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quotewall::{layout, wrap, Extent, TextCase};

const SHORT: &str = "Stay hungry, stay foolish.";
const LONG: &str = "The only way to do great work is to love what you do. If you \
                    haven't found it yet, keep looking. Don't settle. As with all matters \
                    of the heart, you'll know when you find it.";

fn mono(text: &str) -> Extent {
    Extent::new(text.chars().count() as f32 * 18.0, 30.0)
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    group.bench_function("titlecase_long", |b| {
        b.iter(|| TextCase::Titlecase.apply(black_box(LONG)))
    });

    group.bench_function("wrap_short", |b| b.iter(|| wrap(black_box(SHORT), 30)));

    group.bench_function("wrap_long", |b| b.iter(|| wrap(black_box(LONG), 30)));

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    let lines = wrap(&TextCase::Uppercase.apply(LONG), 30);

    group.bench_function("layout_long", |b| {
        b.iter(|| layout(black_box(lines.clone()), mono, 1920, 1080, 15))
    });

    group.finish();
}

criterion_group!(benches, bench_text, bench_layout);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tourdesk::presentation::widgets::text_field::{display_value, masked_display};

const SHORT: &str = "hunter2";
const LONG: &str = "correct horse battery staple correct horse battery staple \
                    correct horse battery staple correct horse battery staple";

fn benchmark(c: &mut Criterion) {
    c.bench_function("masked-short", |b| {
        b.iter(|| masked_display(black_box(SHORT)))
    });

    c.bench_function("masked-long", |b| b.iter(|| masked_display(black_box(LONG))));

    c.bench_function("plain-long", |b| {
        b.iter(|| display_value(black_box(LONG), black_box(false)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

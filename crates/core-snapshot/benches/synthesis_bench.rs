//! Hot-path benchmark: full synthesis of a medium document.

use core_snapshot::EditorSession;
use core_style::Theme;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_source(lines: usize) -> String {
    let mut src = String::new();
    for i in 0..lines {
        src.push_str(&format!(
            "fn item_{i}(x: u32) -> u32 {{ x + {i} /* note */ }}\n"
        ));
    }
    src
}

fn bench_synthesize(c: &mut Criterion) {
    let source = sample_source(200);
    let mut session = EditorSession::new("Rust", Theme::default()).expect("rust registered");
    c.bench_function("synthesize_rust_200_lines", |b| {
        b.iter(|| black_box(session.synthesize(black_box(&source))))
    });

    let mut plain = EditorSession::new("Plain Text", Theme::default()).expect("plain registered");
    c.bench_function("synthesize_plain_200_lines", |b| {
        b.iter(|| black_box(plain.synthesize(black_box(&source))))
    });
}

criterion_group!(benches, bench_synthesize);
criterion_main!(benches);

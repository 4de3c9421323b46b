use criterion::{Criterion, criterion_group, criterion_main};
use mathdown_engine::{RenderMode, scan, segment};

/// A mixed document: text, inline math, and display blocks per paragraph,
/// closed by one named equation.
fn mixed_document(paragraphs: usize) -> String {
    let mut out = String::new();
    for i in 0..paragraphs {
        out.push_str(&format!(
            "Paragraph {i} with inline $a_{i}^2 + b$ math and more text. \
             $$\\sum_k k^{i}$$ trailing words.\n"
        ));
    }
    out.push_str("\\begin{equation}x = y\\end{equation}\n");
    out
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenting");
    group.sample_size(10);

    let content = mixed_document(100);
    group.bench_function("scan", |b| {
        b.iter(|| {
            let components = scan(std::hint::black_box(&content));
            std::hint::black_box(components);
        });
    });

    group.bench_function("segment", |b| {
        b.iter(|| {
            let blocks = segment(std::hint::black_box(&content), RenderMode::Document);
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);

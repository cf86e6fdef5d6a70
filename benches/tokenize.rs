//! Throughput benchmark for the tokenizer, grounded on `html`'s
//! `benches/html_bench.rs`: a synthetic, deeply-nested document of
//! repeated tags, attributes, text, and comments, tokenized whole.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xmltok::tokenize;

fn synthetic_document(repeats: usize) -> String {
    let mut doc = String::from("<root>");
    for i in 0..repeats {
        doc.push_str(&format!(
            "<item id=\"{i}\" kind=\"sample\">text node {i} &amp; more<!-- note {i} --></item>"
        ));
    }
    doc.push_str("</root>");
    doc
}

fn bench_tokenize(c: &mut Criterion) {
    let small = synthetic_document(100);
    let large = synthetic_document(10_000);

    c.bench_function("tokenize_small_document", |b| {
        b.iter(|| tokenize(black_box(&small)))
    });

    c.bench_function("tokenize_large_document", |b| {
        b.iter(|| tokenize(black_box(&large)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);

//! Criterion benchmarks for lexigraph.
//!
//! Covers the two hot paths: graph construction from a document and
//! weighted shortest-path queries over the built graph.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexigraph::graph::builder::GraphBuilder;
use lexigraph::query::path::PathFinder;

/// Generate a synthetic document that produces a well-connected word graph.
fn generate_document(word_count: usize) -> String {
    let words = [
        "graph", "vertex", "edge", "weight", "bridge", "path", "walk", "word",
        "text", "token", "stream", "build", "query", "random", "source",
        "target", "document", "adjacency", "count", "sequence",
    ];

    let mut document = String::new();
    for i in 0..word_count {
        document.push_str(words[(i * 7 + i / 3) % words.len()]);
        if i % 11 == 10 {
            document.push('.');
        }
        document.push(' ');
    }
    document
}

fn bench_graph_build(c: &mut Criterion) {
    let builder = GraphBuilder::new().unwrap();
    let document = generate_document(10_000);

    let mut group = c.benchmark_group("graph_build");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("build_10k_words", |b| {
        b.iter(|| builder.build_from_text(black_box(&document)).unwrap())
    });
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let builder = GraphBuilder::new().unwrap();
    let graph = builder.build_from_text(&generate_document(10_000)).unwrap();
    let finder = PathFinder::new(&graph);

    c.bench_function("shortest_path", |b| {
        b.iter(|| {
            finder
                .shortest_path(black_box("graph"), black_box("adjacency"))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_graph_build, bench_shortest_path);
criterion_main!(benches);

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the unispace-text engine on a document-sized input.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use unispace_text::{Registry, apply_custom_spacing, substitute_spaces_in_html, text_stats};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Roughly the size of the text pulled out of a ten-page PDF.
fn sample_text() -> String {
    "The quick brown fox jumps over the lazy dog. ".repeat(1_000)
}

fn bench_custom_spacing(c: &mut Criterion) {
    let text = sample_text();
    let registry = Registry::standard();
    let selected = ["Narrow No-Break", "Hair Space", "Word Joiner"];

    c.bench_function("apply_custom_spacing (45 KB)", |b| {
        b.iter(|| black_box(apply_custom_spacing(&selected, black_box(&text), registry)));
    });
}

fn bench_html_spacing(c: &mut Criterion) {
    let html = format!("<article><p>{}</p></article>", sample_text());

    c.bench_function("substitute_spaces_in_html (45 KB)", |b| {
        b.iter(|| black_box(substitute_spaces_in_html(black_box(&html), "\u{200A}")));
    });
}

fn bench_stats(c: &mut Criterion) {
    let text = sample_text();

    c.bench_function("text_stats (45 KB)", |b| {
        b.iter(|| black_box(text_stats(black_box(&text))));
    });
}

criterion_group!(benches, bench_custom_spacing, bench_html_spacing, bench_stats);
criterion_main!(benches);

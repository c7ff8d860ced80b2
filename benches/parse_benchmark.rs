//! Benchmarks for unrtf extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the tokenizer with synthetic Outlook-style RTF.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic RTF-wrapped HTML message with the given number of
/// content paragraphs.
fn create_test_rtf(paragraphs: usize) -> String {
    let mut content = String::new();

    content.push_str("{\\rtf1\\ansi\\ansicpg1252\\fromhtml1 \\deff0\n");
    content.push_str("{\\fonttbl{\\f0\\fswiss\\fcharset0;}}\n");
    content.push_str("{\\colortbl\\red0\\green0\\blue0;\\red0\\green0\\blue255;}\n");
    content.push_str("{\\*\\htmltag19 <html>}\n{\\*\\htmltag50 <body>}\n");

    for i in 0..paragraphs {
        content.push_str("{\\*\\htmltag96 <p>}\\htmlrtf0 ");
        content.push_str(&format!(
            "Paragraph {} - benchmark content for unrtf performance measurement.\n",
            i + 1
        ));
        content.push_str("{\\*\\htmltag4 \\par}\n");
        content.push_str("{\\*\\htmltag104 </p>}\n");
    }

    content.push_str("{\\*\\htmltag58 </body>}\n{\\*\\htmltag27 </html>}\n}\n");
    content
}

fn bench_tokenize_line(c: &mut Criterion) {
    let line = "{\\*\\htmltag84 <a href=\"https://example.com/\">}\\htmlrtf0 linked text";

    c.bench_function("tokenize_line", |b| {
        b.iter(|| unrtf::tokenize(black_box(line)).unwrap())
    });
}

fn bench_extract_line(c: &mut Criterion) {
    let line = "{\\*\\htmltag96 <p>}\\htmlrtf0 Hello from the benchmark suite";

    c.bench_function("extract_line", |b| {
        b.iter(|| unrtf::extract_line(black_box(line)).unwrap())
    });
}

fn bench_extract_document(c: &mut Criterion) {
    let small = create_test_rtf(10);
    let large = create_test_rtf(1000);

    c.bench_function("extract_document_10", |b| {
        b.iter(|| unrtf::extract_document(black_box(&small)).unwrap())
    });
    c.bench_function("extract_document_1000", |b| {
        b.iter(|| unrtf::extract_document(black_box(&large)).unwrap())
    });
    c.bench_function("extract_document_parallel_1000", |b| {
        b.iter(|| unrtf::extract_document_parallel(black_box(&large)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_tokenize_line,
    bench_extract_line,
    bench_extract_document
);
criterion_main!(benches);

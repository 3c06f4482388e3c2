//! Tokenization throughput benchmarks.
//!
//! Registered via the commented-out `[[bench]]` section in Cargo.toml;
//! re-enable it to run these with `cargo bench`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gitk_syntax::{tokenize_line, LanguageId};

const RUST_LINE: &str =
    "pub fn tokenize_line(line: &str, language: Option<LanguageId>) -> Vec<Token> {";
const JS_LINE: &str = "const result = items.filter(x => x.value >= 0).map(format); // keep";
const XML_LINE: &str = r#"<rect x="10" y="20" width="100" height="50" fill="none"/>"#;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_line");

    group.bench_function("rust", |b| {
        b.iter(|| tokenize_line(black_box(RUST_LINE), Some(LanguageId::Rust)))
    });
    group.bench_function("javascript", |b| {
        b.iter(|| tokenize_line(black_box(JS_LINE), Some(LanguageId::JavaScript)))
    });
    group.bench_function("xml", |b| {
        b.iter(|| tokenize_line(black_box(XML_LINE), Some(LanguageId::Xml)))
    });
    group.bench_function("no_language", |b| {
        b.iter(|| tokenize_line(black_box(RUST_LINE), None))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);

//! Tokenizer throughput benchmarks for `lumen_lexer`.
//!
//! Measures end-to-end token production including owned token text, at
//! several source sizes, plus the comment-heavy case that exercises the
//! iterative trivia loop.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lumen_lexer::{SourceBuffer, Tokenizer};

/// Generate N small function definitions.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "func$ f{i}(xs) {{\n  # body {i}\n  let$ n := xs ::len\n  \
                 if$ (n >= {i}.5) {{ ::print \"big \\\"{i}\\\"\" }} else {{ xs ::append {i} }}\n}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn drain(src: &str) {
    let buf = SourceBuffer::new(src);
    let mut tokenizer = Tokenizer::new(&buf);
    loop {
        let tok = tokenizer.next_token();
        if tok.is_eof() {
            break;
        }
        black_box(tok);
    }
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| b.iter(|| drain(src)),
        );
    }

    group.finish();
}

fn bench_comment_block(c: &mut Criterion) {
    let source = format!("{}::print x", "# commented out\n".repeat(50_000));
    let mut group = c.benchmark_group("tokenizer/comments");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("50k_lines", |b| b.iter(|| drain(&source)));
    group.finish();
}

criterion_group!(benches, bench_throughput, bench_comment_block);
criterion_main!(benches);

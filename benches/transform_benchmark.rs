use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use whitespace_tools::transform::{normalize_newlines, strip_trailing_whitespace};
use whitespace_tools::walker::heuristic::sample_looks_text;

fn generate_test_content(lines: usize, dirty_per_100_lines: usize) -> Vec<u8> {
    let mut content = Vec::new();

    for i in 0..lines {
        if i % (100 / dirty_per_100_lines) == 0 {
            // Trailing whitespace
            content.extend_from_slice(format!("let var_{} = {};  \t\n", i, i).as_bytes());
        } else if i % 7 == 0 {
            // Whitespace-only line
            content.extend_from_slice(b"    \n");
        } else {
            content.extend_from_slice(format!("    let var_{} = {};\n", i, i).as_bytes());
        }
    }

    content.extend_from_slice(b"\n\n\r\n");
    content
}

fn benchmark_strip_trailing(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_trailing_whitespace");

    for size in [100, 1000, 10000].iter() {
        let content = generate_test_content(*size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| strip_trailing_whitespace(black_box(content)));
        });
    }

    group.finish();
}

fn benchmark_normalize_newlines(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_newlines");

    for size in [100, 1000, 10000].iter() {
        let content = generate_test_content(*size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| normalize_newlines(black_box(content)));
        });
    }

    group.finish();
}

fn benchmark_text_heuristic(c: &mut Criterion) {
    let ascii = generate_test_content(200, 10);
    let sample = &ascii[..ascii.len().min(4096)];
    let unicode = "日本語のテキスト 🦀 ".repeat(200);
    let unicode = &unicode.as_bytes()[..4096];
    let noisy: Vec<u8> = (0..4096u32).map(|i| (i * 37 % 251) as u8 | 1).collect();

    c.bench_function("looks_text_ascii", |b| {
        b.iter(|| sample_looks_text(black_box(sample)))
    });
    c.bench_function("looks_text_unicode", |b| {
        b.iter(|| sample_looks_text(black_box(unicode)))
    });
    c.bench_function("looks_text_noisy", |b| {
        b.iter(|| sample_looks_text(black_box(&noisy)))
    });
}

criterion_group!(
    benches,
    benchmark_strip_trailing,
    benchmark_normalize_newlines,
    benchmark_text_heuristic
);
criterion_main!(benches);

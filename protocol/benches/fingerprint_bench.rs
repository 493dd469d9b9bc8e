// Content fingerprinting benchmarks.
//
// Covers hash generation for small and large submissions, display
// formatting, and verification (both the matching and mismatching path).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chainvote_protocol::{ContentFingerprinter, HashableContent};

fn submission(description_len: usize) -> HashableContent {
    HashableContent::new(
        "  Fund the community garden  ",
        "x".repeat(description_len),
        1_700_000_000_000,
    )
    .with_url("https://chainvote.example/p/42")
}

fn bench_generate_hash(c: &mut Criterion) {
    let fingerprinter = ContentFingerprinter::new();
    let mut group = c.benchmark_group("fingerprint/generate_hash");

    for size in [64usize, 1_024, 16_384] {
        let content = submission(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| fingerprinter.generate_hash(content));
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let fingerprinter = ContentFingerprinter::new();
    let content = submission(1_024);
    let display = fingerprinter
        .format_for_display(&content)
        .expect("hash generation");

    c.bench_function("fingerprint/verify_match", |b| {
        b.iter(|| fingerprinter.verify(&content, &display));
    });

    c.bench_function("fingerprint/verify_mismatch", |b| {
        b.iter(|| fingerprinter.verify(&content, "deadbeef"));
    });
}

criterion_group!(benches, bench_generate_hash, bench_verify);
criterion_main!(benches);

// benches/estimate_bench.rs
//
// Coverage estimation over Factbook-style blurbs of increasing difficulty.
//
// Run with `cargo bench --bench estimate`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use langcov::{Estimator, default_target_names};

// ---------------------------------------------------------------------------
// Corpus – numbered shares, mixed, and no numbers at all
// ---------------------------------------------------------------------------
const SAMPLES: &[(&str, &str)] = &[
    ("single", "Japanese"),
    (
        "numbered",
        "English only 78.2%, Spanish 13.4%, Chinese 1.1%, other 7.3%, unspecified 0.02% (2017 est.)",
    ),
    (
        "aliases",
        "English (official) 48.3%, Mandarin (official) 29.9%, other Chinese dialects (includes Hokkien, Cantonese, Teochew, Hakka) 8.7%, Malay (official) 9.2%, Tamil (official) 2.5%, other 1.4% (2020 est.)",
    ),
    (
        "unnumbered",
        "Arabic (official), Berber languages (Tamazight (official), Tachelhit, Tarifit), French (often the language of business, government, and diplomacy)",
    ),
];

fn bench_estimate(c: &mut Criterion) {
    let est = Estimator::default();
    let targets = default_target_names();
    let mut group = c.benchmark_group("estimate_coverage");

    for &(label, text) in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(label), text, |b, text| {
            b.iter(|| est.estimate_coverage(black_box(text), black_box(&targets)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("estimator_build", |b| {
        b.iter(|| Estimator::builder().build().unwrap())
    });
}

criterion_group!(benches, bench_estimate, bench_build);
criterion_main!(benches);

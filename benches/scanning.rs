//! Benchmarks for pixel scanning and word resolution.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xlcloud::catalog::WordCatalog;
use xlcloud::raster::Raster;
use xlcloud::resolve::resolve;
use xlcloud::scan::scan;
use xlcloud::WordEntry;

/// A catalog of `count` words and a canvas with one block per word laid out
/// on a grid, roughly what a dense cloud looks like to the scanner.
fn synthetic_cloud(count: usize, width: u32, height: u32) -> (WordCatalog, Raster) {
    let entries = (0..count)
        .filter_map(|i| WordEntry::from_cells(&format!("word{i}"), None))
        .collect();
    let catalog = WordCatalog::build(entries);
    let mut raster = Raster::transparent(width, height).expect("raster");

    let cols = 10u32;
    let cell_w = width / cols;
    let cell_h = 40;
    for (i, (_, color)) in catalog.colored_entries().enumerate() {
        let i = i as u32;
        let x = (i % cols) * cell_w;
        let y = (i / cols) * cell_h;
        raster.fill_rect(x + 4, y + 8, cell_w - 8, cell_h - 16, [color.r, color.g, color.b, 255]);
    }
    (catalog, raster)
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for &(w, h) in &[(400u32, 300u32), (800, 600), (1600, 1200)] {
        let (_, raster) = synthetic_cloud(120, w, h);
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        for stride in [1u32, 2, 4] {
            group.bench_with_input(
                BenchmarkId::new(format!("{w}x{h}"), stride),
                &stride,
                |b, &stride| b.iter(|| scan(black_box(&raster), stride)),
            );
        }
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let (catalog, raster) = synthetic_cloud(120, 800, 600);
    let clusters = scan(&raster, 2);

    c.bench_function("resolve_120_words", |b| {
        b.iter(|| resolve(black_box(&clusters), black_box(&catalog), 25))
    });
}

criterion_group!(benches, bench_scan, bench_resolve);
criterion_main!(benches);

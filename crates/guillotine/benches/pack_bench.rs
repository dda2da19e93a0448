//! Benchmarks for the guillotine packer.
//!
//! Measures full pack runs at various piece counts against a standard
//! plywood sheet.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cutplan_guillotine::{BoardDimensions, GuillotinePacker, PieceSpec, Settings};

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("guillotine_pack");
    group.sample_size(20);

    for &n in &[10, 50, 200] {
        let pieces: Vec<PieceSpec> = (0..n)
            .map(|i| {
                let w = 150.0 + (i as f64 * 37.0) % 450.0;
                let l = 100.0 + (i as f64 * 53.0) % 350.0;
                PieceSpec::new(format!("P{}", i), w, l).with_quantity(1 + (i % 3) as u32)
            })
            .collect();
        let board = BoardDimensions::new(2440.0, 1220.0);
        let settings = Settings::new()
            .with_kerf(3.0)
            .with_edge_trim(5.0)
            .with_respect_grain(false);
        let packer = GuillotinePacker::new(settings);

        group.bench_with_input(
            BenchmarkId::new("pieces", n),
            &(pieces, board, packer),
            |b, (pieces, board, packer)| {
                b.iter(|| {
                    let result = packer.pack(black_box(board), black_box(pieces));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_settings_builder(c: &mut Criterion) {
    c.bench_function("settings_builder", |b| {
        b.iter(|| {
            Settings::new()
                .with_kerf(black_box(3.0))
                .with_edge_trim(black_box(5.0))
                .with_min_scrap(black_box(100.0), black_box(100.0))
        })
    });
}

criterion_group!(benches, bench_pack, bench_settings_builder);
criterion_main!(benches);

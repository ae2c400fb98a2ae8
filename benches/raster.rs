use bitgrid::utils::raster::{from_luma, render_luma};
use bitgrid::BitGrid;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn striped(columns: usize, rows: usize) -> BitGrid {
    let mut grid = BitGrid::with_size(columns, rows);
    for row in (0..rows as i32).step_by(2) {
        grid.set_row(row, true);
    }
    grid
}

fn bench_render_small(c: &mut Criterion) {
    let grid = striped(100, 100);
    c.bench_function("render_luma_100x100", |b| b.iter(|| render_luma(black_box(&grid), 255, 0)));
}

fn bench_render_large(c: &mut Criterion) {
    let grid = striped(1920, 1080);
    c.bench_function("render_luma_1920x1080", |b| b.iter(|| render_luma(black_box(&grid), 255, 0)));
}

fn bench_import(c: &mut Criterion) {
    let image = render_luma(&striped(640, 480), 255, 0);
    c.bench_function("from_luma_640x480", |b| b.iter(|| from_luma(black_box(&image), 128)));
}

criterion_group!(benches, bench_render_small, bench_render_large, bench_import);
criterion_main!(benches);

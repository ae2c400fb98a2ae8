use bitgrid::BitGrid;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_insert_rows_middle(c: &mut Criterion) {
    c.bench_function("insert_rows_256x256_middle", |b| {
        b.iter(|| {
            let mut grid = BitGrid::with_size(256, 256);
            grid.insert_rows(black_box(128), black_box(4)).unwrap()
        })
    });
}

fn bench_insert_columns_middle(c: &mut Criterion) {
    c.bench_function("insert_columns_256x256_middle", |b| {
        b.iter(|| {
            let mut grid = BitGrid::with_size(256, 256);
            grid.insert_columns(black_box(128), black_box(4)).unwrap()
        })
    });
}

fn bench_remove_columns_front(c: &mut Criterion) {
    c.bench_function("remove_columns_256x256_front", |b| {
        b.iter(|| {
            let mut grid = BitGrid::with_size(256, 256);
            grid.remove_columns(black_box(0), black_box(8)).unwrap()
        })
    });
}

fn bench_resize_grow(c: &mut Criterion) {
    c.bench_function("set_dimensions_grow_512", |b| {
        b.iter(|| {
            let mut grid = BitGrid::with_size(256, 256);
            grid.set_dimensions(black_box(512), black_box(512), None);
            grid.len()
        })
    });
}

criterion_group!(
    benches,
    bench_insert_rows_middle,
    bench_insert_columns_middle,
    bench_remove_columns_front,
    bench_resize_grow
);
criterion_main!(benches);

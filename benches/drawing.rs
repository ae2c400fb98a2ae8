use bitgrid::{BitGrid, BitOrder, PackedGlyphTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn solid_table() -> PackedGlyphTable {
    PackedGlyphTable::new(8, 8, 0, BitOrder::LsbFirst, vec![0xAAu8; 8 * 128]).unwrap()
}

fn bench_draw_rect(c: &mut Criterion) {
    let mut grid = BitGrid::with_size(640, 480);
    c.bench_function("draw_rect_640x480_full", |b| {
        b.iter(|| grid.draw_rect(black_box((0, 0)), black_box((479, 639)), black_box(true)))
    });
}

fn bench_set_bits(c: &mut Criterion) {
    let mut grid = BitGrid::with_size(640, 480);
    let cells: Vec<(i32, i32)> = (0..480).map(|i| (i, (i * 7) % 640)).collect();
    let mut on = false;
    c.bench_function("set_bits_480_scattered", |b| {
        b.iter(|| {
            on = !on;
            grid.set_bits(black_box(cells.iter().copied()), on)
        })
    });
}

fn bench_draw_text(c: &mut Criterion) {
    let table = solid_table();
    let mut grid = BitGrid::with_size(640, 16);
    let text = "The quick brown fox jumps over the lazy dog 0123456789";
    c.bench_function("draw_text_8x8_54_chars", |b| {
        b.iter(|| grid.draw_text(&table, black_box(text), 0, 4, true).unwrap())
    });
}

criterion_group!(benches, bench_draw_rect, bench_set_bits, bench_draw_text);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, Session, CATALOG};
use blockfall::types::{BLOCK_GLYPH, BOARD_HEIGHT, BOARD_WIDTH};

fn bench_advance_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("advance_tick", |b| {
        b.iter(|| {
            black_box(session.advance_tick());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    let shape = CATALOG[2];

    c.bench_function("collides", |b| {
        b.iter(|| black_box(board.collides(&shape, black_box(4), black_box(10))))
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
            for y in BOARD_HEIGHT - 5..BOARD_HEIGHT - 1 {
                for x in 1..BOARD_WIDTH - 1 {
                    board.write_cell(x as i8, y as i8, BLOCK_GLYPH);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_rotated(c: &mut Criterion) {
    let shape = CATALOG[0];

    c.bench_function("rotated", |b| b.iter(|| black_box(shape.rotated())));
}

criterion_group!(
    benches,
    bench_advance_tick,
    bench_collides,
    bench_clear_four_rows,
    bench_rotated
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use goldfall::core::{Board, GameSnapshot, GameState};
use goldfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("fill_and_clear_row", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for x in 0..10 {
                board.set(x, 19, Some(PieceKind::I));
            }
            board.clear_row(black_box(19));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_cycle", |b| {
        b.iter(|| {
            // Fresh state per iteration so the stack never tops out.
            let mut state = GameState::new(black_box(12345));
            state.start();
            state.apply_action(GameAction::HardDrop);
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            state.apply_action(GameAction::MoveLeft);
            state.apply_action(GameAction::MoveRight);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            state.apply_action(GameAction::RotateCw);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);

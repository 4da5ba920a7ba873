use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simple_tetris::core::pieces::get_shape;
use simple_tetris::core::{Board, GameConfig, GameSession};
use simple_tetris::types::{Command, ShapeKind};

fn new_session() -> GameSession {
    GameSession::with_seed(GameConfig::default(), 12345).unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("tick", |b| {
        b.iter(|| {
            if session.game_over() {
                session.reset();
            }
            session.apply_command(black_box(Command::Tick));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10);
            // Fill bottom 4 rows
            for r in 16..20 {
                for col in 0..10 {
                    board.set(r, col, Some(ShapeKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if session.game_over() {
                session.reset();
            }
            session.apply_command(black_box(Command::HardDrop));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.apply_command(black_box(Command::MoveLeft));
            session.apply_command(black_box(Command::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = new_session();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            session.apply_command(black_box(Command::Rotate));
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::default();
    let shape = get_shape(ShapeKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| board.collides(black_box(&shape), black_box(10), black_box(4)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_collision
);
criterion_main!(benches);

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use itertools::Itertools as _;
use twenty_forty_eight::{
    board::{Board, test_utils},
    collapse_row,
    game::{Direction, GameSession},
};

/// Generate a vector of random boards for benchmarking.
fn generate_boards(count: usize) -> Vec<[[u32; 4]; 4]> {
    (0..12)
        .flat_map(|filled| {
            (0..filled)
                .cartesian_product(0..count)
                .map(move |(dup, _)| test_utils::generate_random_board(filled, dup))
        })
        .collect()
}

/// Benchmark the row collapse and the board-level primitives built on it.
fn bench_engine(c: &mut Criterion) {
    const COUNT: usize = 20;

    let mut group = c.benchmark_group("engine");

    let rows = generate_boards(COUNT);
    let boards = rows
        .iter()
        .cloned()
        .map(Board::from_rows)
        .map(Result::unwrap)
        .collect_vec();

    group.throughput(Throughput::Elements(boards.len() as u64));

    group.bench_function("collapse_row", |b| {
        b.iter(|| {
            for &board in &rows {
                for row in board {
                    black_box(collapse_row(row));
                }
            }
        });
    });

    group.bench_function("collapse_left", |b| {
        b.iter(|| {
            for &board in &boards {
                black_box(board.collapse_left());
            }
        });
    });

    group.bench_function("rotate_cw", |b| {
        b.iter(|| {
            for &board in &boards {
                black_box(board.rotate_cw());
            }
        });
    });

    group.bench_function("is_terminal", |b| {
        b.iter(|| {
            for &board in &boards {
                black_box(board.is_terminal());
            }
        });
    });
}

/// Benchmark full moves against a live session, restarting on death.
fn bench_moves(c: &mut Criterion) {
    let mut session = GameSession::with_seed(0xBEEF);

    c.bench_function("apply_move", |b| {
        let mut directions = Direction::ALL.into_iter().cycle();

        b.iter(|| {
            if session.is_over() {
                session.restart();
            }

            black_box(session.apply_move(directions.next().unwrap()));
        });
    });
}

criterion_group!(benches, bench_engine, bench_moves);
criterion_main!(benches);

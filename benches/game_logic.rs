use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_2048::core::{GameState, Grid, SimpleRng, Tile};
use tui_2048::engine::{can_move, slide_tiles, MoveEngine, MoveOutcome};
use tui_2048::types::Direction;

fn dense_grid() -> Grid {
    Grid::from_values(&[
        vec![2, 2, 4, 4],
        vec![8, 8, 16, 16],
        vec![2, 2, 4, 4],
        vec![8, 8, 16, 16],
    ])
}

fn bench_slide_tiles(c: &mut Criterion) {
    let grid = dense_grid();

    c.bench_function("slide_tiles_dense", |b| {
        b.iter(|| {
            let mut scratch = grid.clone();
            let moves = slide_tiles(black_box(&mut scratch), Direction::Left);
            black_box(moves.len())
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    let grid = Grid::from_values(&[
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ]);

    c.bench_function("can_move_sweep", |b| {
        b.iter(|| {
            Direction::ALL
                .iter()
                .filter(|&&dir| can_move(black_box(&grid), dir))
                .count()
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    c.bench_function("resolve_headless", |b| {
        b.iter(|| {
            let mut state = GameState::new_default(12345);
            state.start();
            let mut engine = MoveEngine::headless();
            let outcome = rt.block_on(engine.resolve(&mut state, black_box(Direction::Left)));
            black_box(outcome != MoveOutcome::Rejected)
        })
    });
}

fn bench_random_empty_cell(c: &mut Criterion) {
    // Near-full board: one empty cell left.
    let mut grid = Grid::new(4);
    for row in 0..4 {
        for column in 0..4 {
            if (row, column) != (3, 3) {
                grid.cell_mut(row, column).set_tile(Tile::new(1, 2));
            }
        }
    }
    let mut rng = SimpleRng::new(1);

    c.bench_function("random_empty_cell_near_full", |b| {
        b.iter(|| black_box(grid.random_empty_cell(&mut rng)))
    });
}

criterion_group!(
    benches,
    bench_slide_tiles,
    bench_can_move,
    bench_resolve,
    bench_random_empty_cell
);
criterion_main!(benches);

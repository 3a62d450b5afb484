//! Move engine integration tests - resolution ordering, spawning, and
//! terminal detection through the public facade.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tui_2048::core::{GameState, Grid};
use tui_2048::engine::{
    MoveEngine, MoveOutcome, TileChange, TransitionDriver, TransitionHandle,
};
use tui_2048::types::{Direction, TileValue};

fn state_with_grid(grid: Grid) -> GameState {
    let mut state = GameState::new(1234, grid.size());
    *state.grid_mut() = grid;
    state
}

fn board_sum(state: &GameState) -> TileValue {
    state
        .grid()
        .cells()
        .iter()
        .filter_map(|c| c.tile().map(|t| t.value))
        .sum()
}

/// Records every transition the engine registers.
#[derive(Default, Clone)]
struct RecordingDriver {
    changes: Arc<Mutex<Vec<TileChange>>>,
}

impl TransitionDriver for RecordingDriver {
    fn begin(&mut self, _tile: u32, change: TileChange) -> TransitionHandle {
        self.changes.lock().unwrap().push(change);
        TransitionHandle::ready()
    }
}

/// Completes transitions on a timer, exercising the barrier for real.
struct TimerDriver;

impl TransitionDriver for TimerDriver {
    fn begin(&mut self, _tile: u32, _change: TileChange) -> TransitionHandle {
        let (handle, signal) = TransitionHandle::pending();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            signal.complete();
        });
        handle
    }
}

#[tokio::test]
async fn test_spawn_invariant() {
    let mut state = GameState::new_default(2024);
    state.start();
    let mut engine = MoveEngine::headless();

    // After every legal move exactly one tile exists that was not there
    // before, net of merges: tiles_after = tiles_before - merges + 1.
    for dir in [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ] {
        let ids_before: Vec<u32> = state
            .grid()
            .cells()
            .iter()
            .filter_map(|c| c.tile().map(|t| t.id))
            .collect();

        match engine.resolve(&mut state, dir).await {
            MoveOutcome::Rejected => continue,
            MoveOutcome::Moved(report) | MoveOutcome::GameOver(report) => {
                let new_ids: Vec<u32> = state
                    .grid()
                    .cells()
                    .iter()
                    .filter_map(|c| c.tile().map(|t| t.id))
                    .filter(|id| !ids_before.contains(id))
                    .collect();
                assert_eq!(new_ids.len(), 1, "exactly one freshly spawned tile");
                let (row, column) = report.spawned;
                assert!(state.grid().cell(row, column).tile().is_some());
            }
        }
    }
}

#[tokio::test]
async fn test_merge_slots_always_clear_after_resolution() {
    let mut state = GameState::new_default(7);
    state.start();
    let mut engine = MoveEngine::headless();

    for _ in 0..50 {
        if state.game_over() {
            break;
        }
        for dir in Direction::ALL {
            engine.resolve(&mut state, dir).await;
            assert!(!state.grid().has_staged_merges());
        }
    }
}

#[tokio::test]
async fn test_score_is_sum_of_merged_values() {
    let grid = Grid::from_values(&[
        vec![2, 2, 4, 4],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let mut state = state_with_grid(grid);
    let mut engine = MoveEngine::headless();

    let outcome = engine.resolve(&mut state, Direction::Left).await;
    let MoveOutcome::Moved(report) = outcome else {
        panic!("expected Moved, got {outcome:?}");
    };
    assert_eq!(report.merged, 4 + 8);
    assert_eq!(state.score(), 12);
}

#[tokio::test]
async fn test_conservation_through_resolution() {
    let mut state = GameState::new_default(99);
    state.start();
    let mut engine = MoveEngine::headless();

    for _ in 0..30 {
        if state.game_over() {
            break;
        }
        for dir in Direction::ALL {
            let before = board_sum(&state);
            match engine.resolve(&mut state, dir).await {
                MoveOutcome::Rejected => assert_eq!(board_sum(&state), before),
                MoveOutcome::Moved(report) | MoveOutcome::GameOver(report) => {
                    // Slide+merge conserves value; only the spawn adds.
                    let (row, column) = report.spawned;
                    let spawned = state
                        .grid()
                        .cell(row, column)
                        .tile()
                        .map(|t| t.value)
                        .unwrap_or(0);
                    assert_eq!(board_sum(&state), before + spawned);
                }
            }
        }
    }
}

#[tokio::test]
async fn test_driver_sees_one_change_per_relocated_tile() {
    let grid = Grid::from_values(&[
        vec![2, 2, 2, 2],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let mut state = state_with_grid(grid);

    let driver = RecordingDriver::default();
    let changes = driver.changes.clone();
    let mut engine = MoveEngine::new(driver);

    let outcome = engine.resolve(&mut state, Direction::Left).await;
    let MoveOutcome::Moved(report) = outcome else {
        panic!("expected Moved, got {outcome:?}");
    };

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), report.moved_tiles);
    // [2,2,2,2]: one merge into col 0, one slide to col 1, one merge
    // into col 1.
    assert_eq!(changes.len(), 3);
    assert_eq!(changes.iter().filter(|c| c.merging).count(), 2);
    for change in changes.iter() {
        assert_ne!(change.from, change.to);
    }
}

#[tokio::test(start_paused = true)]
async fn test_resolution_waits_for_timed_transitions() {
    let grid = Grid::from_values(&[
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let mut state = state_with_grid(grid);
    let mut engine = MoveEngine::new(TimerDriver);

    let start = tokio::time::Instant::now();
    let outcome = engine.resolve(&mut state, Direction::Left).await;
    assert!(matches!(outcome, MoveOutcome::Moved(_)));

    // The barrier held resolution until the timer fired.
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert_eq!(state.grid().to_values()[0][0], 4);
    assert!(!state.grid().has_staged_merges());
}

#[tokio::test]
async fn test_full_game_is_deterministic() {
    let play = |seed: u32| async move {
        let mut state = GameState::new_default(seed);
        state.start();
        let mut engine = MoveEngine::headless();
        // Fixed rotation of directions until the game ends or we cap out.
        'outer: for _ in 0..500 {
            for dir in Direction::ALL {
                if let MoveOutcome::GameOver(_) = engine.resolve(&mut state, dir).await {
                    break 'outer;
                }
            }
        }
        (state.grid().to_values(), state.score(), state.move_count())
    };

    assert_eq!(play(31415).await, play(31415).await);
}

#[tokio::test]
async fn test_game_over_rejects_all_directions() {
    let grid = Grid::from_values(&[
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ]);
    let mut state = state_with_grid(grid);
    state.set_game_over();
    let mut engine = MoveEngine::headless();

    for dir in Direction::ALL {
        assert_eq!(engine.resolve(&mut state, dir).await, MoveOutcome::Rejected);
    }
}

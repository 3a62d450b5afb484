//! Move resolution - one direction input, one complete state change.
//!
//! Ordering guarantee: no merge is finalized and no tile is spawned
//! until every tile that moved this cycle has finished its transition.
//! A resolution always runs to completion once started; the caller must
//! not start another one concurrently.

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::slide::{any_move_possible, can_move, slide_tiles, MAX_TILES};
use crate::transition::{InstantDriver, TileChange, TransitionDriver, TransitionHandle};
use crate::types::{Direction, TileValue};

/// What a completed resolution reports to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Tiles relocated by the slide pass.
    pub moved_tiles: usize,
    /// Merged value credited to the score this move.
    pub merged: u32,
    /// Running score after the move.
    pub score: u32,
    /// Maximum tile value on the board (for the score reporter).
    pub max_tile: TileValue,
    /// Coordinate of the freshly spawned tile.
    pub spawned: (u8, u8),
}

/// Outcome of feeding one direction to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The direction was illegal (or the game is over); state unchanged.
    Rejected,
    /// The move resolved and play continues.
    Moved(MoveReport),
    /// The move resolved and no direction is legal anymore.
    GameOver(MoveReport),
}

/// The move engine: slides, sequences merges behind the transition
/// barrier, spawns, and detects the terminal state.
#[derive(Debug)]
pub struct MoveEngine<D: TransitionDriver> {
    driver: D,
}

impl MoveEngine<InstantDriver> {
    /// An engine whose transitions complete immediately.
    pub fn headless() -> Self {
        Self::new(InstantDriver)
    }
}

impl<D: TransitionDriver> MoveEngine<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Resolve one directional input against the game state.
    ///
    /// Steps: legality gate, slide (merges staged), all-transitions
    /// barrier, merge finalization, spawn, post-spawn terminal check.
    pub async fn resolve(&mut self, state: &mut GameState, direction: Direction) -> MoveOutcome {
        // The gate also keeps `slide_tiles` off fully-blocked groups.
        if state.game_over() || !can_move(state.grid(), direction) {
            return MoveOutcome::Rejected;
        }

        let moves = slide_tiles(state.grid_mut(), direction);

        let mut waits: ArrayVec<TransitionHandle, MAX_TILES> = ArrayVec::new();
        for mv in &moves {
            let change = TileChange {
                from: mv.from,
                to: mv.to,
                merging: mv.merging,
                value: mv.value,
            };
            waits.push(self.driver.begin(mv.id, change));
        }

        // All transitions must complete before any merge is finalized.
        for handle in waits {
            handle.wait().await;
        }

        let merged = state.grid_mut().merge_all();
        state.add_score(merged);
        state.record_move();

        // A legal move always frees at least one cell, so the spawn
        // cannot find a full board.
        let spawned = match state.spawn_tile() {
            Some(pos) => pos,
            None => {
                debug_assert!(false, "no empty cell after a legal move");
                (0, 0)
            }
        };

        let report = MoveReport {
            moved_tiles: moves.len(),
            merged,
            score: state.score(),
            max_tile: state.max_tile(),
            spawned,
        };

        // Loss is checked after the spawn: the new tile may be exactly
        // what blocks the board, or what keeps it mobile.
        if any_move_possible(state.grid()) {
            MoveOutcome::Moved(report)
        } else {
            state.set_game_over();
            MoveOutcome::GameOver(report)
        }
    }
}

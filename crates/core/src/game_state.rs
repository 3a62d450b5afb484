//! Game state module - one explicitly owned game instance.
//!
//! Ties together the grid, the RNG, and the running counters. There is no
//! global board: every game is a `GameState` value with a seeded
//! constructor, so multiple instances and deterministic tests come for
//! free. Move/merge logic lives in the engine crate; this module owns
//! state transitions that do not depend on a direction (spawning,
//! restart, bookkeeping).

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::tile::{Tile, TileId};
use crate::types::{TileValue, DEFAULT_GRID_SIZE, FOUR_SPAWN_PERCENT, STARTING_TILES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: SimpleRng,
    /// Monotonic id for spawned tiles.
    next_tile_id: TileId,
    /// Running sum of merged tile values.
    score: u32,
    /// Completed (legal) moves.
    move_count: u32,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and grid size
    pub fn new(seed: u32, size: u8) -> Self {
        Self {
            grid: Grid::new(size),
            rng: SimpleRng::new(seed),
            next_tile_id: 0,
            score: 0,
            move_count: 0,
            started: false,
            game_over: false,
        }
    }

    /// Create a new game on the reference 4x4 grid
    pub fn new_default(seed: u32) -> Self {
        Self::new(seed, DEFAULT_GRID_SIZE)
    }

    /// Start the game by spawning the opening tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        for _ in 0..STARTING_TILES {
            self.spawn_tile();
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The maximum tile value on the board (the reported "score" of the
    /// original game), 0 when the board is empty.
    pub fn max_tile(&self) -> TileValue {
        self.grid.max_value()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for the move engine.
    ///
    /// The grid is the only shared resource; exactly one move resolution
    /// may hold this at a time (the caller serializes input).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Spawn one new tile (2 or 4) on a uniformly random empty cell and
    /// return its coordinate.
    ///
    /// Precondition: the board has at least one empty cell. Callers on the
    /// loss-detection path must check fullness before invoking this.
    pub fn spawn_tile(&mut self) -> Option<(u8, u8)> {
        let (row, column) = self.grid.random_empty_cell(&mut self.rng)?;

        let value = if self.rng.percent_chance(FOUR_SPAWN_PERCENT) {
            4
        } else {
            2
        };
        self.next_tile_id = self.next_tile_id.wrapping_add(1);
        self.grid
            .cell_mut(row, column)
            .set_tile(Tile::new(self.next_tile_id, value));

        Some((row, column))
    }

    /// Credit merged value to the score (called once per resolved move).
    pub fn add_score(&mut self, merged: u32) {
        self.score += merged;
    }

    /// Count a completed legal move.
    pub fn record_move(&mut self) {
        self.move_count = self.move_count.wrapping_add(1);
    }

    /// Flag the terminal loss state. The engine sets this once no
    /// direction yields a legal move; the state never resets itself.
    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }

    /// Rebuild the game from a fresh seed derived from the current RNG
    /// state and spawn the opening tiles.
    pub fn restart(&mut self) {
        let seed = self.rng.state();
        let size = self.grid.size();
        *self = Self::new(seed, size);
        self.start();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_default(1)
    }
}

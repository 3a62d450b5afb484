//! Core game state - pure, deterministic, and testable
//!
//! This crate contains the state model of the sliding-tile merge puzzle.
//! It has **zero dependencies** on UI, networking, or async runtime,
//! making it:
//!
//! - **Deterministic**: same seed produces identical spawn sequences
//! - **Testable**: every rule is observable through the public API
//! - **Portable**: runs headless, in a terminal, or under a bench harness
//!
//! # Module Structure
//!
//! - [`grid`]: N x N cell grid with occupancy, merge staging, and the
//!   row/column group views the move engine slides over
//! - [`tile`]: the movable, mergeable numeric entity
//! - [`rng`]: seeded LCG for spawn placement and the 2-vs-4 draw
//! - [`game_state`]: one owned game instance (grid + rng + counters)
//!
//! The slide/merge algorithm itself lives in the engine crate; this crate
//! only guarantees the state invariants it relies on (at most one
//! resident tile per cell, merge slots cleared after every resolution,
//! spawn precondition checked by callers).
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//!
//! let mut game = GameState::new_default(12345);
//! game.start();
//!
//! assert_eq!(game.grid().tile_count(), 2);
//! assert!(game.max_tile() >= 2);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod tile;

pub use tui_2048_types as types;

pub use game_state::GameState;
pub use grid::{Cell, CellGroup, CellGroups, Grid};
pub use rng::SimpleRng;
pub use tile::{Tile, TileId};

//! Move engine - slides, merges, and resolves directional input.
//!
//! The engine is the only writer of the grid during a move resolution.
//! Control flow per input: legality gate -> slide (merges staged) ->
//! all-transitions barrier -> merge finalization -> spawn -> terminal
//! check. Concurrency exists solely as independently-resolving per-tile
//! transition signals joined before the merge phase; nothing here blocks
//! a thread.
//!
//! - [`slide`]: the parameterized slide/merge pass and the one-step
//!   legality lookahead shared by all four directions
//! - [`transition`]: per-tile completion signals and the driver trait
//!   that renderers implement
//! - [`resolve`]: the orchestrating [`MoveEngine`]

pub mod resolve;
pub mod slide;
pub mod transition;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use resolve::{MoveEngine, MoveOutcome, MoveReport};
pub use slide::{any_move_possible, can_move, slide_tiles, TileMove, MAX_TILES};
pub use transition::{
    InstantDriver, TileChange, TransitionDriver, TransitionHandle, TransitionSignal,
};

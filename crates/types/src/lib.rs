//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid side length in the reference configuration.
///
/// The grid itself stays configurable through `Grid::new(size)`; this is
/// only what the binary and the default constructors assume.
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Upper bound on the configurable grid side length. Bounding it lets
/// per-move bookkeeping live in fixed-capacity arrays off the heap.
pub const MAX_GRID_SIZE: u8 = 8;

/// Tiles spawned when a game starts.
pub const STARTING_TILES: usize = 2;

/// Percentage chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_SPAWN_PERCENT: u32 = 10;

/// Animation timing constants (in milliseconds)
pub const MOVE_TRANSITION_MS: u64 = 100;
pub const MERGE_PULSE_MS: u64 = 100;

/// Tile values follow the power-of-two progression starting at 2.
pub type TileValue = u32;

/// A slide direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in legality-check order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Groups run along columns for vertical slides, rows for horizontal.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Down and Right slide toward the high-index edge, so their groups
    /// are walked in reverse.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

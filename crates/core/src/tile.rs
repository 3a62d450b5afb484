//! Tile - a movable, mergeable numeric entity.
//!
//! Tiles are small `Copy` values; ownership is logical and belongs to
//! whichever cell currently hosts the tile. Ids are handed out
//! monotonically by `GameState` so renderers can track identity across
//! moves (the resident tile of a merge keeps its id, the consumed tile's
//! id disappears).

use crate::types::TileValue;

/// Identity of a tile across moves.
pub type TileId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: TileValue,
}

impl Tile {
    pub fn new(id: TileId, value: TileValue) -> Self {
        Self { id, value }
    }
}

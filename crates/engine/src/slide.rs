//! The slide/merge pass and its legality lookahead.
//!
//! One parameterized algorithm serves all four directions: the grid's
//! row or column groups, walked in reverse for Down/Right so index 0 is
//! always the edge tiles slide toward. `slide_tiles` mutates the grid
//! (relocations applied, merges staged); `can_move` is the cheap
//! one-step lookahead used to gate it and to detect the loss state.

use arrayvec::ArrayVec;

use crate::core::{CellGroup, Grid, TileId};
use crate::types::{Direction, TileValue, MAX_GRID_SIZE};

/// Upper bound on tiles that can relocate in one resolution.
pub const MAX_TILES: usize = (MAX_GRID_SIZE as usize) * (MAX_GRID_SIZE as usize);

/// One tile relocation produced by a slide pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMove {
    pub id: TileId,
    pub value: TileValue,
    pub from: (u8, u8),
    pub to: (u8, u8),
    /// True when the tile was staged into the destination's merge slot.
    pub merging: bool,
}

fn groups_for(grid: &Grid, direction: Direction) -> crate::core::CellGroups {
    let mut groups = if direction.is_vertical() {
        grid.cells_by_column()
    } else {
        grid.cells_by_row()
    };
    if direction.is_reversed() {
        for group in groups.iter_mut() {
            group.reverse();
        }
    }
    groups
}

fn slide_group(grid: &mut Grid, group: &CellGroup, moves: &mut ArrayVec<TileMove, MAX_TILES>) {
    for i in 1..group.len() {
        let from = group[i];
        let Some(tile) = grid.cell(from.0, from.1).tile() else {
            continue;
        };

        // Walk toward the leading edge while cells keep accepting the
        // tile; the last accepting cell is the destination.
        let mut last_valid: Option<(u8, u8)> = None;
        for &(row, column) in group[..i].iter().rev() {
            if !grid.cell(row, column).can_accept(tile.value) {
                break;
            }
            last_valid = Some((row, column));
        }

        let Some(to) = last_valid else {
            continue;
        };

        let merging = grid.cell(to.0, to.1).tile().is_some();
        let _ = grid.cell_mut(from.0, from.1).take_tile();
        if merging {
            grid.cell_mut(to.0, to.1).stage_merge(tile);
        } else {
            grid.cell_mut(to.0, to.1).set_tile(tile);
        }

        moves.push(TileMove {
            id: tile.id,
            value: tile.value,
            from,
            to,
            merging,
        });
    }
}

/// Slide every tile as far as it goes toward `direction`, staging merges
/// on the way. Returns the relocations in resolution order; an empty
/// list means the move was illegal (and the grid is untouched).
pub fn slide_tiles(grid: &mut Grid, direction: Direction) -> ArrayVec<TileMove, MAX_TILES> {
    let mut moves = ArrayVec::new();
    for group in groups_for(grid, direction) {
        slide_group(grid, &group, &mut moves);
    }
    moves
}

/// One-step lookahead: true iff some non-leading occupied cell has an
/// immediate predecessor that accepts its tile. Consistent with
/// `slide_tiles` relocating at least one tile, at a fraction of the
/// cost.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    groups_for(grid, direction).iter().any(|group| {
        group.iter().enumerate().skip(1).any(|(i, &(row, column))| {
            let Some(tile) = grid.cell(row, column).tile() else {
                return false;
            };
            let (prev_row, prev_column) = group[i - 1];
            grid.cell(prev_row, prev_column).can_accept(tile.value)
        })
    })
}

/// True iff at least one direction yields a legal move. The game is lost
/// when this returns false on a spawned-into board.
pub fn any_move_possible(grid: &Grid) -> bool {
    Direction::ALL.iter().any(|&dir| can_move(grid, dir))
}

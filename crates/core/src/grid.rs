//! Grid module - the fixed set of cells tiles move across.
//!
//! The grid is an N x N set of cells stored in a flat row-major array for
//! cache locality. Each cell holds at most one resident tile plus at most
//! one tile staged for merging; the staged slot only exists between the
//! slide and merge phases of a single move resolution.
//!
//! Coordinates: (row, column), both ranging 0..size, row 0 at the top.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::tile::Tile;
use crate::types::{TileValue, MAX_GRID_SIZE};

/// An ordered group of cell coordinates (one row or one column).
pub type CellGroup = ArrayVec<(u8, u8), { MAX_GRID_SIZE as usize }>;

/// All groups of one orientation.
pub type CellGroups = ArrayVec<CellGroup, { MAX_GRID_SIZE as usize }>;

/// One fixed position in the grid, the unit of occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: u8,
    column: u8,
    tile: Option<Tile>,
    merge_tile: Option<Tile>,
}

impl Cell {
    fn new(row: u8, column: u8) -> Self {
        Self {
            row,
            column,
            tile: None,
            merge_tile: None,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }

    pub fn merge_tile(&self) -> Option<Tile> {
        self.merge_tile
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// A sliding tile may land here iff the cell is empty, or it holds a
    /// tile of equal value and no merge is already staged.
    ///
    /// The staged-merge condition is what bounds merging to pairs: once a
    /// cell has consumed one partner this move, it rejects further tiles,
    /// so a run of three equal tiles cannot cascade into a single merge.
    pub fn can_accept(&self, value: TileValue) -> bool {
        match self.tile {
            None => true,
            Some(resident) => resident.value == value && self.merge_tile.is_none(),
        }
    }

    /// Place a tile into an empty cell.
    pub fn set_tile(&mut self, tile: Tile) {
        debug_assert!(self.tile.is_none(), "cell already holds a tile");
        self.tile = Some(tile);
    }

    /// Remove and return the resident tile.
    pub fn take_tile(&mut self) -> Option<Tile> {
        self.tile.take()
    }

    /// Stage a tile for merging with the resident tile.
    pub fn stage_merge(&mut self, tile: Tile) {
        debug_assert!(
            self.can_accept(tile.value) && self.tile.is_some(),
            "merge staged into a cell that cannot accept it"
        );
        self.merge_tile = Some(tile);
    }

    /// Finalize a staged merge: the resident tile's value doubles, the
    /// staged tile is discarded, and the slot is cleared. Returns the new
    /// value, or `None` when nothing was staged.
    pub fn merge_tiles(&mut self) -> Option<TileValue> {
        let staged = self.merge_tile.take()?;
        let resident = self.tile.as_mut()?;
        resident.value += staged.value;
        Some(resident.value)
    }
}

/// The game grid - N x N cells in flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid.
    ///
    /// `size` must be in 2..=MAX_GRID_SIZE.
    pub fn new(size: u8) -> Self {
        debug_assert!((2..=MAX_GRID_SIZE).contains(&size), "grid size out of range");
        let size = size.clamp(2, MAX_GRID_SIZE);
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |column| Cell::new(row, column)))
            .collect();
        Self { size, cells }
    }

    #[inline(always)]
    fn index(&self, row: u8, column: u8) -> usize {
        debug_assert!(row < self.size && column < self.size);
        (row as usize) * (self.size as usize) + (column as usize)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cell(&self, row: u8, column: u8) -> &Cell {
        &self.cells[self.index(row, column)]
    }

    pub fn cell_mut(&mut self, row: u8, column: u8) -> &mut Cell {
        let idx = self.index(row, column);
        &mut self.cells[idx]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major grouping: one group per row, cells ordered by ascending
    /// column.
    pub fn cells_by_row(&self) -> CellGroups {
        let mut groups = CellGroups::new();
        for row in 0..self.size {
            let mut group = CellGroup::new();
            for column in 0..self.size {
                group.push((row, column));
            }
            groups.push(group);
        }
        groups
    }

    /// Column-major grouping: one group per column, cells ordered by
    /// ascending row. This is the transpose of `cells_by_row`; both are
    /// projections of the same cell set.
    pub fn cells_by_column(&self) -> CellGroups {
        let mut groups = CellGroups::new();
        for column in 0..self.size {
            let mut group = CellGroup::new();
            for row in 0..self.size {
                group.push((row, column));
            }
            groups.push(group);
        }
        groups
    }

    /// Number of cells with no resident tile.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of cells with a resident tile.
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// A uniformly random empty cell coordinate.
    ///
    /// Returns `None` on a full board. Callers must check board fullness
    /// first (`empty_count() > 0`); calling this on a full board is a
    /// contract violation.
    pub fn random_empty_cell(&self, rng: &mut SimpleRng) -> Option<(u8, u8)> {
        let empty = self.empty_count();
        if empty == 0 {
            debug_assert!(false, "random_empty_cell called on a full board");
            return None;
        }

        let pick = rng.next_range(empty as u32) as usize;
        self.cells
            .iter()
            .filter(|c| c.is_empty())
            .nth(pick)
            .map(|c| (c.row, c.column))
    }

    /// The maximum tile value on the board, or 0 when empty.
    pub fn max_value(&self) -> TileValue {
        self.cells
            .iter()
            .filter_map(|c| c.tile.map(|t| t.value))
            .max()
            .unwrap_or(0)
    }

    /// Finalize every staged merge on the board and return the sum of the
    /// merged values (the score delta of the move). Clears every merge
    /// slot, so the staged-merge invariant holds again afterwards.
    pub fn merge_all(&mut self) -> TileValue {
        self.cells
            .iter_mut()
            .filter_map(|c| c.merge_tiles())
            .sum()
    }

    /// True iff any cell still has a staged merge tile.
    pub fn has_staged_merges(&self) -> bool {
        self.cells.iter().any(|c| c.merge_tile.is_some())
    }

    /// Build a grid from a value matrix (0 = empty). Tile ids are assigned
    /// row-major starting at 1. Intended for tests and tooling.
    pub fn from_values(values: &[Vec<TileValue>]) -> Self {
        let size = values.len() as u8;
        debug_assert!(values.iter().all(|row| row.len() == values.len()));

        let mut grid = Self::new(size);
        let mut next_id = 1;
        for (row, row_values) in values.iter().enumerate() {
            for (column, &value) in row_values.iter().enumerate() {
                if value != 0 {
                    grid.cell_mut(row as u8, column as u8)
                        .set_tile(Tile::new(next_id, value));
                    next_id += 1;
                }
            }
        }
        grid
    }

    /// The value matrix of the board (0 = empty). Counterpart of
    /// `from_values`.
    pub fn to_values(&self) -> Vec<Vec<TileValue>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|column| {
                        self.cell(row, column)
                            .tile()
                            .map(|t| t.value)
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect()
    }
}

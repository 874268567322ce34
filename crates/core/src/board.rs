//! Board module - the 10x20 grid plus the golden-cube plane
//!
//! Cells live in a flat row-major array for cache locality; a parallel flat
//! array of flags marks occupied cells as golden. Coordinates are (x, y)
//! with x in 0..10 left to right and y in 0..20 top to bottom. Cells above
//! the visible grid (y < 0) are never stored and count as unobstructed, so
//! pieces may spawn partially off-screen.
//!
//! Invariant: a golden flag is only ever set on an occupied cell. Overwriting
//! or emptying a cell drops its flag, and row removal relocates flags
//! together with their rows.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use goldfall_types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::shape;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows of cells with golden markers
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Golden-cube flags, same layout as `cells`
    golden: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            golden: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    ///
    /// Writing any value clears the golden flag at that position; golden-ness
    /// belongs to the occupant that earned it, not to the coordinate.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                self.golden[idx] = false;
                true
            }
            None => false,
        }
    }

    /// Mark an occupied cell as golden. Returns false if the position is out
    /// of bounds or empty.
    pub fn set_golden(&mut self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) if self.cells[idx].is_some() => {
                self.golden[idx] = true;
                true
            }
            _ => false,
        }
    }

    /// Check whether the cell at (x, y) carries a golden marker
    pub fn is_golden(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).map_or(false, |idx| self.golden[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision check for a single mino cell.
    ///
    /// Free means: inside the horizontal bounds, above the floor, and either
    /// above the visible grid (y < 0) or an empty stored cell.
    pub fn is_cell_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        !self.is_occupied(x, y)
    }

    /// Pure collision predicate for a whole piece placement.
    ///
    /// True iff every mino of `kind` at `rotation`, offset by (x, y), lands
    /// on a free cell per [`Board::is_cell_free`].
    pub fn is_valid_position(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        shape(kind, rotation)
            .iter()
            .all(|&(dx, dy)| self.is_cell_free(x + dx, y + dy))
    }

    /// Write a locked piece into the board. Minos above the visible grid
    /// (y < 0) are discarded.
    pub fn place_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in shape {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Row indices where every column is occupied, ordered bottom to top
    pub fn full_rows(&self) -> ArrayVec<usize, 4> {
        let mut rows = ArrayVec::new();
        for y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(y) && !rows.is_full() {
                rows.push(y);
            }
        }
        rows
    }

    /// Remove row `y`, shift all rows above it down by one, and insert an
    /// empty row at the top. Rows below `y` are unaffected. Golden markers
    /// move with their rows; markers in the removed row are dropped.
    ///
    /// Returns the number of golden markers that were in the removed row.
    pub fn clear_row(&mut self, y: usize) -> u32 {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }

        let width = BOARD_WIDTH as usize;
        let row_start = y * width;
        let removed_golden = self.golden[row_start..row_start + width]
            .iter()
            .filter(|&&g| g)
            .count() as u32;

        // Shift rows above down by one; copy_within handles overlap.
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
            self.golden.copy_within(src..src + width, dst);
        }

        // Fresh empty top row.
        for idx in 0..width {
            self.cells[idx] = None;
            self.golden[idx] = false;
        }

        removed_golden
    }

    /// Number of golden markers currently on the board
    pub fn golden_count(&self) -> u32 {
        self.golden.iter().filter(|&&g| g).count() as u32
    }

    /// Mark one uniformly random occupied, non-golden cell as golden.
    /// Returns false when no candidate cell exists.
    pub fn mark_random_golden(&mut self, rng: &mut SimpleRng) -> bool {
        let candidates = self
            .cells
            .iter()
            .zip(self.golden.iter())
            .filter(|(cell, golden)| cell.is_some() && !**golden)
            .count();
        if candidates == 0 {
            return false;
        }

        let mut target = rng.next_range(candidates as u32) as usize;
        for idx in 0..BOARD_SIZE {
            if self.cells[idx].is_some() && !self.golden[idx] {
                if target == 0 {
                    self.golden[idx] = true;
                    return true;
                }
                target -= 1;
            }
        }
        false
    }

    /// Write the grid into a row-major u8 matrix without allocating:
    /// 0 for empty, 1..=7 per piece kind.
    pub fn write_u8_grid(
        &self,
        out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    None => 0,
                    Some(PieceKind::I) => 1,
                    Some(PieceKind::O) => 2,
                    Some(PieceKind::T) => 3,
                    Some(PieceKind::S) => 4,
                    Some(PieceKind::Z) => 5,
                    Some(PieceKind::J) => 6,
                    Some(PieceKind::L) => 7,
                };
            }
        }
    }

    /// Write the golden-marker plane into a row-major bool matrix
    pub fn write_golden_grid(
        &self,
        out: &mut [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = self.golden[y * BOARD_WIDTH as usize + x];
            }
        }
    }

    /// Total number of occupied cells
    pub fn occupied_count(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.is_some()).count() as u32
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a reference to the golden-flag array (same layout as `cells`)
    pub fn golden_flags(&self) -> &[bool] {
        &self.golden
    }

    /// Clear the entire board, including golden markers
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
        self.golden = [false; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

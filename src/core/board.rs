//! Board engine: the bordered grid, collision tests and line clears.
//!
//! The grid is a flat row-major buffer (`y * width + x`). The outermost ring
//! is stamped with `Cell::Border` at initialization and is never written
//! again; line detection and shifting only touch interior cells. All
//! coordinate access is bounds-checked, and `collides` treats an
//! out-of-range filled cell as a collision, so callers cannot read or write
//! outside the grid no matter what position they probe.

use arrayvec::ArrayVec;

use crate::core::shapes::Shape;
use crate::types::{Cell, SHAPE_SIZE};

/// A piece spans at most four rows, so one lock clears at most four lines.
pub const MAX_CLEARED_ROWS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocate a `width x height` grid with a border ring and empty
    /// interior. Allocation failure aborts the process; there is no
    /// recoverable error path for board creation.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 3 && height >= 3,
            "board needs room for a border ring and at least one interior cell"
        );
        let mut board = Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        };
        for y in 0..height {
            for x in 0..width {
                if board.is_border(x as i8, y as i8) {
                    board.cells[y * width + x] = Cell::Border;
                }
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x as usize >= self.width || y < 0 || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell at (x, y), or `None` out of range.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// True iff (x, y) lies on the first/last column or first/last row.
    pub fn is_border(&self, x: i8, y: i8) -> bool {
        x == 0 || x as usize == self.width - 1 || y == 0 || y as usize == self.height - 1
    }

    /// Whether `shape` placed with its box top-left at (x, y) overlaps any
    /// non-empty cell. Out-of-range filled cells count as collisions.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for row in 0..SHAPE_SIZE {
            for col in 0..SHAPE_SIZE {
                if !shape.filled(col, row) {
                    continue;
                }
                match self.get(x + col as i8, y + row as i8) {
                    Some(Cell::Empty) => {}
                    _ => return true,
                }
            }
        }
        false
    }

    /// Write `glyph` at (x, y) only if the cell is currently empty. Occupied
    /// and out-of-range cells are left untouched; this is how a locked piece
    /// merges without ever clobbering the border or earlier pieces.
    pub fn write_cell(&mut self, x: i8, y: i8, glyph: char) {
        if let Some(i) = self.index(x, y) {
            if self.cells[i].is_empty() {
                self.cells[i] = Cell::Block(glyph);
            }
        }
    }

    /// Lowest-index interior row whose interior columns are all non-empty,
    /// scanning from the top as the line check always has.
    pub fn first_full_row(&self) -> Option<usize> {
        (1..self.height - 1).find(|&y| {
            (1..self.width - 1).all(|x| !self.cells[y * self.width + x].is_empty())
        })
    }

    /// Drop everything above `row` down one line. Each interior cell of rows
    /// `row..=1` takes the content of the cell above it; sources on the
    /// border row become empty.
    pub fn shift_down(&mut self, row: usize) {
        debug_assert!(row >= 1 && row < self.height - 1);
        for y in (1..=row).rev() {
            for x in 1..self.width - 1 {
                self.cells[y * self.width + x] = if self.is_border(x as i8, (y - 1) as i8) {
                    Cell::Empty
                } else {
                    self.cells[(y - 1) * self.width + x]
                };
            }
        }
    }

    /// Find and clear every full interior row, one row at a time with an
    /// independent shift per row, and return the cleared row indices in
    /// detection order.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        while let Some(row) = self.first_full_row() {
            self.shift_down(row);
            if cleared.try_push(row).is_err() {
                break;
            }
        }
        cleared
    }
}

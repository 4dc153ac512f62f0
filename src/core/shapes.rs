//! Shape catalog and shape transforms.
//!
//! Every tetromino lives in a fixed 4x4 bounding box. Catalog entries are
//! read-only templates; play copies them into the session and rotates the
//! copies, never the catalog.

use crate::types::{SHAPE_COUNT, SHAPE_SIZE};

/// A 4x4 pattern of filled/empty cells, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [bool; SHAPE_SIZE * SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from a 16-byte pattern where `b'X'` marks a filled cell.
    pub const fn from_pattern(pattern: &[u8; SHAPE_SIZE * SHAPE_SIZE]) -> Self {
        let mut cells = [false; SHAPE_SIZE * SHAPE_SIZE];
        let mut i = 0;
        while i < cells.len() {
            cells[i] = pattern[i] == b'X';
            i += 1;
        }
        Self { cells }
    }

    /// Whether the cell at (col, row) of the bounding box is filled.
    #[inline]
    pub fn filled(&self, col: usize, row: usize) -> bool {
        self.cells[row * SHAPE_SIZE + col]
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// The shape rotated 90 degrees clockwise about its bounding box.
    ///
    /// Index mapping: `rotated[row*4+col] = self[16 - (col+1)*4 + row]`.
    /// Applying it four times returns the original shape. Note that the
    /// square template does NOT map to itself (its 2x2 block sits off-center
    /// in the box), which is why rotation special-cases it by template
    /// equality rather than by symmetry.
    pub fn rotated(&self) -> Shape {
        let n = SHAPE_SIZE;
        let mut cells = [false; SHAPE_SIZE * SHAPE_SIZE];
        for row in 0..n {
            for col in 0..n {
                cells[row * n + col] = self.cells[n * n - (col + 1) * n + row];
            }
        }
        Shape { cells }
    }
}

/// The seven shape templates.
pub const CATALOG: [Shape; SHAPE_COUNT] = [
    // L
    Shape::from_pattern(b" XX  X   X      "),
    // J
    Shape::from_pattern(b" XX   X   X     "),
    // I
    Shape::from_pattern(b" X   X   X   X  "),
    // O (square)
    Shape::from_pattern(b" XX  XX         "),
    // T
    Shape::from_pattern(b" X   XX  X      "),
    // S
    Shape::from_pattern(b" X   XX   X     "),
    // Z
    Shape::from_pattern(b"  X  XX  X      "),
];

/// The square template; the only shape rotation never touches.
pub const SQUARE: Shape = CATALOG[3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_shapes_with_four_cells_each() {
        for (i, shape) in CATALOG.iter().enumerate() {
            assert_eq!(shape.filled_count(), 4, "shape {} cell count", i);
        }
    }

    #[test]
    fn templates_are_distinct() {
        for i in 0..CATALOG.len() {
            for j in i + 1..CATALOG.len() {
                assert_ne!(CATALOG[i], CATALOG[j], "shapes {} and {}", i, j);
            }
        }
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for shape in &CATALOG {
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(*shape, back);
        }
    }

    #[test]
    fn double_rotation_is_the_180_degree_form() {
        let bar = CATALOG[2];
        let once = bar.rotated();
        let twice = once.rotated();
        assert_ne!(twice, bar);
        assert_eq!(twice, bar.rotated().rotated());
        // 180 degrees about the box center: cell (c, r) maps to (3-c, 3-r).
        for row in 0..SHAPE_SIZE {
            for col in 0..SHAPE_SIZE {
                assert_eq!(
                    twice.filled(col, row),
                    bar.filled(SHAPE_SIZE - 1 - col, SHAPE_SIZE - 1 - row)
                );
            }
        }
    }

    #[test]
    fn square_template_is_not_a_rotation_fixed_point() {
        // The 2x2 block sits in columns 1-2, rows 0-1; a box rotation moves
        // it. Visual symmetry is handled by the equality special case, not
        // by the transform.
        assert_ne!(SQUARE.rotated(), SQUARE);
    }

    #[test]
    fn vertical_bar_rotates_to_horizontal() {
        let bar = CATALOG[2];
        let flat = bar.rotated();
        let row_with_cells: Vec<usize> = (0..SHAPE_SIZE)
            .filter(|&r| (0..SHAPE_SIZE).any(|c| flat.filled(c, r)))
            .collect();
        assert_eq!(row_with_cells.len(), 1);
        let r = row_with_cells[0];
        assert!((0..SHAPE_SIZE).all(|c| flat.filled(c, r)));
    }
}

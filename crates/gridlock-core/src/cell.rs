//! Grid cell coordinates.

use std::fmt::{self, Display};

/// One position in the 9×9 grid.
///
/// Cells are identified by a row and a column in the range 0-8 and map to a
/// flat index 0-80 in row-major order. The `Display` implementation uses the
/// conventional `A1`-`I9` labels (rows `A`-`I` top to bottom, columns `1`-`9`
/// left to right).
///
/// # Examples
///
/// ```
/// use gridlock_core::Cell;
///
/// let cell = Cell::new(0, 0);
/// assert_eq!(cell.to_string(), "A1");
/// assert_eq!(cell.index(), 0);
///
/// let cell = Cell::from_index(80);
/// assert_eq!(cell.to_string(), "I9");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a cell from a flat row-major index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / 9) as u8, (index % 9) as u8);
        Self::new(row, col)
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the flat row-major index (0-80).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 block containing this cell,
    /// numbered left to right, top to bottom.
    #[must_use]
    pub const fn block(&self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}

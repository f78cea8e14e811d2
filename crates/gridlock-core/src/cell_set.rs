//! A set of grid cells.

use std::{
    fmt::{self, Debug},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::cell::Cell;

/// A set of cells across the 9×9 grid, backed by a 128-bit integer.
///
/// Bits 0-80 correspond to cells in row-major order. Used for peer sets and
/// for tracking which cells are solved at a point in time.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Cell, CellSet};
///
/// let mut set = CellSet::new();
/// set.insert(Cell::new(0, 0));
/// set.insert(Cell::new(4, 4));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::new(4, 4)));
/// assert!(!set.contains(Cell::new(8, 8)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 cells.
    pub const FULL: Self = Self {
        bits: (1 << 81) - 1,
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a cell into the set.
    ///
    /// Returns `true` if the cell was not already present.
    pub const fn insert(&mut self, cell: Cell) -> bool {
        let bit = 1u128 << cell.index();
        let changed = self.bits & bit == 0;
        self.bits |= bit;
        changed
    }

    /// Removes a cell from the set.
    ///
    /// Returns `true` if the cell was present.
    pub const fn remove(&mut self, cell: Cell) -> bool {
        let bit = 1u128 << cell.index();
        let changed = self.bits & bit != 0;
        self.bits &= !bit;
        changed
    }

    /// Returns `true` if the set contains the cell.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        self.bits & (1u128 << cell.index()) != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + use<> {
        let bits = self.bits;
        (0..81)
            .filter(move |i| bits & (1u128 << i) != 0)
            .map(Cell::from_index)
    }
}

impl Default for CellSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

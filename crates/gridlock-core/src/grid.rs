//! Candidate state for a puzzle in progress.

use std::fmt::{self, Display};

use crate::{cell::Cell, cell_set::CellSet, digit::Digit, digit_set::DigitSet};

/// Error parsing an 81-character puzzle string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input was not exactly 81 characters long.
    #[display("puzzle string must be 81 characters, got {len}")]
    WrongLength {
        /// Actual character count of the input.
        len: usize,
    },
    /// The input contained a character other than `1`-`9` or `.`.
    #[display("invalid character {ch:?} at position {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its position in the input string.
        index: usize,
    },
}

/// The per-cell candidate mapping for a puzzle.
///
/// Every cell maps to the set of digits it may still hold. A cell is *solved*
/// when its set is a singleton and contradictory when its set is empty.
/// During propagation candidate sets only ever shrink; the search engine
/// clones the whole grid before imposing a speculative placement, so sibling
/// branches never observe each other's mutations.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Cell, CandidateGrid, Digit};
///
/// let grid = CandidateGrid::from_givens(
///     &("5".to_owned() + &".".repeat(80)),
/// )?;
/// assert_eq!(grid.solved_digit(Cell::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.candidates(Cell::new(0, 1)).len(), 9);
/// # Ok::<(), gridlock_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateGrid {
    /// Creates a grid with all nine candidates in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Parses an 81-character puzzle string in row-major order.
    ///
    /// `.` denotes an unknown cell (full candidate set); `1`-`9` denote a
    /// given digit (singleton candidate set).
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] if the input is not exactly 81 characters
    /// or contains a character outside `{1-9, .}`.
    pub fn from_givens(input: &str) -> Result<Self, ParseGridError> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != 81 {
            return Err(ParseGridError::WrongLength { len: chars.len() });
        }
        let mut grid = Self::new();
        for (index, ch) in chars.into_iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let digit =
                Digit::from_char(ch).ok_or(ParseGridError::InvalidCharacter { ch, index })?;
            grid.cells[index] = DigitSet::singleton(digit);
        }
        Ok(grid)
    }

    /// Renders the grid back to an 81-character string, substituting `.` for
    /// any cell that is not solved.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .map(|set| set.as_single().map_or('.', Digit::to_char))
            .collect()
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Returns the digit a cell is solved to, or `None` if it is unsolved
    /// or contradictory.
    #[must_use]
    pub fn solved_digit(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()].as_single()
    }

    /// Collapses a cell's candidate set to a single digit.
    ///
    /// Returns `true` if the candidate set changed.
    pub fn place(&mut self, cell: Cell, digit: Digit) -> bool {
        let target = DigitSet::singleton(digit);
        let changed = self.cells[cell.index()] != target;
        self.cells[cell.index()] = target;
        changed
    }

    /// Removes a digit from a cell's candidate set.
    ///
    /// Returns `true` if the digit was present.
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Returns the set of solved cells.
    #[must_use]
    pub fn solved_cells(&self) -> CellSet {
        Cell::all()
            .filter(|&cell| self.cells[cell.index()].len() == 1)
            .collect()
    }

    /// Returns `true` if every cell is solved.
    ///
    /// Note this says nothing about whether the unit constraints are
    /// satisfied; a validity check is a separate concern.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Returns the first cell whose candidate set is empty, if any.
    #[must_use]
    pub fn first_contradiction(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.cells[cell.index()].is_empty())
    }

    /// Returns a human-readable renderer for this grid.
    #[must_use]
    pub fn display(&self) -> GridDisplay<'_> {
        GridDisplay { grid: self }
    }
}

/// Renders a grid as a 9×9 table with block separators.
///
/// Each cell shows its full candidate set, so partially reduced grids are
/// readable as well as solved ones.
///
/// # Examples
///
/// ```
/// use gridlock_core::CandidateGrid;
///
/// let grid = CandidateGrid::from_givens(
///     "267945381853716249491823576576438192384192657129657438642379815935281764718564923",
/// )?;
/// let rendered = grid.display().to_string();
/// assert!(rendered.contains('|'));
/// # Ok::<(), gridlock_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridDisplay<'a> {
    grid: &'a CandidateGrid,
}

impl Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + Cell::all()
            .map(|cell| self.grid.candidates(cell).len())
            .max()
            .unwrap_or(1);
        let segment = "-".repeat(width * 3);
        let line = format!("{segment}+{segment}+{segment}");

        for row in 0..9 {
            for col in 0..9 {
                let text = self.grid.candidates(Cell::new(row, col)).to_string();
                let text = if text.is_empty() { "!" } else { &text };
                write!(f, "{text:^width$}")?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

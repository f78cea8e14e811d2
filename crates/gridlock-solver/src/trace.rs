//! Assignment trace observers.
//!
//! Solving logic reports every candidate-set collapse to a [`TraceSink`]
//! passed explicitly through the reducer and search calls. The sink is an
//! external-collaborator concern (visualization, progress reporting); the
//! solving path itself never reads it back.

use gridlock_core::{CandidateGrid, Cell, Digit};

/// Observer for single-value assignment events.
///
/// `on_assign` is called each time a cell's candidate set collapses to a
/// single digit during propagation, with the grid state at that point.
pub trait TraceSink {
    /// Reports that `cell` collapsed to `digit`.
    fn on_assign(&mut self, cell: Cell, digit: Digit, grid: &CandidateGrid);
}

/// A sink that discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn on_assign(&mut self, _cell: Cell, _digit: Digit, _grid: &CandidateGrid) {}
}

/// One recorded assignment event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    cell: Cell,
    digit: Digit,
    snapshot: CandidateGrid,
}

impl Assignment {
    /// Returns the cell that was assigned.
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns the digit the cell collapsed to.
    #[must_use]
    pub const fn digit(&self) -> Digit {
        self.digit
    }

    /// Returns the grid state when the assignment was observed.
    #[must_use]
    pub const fn snapshot(&self) -> &CandidateGrid {
        &self.snapshot
    }
}

/// A sink that records every event in call order, for visualization.
///
/// # Examples
///
/// ```
/// use gridlock_core::Variant;
/// use gridlock_solver::{RecordedTrace, solve_with_trace};
///
/// let puzzle =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
/// let mut trace = RecordedTrace::new();
/// let _solution = solve_with_trace(puzzle, Variant::Classic, &mut trace)?;
/// assert!(!trace.is_empty());
/// # Ok::<(), gridlock_solver::SolveError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordedTrace {
    events: Vec<Assignment>,
}

impl RecordedTrace {
    /// Creates an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in call order.
    #[must_use]
    pub fn events(&self) -> &[Assignment] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraceSink for RecordedTrace {
    fn on_assign(&mut self, cell: Cell, digit: Digit, grid: &CandidateGrid) {
        self.events.push(Assignment {
            cell,
            digit,
            snapshot: grid.clone(),
        });
    }
}

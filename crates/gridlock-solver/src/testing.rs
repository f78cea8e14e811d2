//! Test harness for propagation rule implementations.
//!
//! [`RuleTester`] tracks the initial and current state of a candidate grid,
//! applies rules to it, and asserts on the resulting changes. All methods
//! return `self` for fluent chaining, and all assertions use
//! `#[track_caller]` so failures report the calling test's location.
//!
//! # Example
//!
//! ```
//! use gridlock_core::{CandidateGrid, Cell, Digit};
//! use gridlock_solver::{rule::Eliminate, testing::RuleTester};
//!
//! let mut grid = CandidateGrid::new();
//! grid.place(Cell::new(0, 0), Digit::D5);
//!
//! RuleTester::new(grid)
//!     .apply_once(&Eliminate::new())
//!     .assert_changed()
//!     .assert_removed(Cell::new(0, 8), [Digit::D5]);
//! ```

use gridlock_core::{CandidateGrid, Cell, Digit, DigitSet, Topology, Variant};

use crate::rule::Rule;

/// A test harness for verifying rule implementations.
#[derive(Debug)]
pub struct RuleTester {
    topology: Topology,
    initial: CandidateGrid,
    current: CandidateGrid,
    changed: bool,
}

impl RuleTester {
    /// Creates a tester over the classic topology.
    #[must_use]
    pub fn new(initial: CandidateGrid) -> Self {
        Self::with_variant(initial, Variant::Classic)
    }

    /// Creates a tester over the topology of the given variant.
    #[must_use]
    pub fn with_variant(initial: CandidateGrid, variant: Variant) -> Self {
        let current = initial.clone();
        Self {
            topology: Topology::new(variant),
            initial,
            current,
            changed: false,
        }
    }

    /// Applies the rule once, recording whether it reported a change.
    pub fn apply_once<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        self.changed = rule.apply(&mut self.current, &self.topology);
        self
    }

    /// Returns the current grid state.
    #[must_use]
    pub fn grid(&self) -> &CandidateGrid {
        &self.current
    }

    /// Asserts that the last application reported a change.
    ///
    /// # Panics
    ///
    /// Panics if the rule reported no change.
    #[track_caller]
    pub fn assert_changed(self) -> Self {
        assert!(self.changed, "Expected the rule to report a change");
        self
    }

    /// Asserts that a previously-undecided cell is now solved as `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already decided initially, or is not now
    /// decided as `digit`.
    #[track_caller]
    pub fn assert_placed(self, cell: Cell, digit: Digit) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert!(
            initial.len() > 1,
            "Expected {cell} to be initially undecided, but candidates were {initial:?}"
        );
        assert_eq!(
            current.as_single(),
            Some(digit),
            "Expected {cell} to be decided as {digit}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that all of `digits` were removed from a cell's candidates.
    ///
    /// Other candidates may also have been removed; only the listed ones are
    /// checked.
    ///
    /// # Panics
    ///
    /// Panics if a listed digit was initially absent or is still present.
    #[track_caller]
    pub fn assert_removed<D>(self, cell: Cell, digits: D) -> Self
    where
        D: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {cell} to include {digits:?}, but they were {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits:?} to be removed from {cell}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that a cell's candidates are unchanged from the initial state.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert_eq!(
            initial, current,
            "Expected no change at {cell}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }
}

//! Core data structures for the gridlock sudoku solver.
//!
//! This crate provides the constraint model shared by the propagation and
//! search components:
//!
//! - [`digit`]: type-safe sudoku digits 1-9
//! - [`digit_set`]: fixed-width candidate sets with O(1) membership
//! - [`cell`] / [`cell_set`]: grid positions and sets of positions
//! - [`topology`]: units (rows, columns, blocks, optional diagonals) and the
//!   peer relation derived from shared unit membership
//! - [`grid`]: the mutable per-cell candidate mapping, plus the 81-character
//!   string adapter and a human-readable renderer
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{CandidateGrid, Cell, Digit, Topology, Variant};
//!
//! let topology = Topology::new(Variant::Diagonal);
//! assert_eq!(topology.units().len(), 29);
//!
//! let mut grid = CandidateGrid::new();
//! grid.place(Cell::new(0, 0), Digit::D2);
//! assert!(grid.serialize().starts_with('2'));
//! ```

pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod topology;

pub use self::{
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{CandidateGrid, GridDisplay, ParseGridError},
    topology::{Topology, Unit, UnitGroup, UnitKind, Variant},
};

//! Constraint-propagation and search engine for 9x9 grid puzzles.
//!
//! This crate solves puzzles over the topologies defined by
//! [`gridlock_core`]. Solving proceeds in two phases:
//!
//! 1. **Propagation** - a [`Reducer`] applies [`rule`]s in rounds until the
//!    grid is solved, stalls, or reaches a contradiction.
//! 2. **Search** - a [`Searcher`] resolves stalled grids by depth-first
//!    backtracking over the cell with the fewest remaining candidates.
//!
//! The [`solve`] function wires both phases together behind a string-in,
//! string-out interface; [`solve_with_trace`] additionally reports every
//! candidate collapse to a [`TraceSink`].
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Variant;
//! use gridlock_solver::solve;
//!
//! let puzzle =
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//! let solution = solve(puzzle, Variant::Classic)?;
//! assert_eq!(
//!     solution,
//!     "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
//! );
//! # Ok::<(), gridlock_solver::SolveError>(())
//! ```

use gridlock_core::ParseGridError;

pub mod reducer;
pub mod rule;
pub mod search;
pub mod testing;
pub mod trace;
pub mod validator;

pub use self::{
    reducer::{Reducer, Reduction},
    rule::{BoxedRule, Rule, all_rules},
    search::{Searcher, solve, solve_with_trace},
    trace::{Assignment, NullTrace, RecordedTrace, TraceSink},
    validator::is_valid_solution,
};

/// Errors that can occur while solving a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveError {
    /// The input string is not a well-formed puzzle.
    #[display("invalid puzzle: {_0}")]
    Parse(#[from] ParseGridError),
    /// No assignment of digits satisfies every unit constraint.
    #[display("puzzle has no solution")]
    NoSolution,
    /// Propagation produced a complete grid that fails validation.
    #[display("solver produced an invalid solution")]
    InvalidSolution,
}

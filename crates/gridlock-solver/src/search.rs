//! Backtracking search over candidate assignments.

use gridlock_core::{CandidateGrid, Cell, Topology, Variant};

use crate::{
    SolveError,
    reducer::{Reducer, Reduction},
    trace::{NullTrace, TraceSink},
    validator::is_valid_solution,
};

/// Depth-first backtracking search, invoked when propagation stalls.
///
/// The searcher picks the unsolved cell with the fewest remaining candidates
/// (minimum-remaining-values heuristic, ties broken by lowest cell index),
/// tries its candidates in ascending digit order, and runs the reducer on an
/// independent copy of the grid after each trial placement. Contradicted
/// branches are discarded; the first valid complete grid found is returned.
///
/// Determinism: the fixed tie-break and digit order make the result
/// reproducible even for under-constrained puzzles with many solutions.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    reducer: Reducer,
}

impl Searcher {
    /// Creates a searcher that reduces branches with the given reducer.
    #[must_use]
    pub const fn new(reducer: Reducer) -> Self {
        Self { reducer }
    }

    /// Creates a searcher with all propagation rules.
    #[must_use]
    pub fn with_all_rules() -> Self {
        Self::new(Reducer::with_all_rules())
    }

    /// Returns the reducer used on each branch.
    #[must_use]
    pub const fn reducer(&self) -> &Reducer {
        &self.reducer
    }

    /// Searches for a valid complete grid reachable from `grid`.
    ///
    /// Expects `grid` to be already reduced and free of contradictions.
    /// Returns `None` when every branch is exhausted. Recursion depth is
    /// bounded by the number of unsolved cells (at most 81).
    #[must_use]
    pub fn search(
        &self,
        grid: &CandidateGrid,
        topology: &Topology,
        trace: &mut dyn TraceSink,
    ) -> Option<CandidateGrid> {
        if grid.is_solved() {
            return is_valid_solution(grid, topology).then(|| grid.clone());
        }

        // Minimum-remaining-values: the first minimum in row-major order.
        let cell = Cell::all()
            .filter(|&cell| grid.candidates(cell).len() > 1)
            .min_by_key(|&cell| grid.candidates(cell).len())?;

        for digit in grid.candidates(cell).iter() {
            log::debug!("guessing {cell}={digit}");
            let mut branch = grid.clone();
            branch.place(cell, digit);
            trace.on_assign(cell, digit, &branch);

            match self.reducer.reduce(&mut branch, topology, trace) {
                Reduction::Contradiction { cell } => {
                    log::debug!("branch contradicted at {cell}");
                }
                Reduction::Solved | Reduction::Stalled => {
                    if let Some(solution) = self.search(&branch, topology, trace) {
                        return Some(solution);
                    }
                }
            }
        }
        None
    }
}

/// Solves an 81-character puzzle string.
///
/// Runs propagation to a fixpoint, falls back to backtracking search when
/// stalled, and validates the result before returning it. The output is
/// always either a complete 81-digit solution string or a typed error,
/// never a partial grid.
///
/// # Errors
///
/// - [`SolveError::Parse`] for malformed input
/// - [`SolveError::NoSolution`] when no assignment satisfies every unit
/// - [`SolveError::InvalidSolution`] if propagation produced a complete grid
///   that fails validation (a latent rule defect)
///
/// # Examples
///
/// ```
/// use gridlock_core::Variant;
/// use gridlock_solver::solve;
///
/// let puzzle =
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
/// let solution = solve(puzzle, Variant::Diagonal)?;
/// assert_eq!(
///     solution,
///     "267945381853716249491823576576438192384192657129657438642379815935281764718564923",
/// );
/// # Ok::<(), gridlock_solver::SolveError>(())
/// ```
pub fn solve(input: &str, variant: Variant) -> Result<String, SolveError> {
    solve_with_trace(input, variant, &mut NullTrace)
}

/// Solves a puzzle, reporting every candidate collapse to `trace`.
///
/// See [`solve`] for the solving pipeline and error semantics.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_with_trace(
    input: &str,
    variant: Variant,
    trace: &mut dyn TraceSink,
) -> Result<String, SolveError> {
    let topology = Topology::new(variant);
    let mut grid = CandidateGrid::from_givens(input)?;
    let searcher = Searcher::with_all_rules();

    log::info!(
        "solving {:?} puzzle with {} givens",
        variant,
        grid.solved_cells().len()
    );
    match searcher.reducer().reduce(&mut grid, &topology, trace) {
        Reduction::Contradiction { cell } => {
            log::info!("givens are contradictory at {cell}");
            Err(SolveError::NoSolution)
        }
        Reduction::Solved => {
            if is_valid_solution(&grid, &topology) {
                Ok(grid.serialize())
            } else {
                Err(SolveError::InvalidSolution)
            }
        }
        Reduction::Stalled => {
            log::info!(
                "propagation stalled at {}/81 solved; searching",
                grid.solved_cells().len()
            );
            searcher
                .search(&grid, &topology, trace)
                .map(|solution| solution.serialize())
                .ok_or(SolveError::NoSolution)
        }
    }
}

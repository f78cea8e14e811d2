//! Fixpoint driver for the propagation rules.

use gridlock_core::{CandidateGrid, Cell, Topology};

use crate::{
    rule::{BoxedRule, all_rules},
    trace::TraceSink,
};

/// Terminal outcome of a reduction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Every cell is solved. A full validity check is still the caller's
    /// responsibility before declaring success.
    Solved,
    /// No rule made progress in a full round; propagation alone cannot
    /// finish and the grid is handed to the search engine.
    Stalled,
    /// A cell's candidate set became empty.
    Contradiction {
        /// The first cell observed with an empty candidate set.
        cell: Cell,
    },
}

/// Applies propagation rules in rounds until a terminal state is reached.
///
/// Each round runs every rule once, checking for contradiction and
/// completion after each rule (fail-fast). When a full round leaves the set
/// of solved cells unchanged the reduction is [`Stalled`]; re-running the
/// reducer on a stalled grid changes nothing.
///
/// [`Stalled`]: Reduction::Stalled
///
/// # Examples
///
/// ```
/// use gridlock_core::{CandidateGrid, Topology, Variant};
/// use gridlock_solver::{NullTrace, Reducer, Reduction};
///
/// let topology = Topology::new(Variant::Classic);
/// let mut grid = CandidateGrid::from_givens(
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
/// )?;
///
/// let reducer = Reducer::with_all_rules();
/// let outcome = reducer.reduce(&mut grid, &topology, &mut NullTrace);
/// assert_eq!(outcome, Reduction::Solved);
/// # Ok::<(), gridlock_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reducer {
    rules: Vec<BoxedRule>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::with_all_rules()
    }
}

impl Reducer {
    /// Creates a reducer with the specified rules, applied per round in the
    /// order given.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a reducer with all propagation rules in easiest-first order.
    #[must_use]
    pub fn with_all_rules() -> Self {
        Self::new(all_rules())
    }

    /// Returns the configured rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Runs propagation rounds to a terminal state.
    ///
    /// Newly collapsed cells are reported to `trace` after each rule
    /// application, in row-major cell order.
    pub fn reduce(
        &self,
        grid: &mut CandidateGrid,
        topology: &Topology,
        trace: &mut dyn TraceSink,
    ) -> Reduction {
        let mut reported = grid.solved_cells();
        loop {
            if let Some(cell) = grid.first_contradiction() {
                return Reduction::Contradiction { cell };
            }
            if grid.is_solved() {
                return Reduction::Solved;
            }

            let solved_at_round_start = reported;
            for rule in &self.rules {
                if !rule.apply(grid, topology) {
                    continue;
                }
                if let Some(cell) = grid.first_contradiction() {
                    log::debug!("{}: contradiction at {cell}", rule.name());
                    return Reduction::Contradiction { cell };
                }
                let solved_now = grid.solved_cells();
                for cell in solved_now.iter() {
                    if !reported.contains(cell)
                        && let Some(digit) = grid.solved_digit(cell)
                    {
                        trace.on_assign(cell, digit, grid);
                    }
                }
                reported = solved_now;
                log::debug!("{}: {}/81 solved", rule.name(), solved_now.len());
                if grid.is_solved() {
                    return Reduction::Solved;
                }
            }

            if reported == solved_at_round_start {
                log::debug!("stalled at {}/81 solved", reported.len());
                return Reduction::Stalled;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Digit, Variant};

    use super::*;
    use crate::trace::{NullTrace, RecordedTrace};

    const EASY: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    const EASY_SOLUTION: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
    const HARD: &str =
        "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
    const SOLVED: &str =
        "267945381853716249491823576576438192384192657129657438642379815935281764718564923";

    #[test]
    fn test_easy_puzzle_solved_by_propagation_alone() {
        let topology = Topology::new(Variant::Classic);
        let mut grid = CandidateGrid::from_givens(EASY).unwrap();

        let outcome = Reducer::with_all_rules().reduce(&mut grid, &topology, &mut NullTrace);
        assert_eq!(outcome, Reduction::Solved);
        assert_eq!(grid.serialize(), EASY_SOLUTION);
    }

    #[test]
    fn test_complete_grid_is_solved_on_round_one() {
        let topology = Topology::new(Variant::Classic);
        let mut grid = CandidateGrid::from_givens(SOLVED).unwrap();
        let before = grid.clone();

        let mut trace = RecordedTrace::new();
        let outcome = Reducer::with_all_rules().reduce(&mut grid, &topology, &mut trace);
        assert_eq!(outcome, Reduction::Solved);
        assert_eq!(grid, before);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_hard_puzzle_stalls() {
        let topology = Topology::new(Variant::Classic);
        let mut grid = CandidateGrid::from_givens(HARD).unwrap();

        let outcome = Reducer::with_all_rules().reduce(&mut grid, &topology, &mut NullTrace);
        assert_eq!(outcome, Reduction::Stalled);
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_stalled_reduction_is_idempotent() {
        let topology = Topology::new(Variant::Classic);
        let mut grid = CandidateGrid::from_givens(HARD).unwrap();
        let reducer = Reducer::with_all_rules();

        assert_eq!(
            reducer.reduce(&mut grid, &topology, &mut NullTrace),
            Reduction::Stalled
        );
        let stalled = grid.clone();
        assert_eq!(
            reducer.reduce(&mut grid, &topology, &mut NullTrace),
            Reduction::Stalled
        );
        assert_eq!(grid, stalled);
    }

    #[test]
    fn test_conflicting_givens_fail_fast() {
        let topology = Topology::new(Variant::Classic);
        let input = "55".to_owned() + &".".repeat(79);
        let mut grid = CandidateGrid::from_givens(&input).unwrap();

        let outcome = Reducer::with_all_rules().reduce(&mut grid, &topology, &mut NullTrace);
        assert!(matches!(outcome, Reduction::Contradiction { .. }));
    }

    #[test]
    fn test_trace_records_each_collapse_once() {
        let topology = Topology::new(Variant::Classic);
        let mut grid = CandidateGrid::from_givens(EASY).unwrap();
        let givens = grid.solved_cells().len();

        let mut trace = RecordedTrace::new();
        Reducer::with_all_rules().reduce(&mut grid, &topology, &mut trace);

        // Every non-given cell collapses exactly once.
        assert_eq!(trace.len(), 81 - givens);
        for event in trace.events() {
            assert_eq!(
                event.snapshot().solved_digit(event.cell()),
                Some(event.digit())
            );
        }
    }

    #[test]
    fn test_monotonic_shrinkage_across_reduction() {
        let topology = Topology::new(Variant::Classic);
        let before = CandidateGrid::from_givens(HARD).unwrap();
        let mut after = before.clone();

        Reducer::with_all_rules().reduce(&mut after, &topology, &mut NullTrace);
        for cell in gridlock_core::Cell::all() {
            assert!(after.candidates(cell).is_subset(before.candidates(cell)));
        }
    }

    #[test]
    fn test_custom_rule_list() {
        use crate::rule::Eliminate;

        let reducer = Reducer::new(vec![Box::new(Eliminate::new())]);
        assert_eq!(reducer.rules().len(), 1);

        // Elimination alone solves nothing on the hard puzzle but still
        // terminates at a fixpoint.
        let topology = Topology::new(Variant::Classic);
        let mut grid = CandidateGrid::from_givens(HARD).unwrap();
        assert_eq!(
            reducer.reduce(&mut grid, &topology, &mut NullTrace),
            Reduction::Stalled
        );
    }

    #[test]
    fn test_diagonal_constraints_tighten_reduction() {
        let input = "2".to_owned() + &".".repeat(80);
        let classic = {
            let topology = Topology::new(Variant::Classic);
            let mut grid = CandidateGrid::from_givens(&input).unwrap();
            Reducer::with_all_rules().reduce(&mut grid, &topology, &mut NullTrace);
            grid
        };
        let diagonal = {
            let topology = Topology::new(Variant::Diagonal);
            let mut grid = CandidateGrid::from_givens(&input).unwrap();
            Reducer::with_all_rules().reduce(&mut grid, &topology, &mut NullTrace);
            grid
        };

        // I9 shares only the main diagonal with the given at A1.
        let far_corner = gridlock_core::Cell::new(8, 8);
        assert!(classic.candidates(far_corner).contains(Digit::D2));
        assert!(!diagonal.candidates(far_corner).contains(Digit::D2));
    }
}

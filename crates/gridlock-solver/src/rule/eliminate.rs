use gridlock_core::{CandidateGrid, Topology};

use crate::rule::{BoxedRule, Rule};

const NAME: &str = "Eliminate";

/// Removes each solved cell's digit from the candidates of all its peers.
///
/// This is the workhorse rule: givens and every later collapse propagate
/// outwards through it. A removal may leave a peer with an empty candidate
/// set (contradiction) or with a new singleton, which the next round picks
/// up.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut CandidateGrid, topology: &Topology) -> bool {
        let mut changed = false;
        // Snapshot of the solved cells at entry; collapses caused by this
        // pass are propagated by the next round.
        for cell in grid.solved_cells().iter() {
            let Some(digit) = grid.solved_digit(cell) else {
                continue;
            };
            for peer in topology.peers(cell).iter() {
                changed |= grid.remove_candidate(peer, digit);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Cell, Digit, Variant};

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_removes_solved_digit_from_peers() {
        let mut grid = CandidateGrid::new();
        grid.place(Cell::new(0, 0), Digit::D5);

        RuleTester::new(grid)
            .apply_once(&Eliminate::new())
            .assert_changed()
            // Same row, same column, same block.
            .assert_removed(Cell::new(0, 8), [Digit::D5])
            .assert_removed(Cell::new(8, 0), [Digit::D5])
            .assert_removed(Cell::new(1, 1), [Digit::D5]);
    }

    #[test]
    fn test_leaves_non_peers_untouched() {
        let mut grid = CandidateGrid::new();
        grid.place(Cell::new(0, 0), Digit::D5);

        RuleTester::new(grid)
            .apply_once(&Eliminate::new())
            .assert_no_change(Cell::new(4, 4))
            .assert_no_change(Cell::new(8, 8));
    }

    #[test]
    fn test_diagonal_variant_reaches_diagonal_peers() {
        let mut grid = CandidateGrid::new();
        grid.place(Cell::new(0, 0), Digit::D5);

        RuleTester::with_variant(grid, Variant::Diagonal)
            .apply_once(&Eliminate::new())
            // I9 shares only the main diagonal with A1.
            .assert_removed(Cell::new(8, 8), [Digit::D5]);
    }

    #[test]
    fn test_conflicting_givens_produce_contradiction() {
        // Two 5s in one row eliminate each other down to empty sets.
        let mut grid = CandidateGrid::new();
        grid.place(Cell::new(0, 0), Digit::D5);
        grid.place(Cell::new(0, 4), Digit::D5);

        let topology = Topology::new(Variant::Classic);
        Eliminate::new().apply(&mut grid, &topology);
        assert!(grid.first_contradiction().is_some());
    }

    #[test]
    fn test_idempotent_once_propagated() {
        let mut grid = CandidateGrid::new();
        grid.place(Cell::new(3, 3), Digit::D9);

        let topology = Topology::new(Variant::Classic);
        let rule = Eliminate::new();
        assert!(rule.apply(&mut grid, &topology));
        assert!(!rule.apply(&mut grid, &topology));
    }
}

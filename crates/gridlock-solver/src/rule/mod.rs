//! Propagation rules.
//!
//! Each rule is a pure reduction: applied to a candidate grid it only ever
//! removes candidates or collapses cells to singletons, never re-adds a
//! value. Rules implement the [`Rule`] trait and are applied by the
//! [`Reducer`](crate::Reducer) in a fixed easiest-first order.

use std::fmt::Debug;

use gridlock_core::{CandidateGrid, Topology};

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};

mod eliminate;
mod naked_twins;
mod only_choice;

/// Returns all propagation rules, ordered easiest-first.
///
/// The order affects only how quickly the fixpoint is reached, not which
/// fixpoint is reached.
#[must_use]
pub fn all_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A candidate-reduction rule.
///
/// Applying a rule never grows any cell's candidate set (monotonic
/// shrinkage), and re-applying a rule to a grid it no longer changes is a
/// no-op. A rule may leave a cell's candidate set empty; detecting that
/// contradiction is the reducer's job.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule once across the whole grid.
    ///
    /// Returns `true` if any candidate set changed.
    fn apply(&self, grid: &mut CandidateGrid, topology: &Topology) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Cell, Digit, DigitSet, Variant};
    use proptest::prelude::*;

    use super::*;

    fn arbitrary_grid() -> impl Strategy<Value = CandidateGrid> {
        // Non-empty candidate sets per cell; rules must shrink monotonically
        // from any starting state, not just reachable ones.
        proptest::collection::vec(1u16..512, 81).prop_map(|masks| {
            let mut grid = CandidateGrid::new();
            for (index, mask) in masks.into_iter().enumerate() {
                let cell = Cell::from_index(index);
                for digit in Digit::ALL {
                    if mask & (1 << (digit.value() - 1)) == 0 {
                        grid.remove_candidate(cell, digit);
                    }
                }
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn prop_rules_shrink_monotonically(grid in arbitrary_grid()) {
            let topology = Topology::new(Variant::Diagonal);
            for rule in all_rules() {
                let mut after = grid.clone();
                rule.apply(&mut after, &topology);
                for cell in Cell::all() {
                    prop_assert!(
                        after.candidates(cell).is_subset(grid.candidates(cell)),
                        "{} grew candidates of {cell}",
                        rule.name(),
                    );
                }
            }
        }

        #[test]
        fn prop_rules_reach_a_fixpoint(grid in arbitrary_grid()) {
            // A second application after no-change must also be a no-change.
            let topology = Topology::new(Variant::Classic);
            for rule in all_rules() {
                let mut current = grid.clone();
                // Each changing application removes at least one candidate,
                // so 81 * 9 iterations is a hard ceiling.
                for _ in 0..729 {
                    if !rule.apply(&mut current, &topology) {
                        break;
                    }
                }
                let before = current.clone();
                prop_assert!(!rule.apply(&mut current, &topology));
                prop_assert_eq!(before, current);
            }
        }
    }

    #[test]
    fn test_all_rules_order() {
        let rules = all_rules();
        let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Eliminate", "Only Choice", "Naked Twins"]);
    }

    #[test]
    fn test_boxed_rule_clone() {
        let rule: BoxedRule = Box::new(Eliminate::new());
        let cloned = rule.clone();
        assert_eq!(cloned.name(), rule.name());
    }

    #[test]
    fn test_rules_noop_on_full_grid() {
        // With every candidate open there is nothing to deduce.
        let topology = Topology::new(Variant::Classic);
        for rule in all_rules() {
            let mut grid = CandidateGrid::new();
            assert!(!rule.apply(&mut grid, &topology), "{}", rule.name());
            for cell in Cell::all() {
                assert_eq!(grid.candidates(cell), DigitSet::FULL);
            }
        }
    }
}

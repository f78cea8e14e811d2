use gridlock_core::{CandidateGrid, Cell, Topology};

use crate::rule::{BoxedRule, Rule};

const NAME: &str = "Naked Twins";

/// Eliminates candidates confined to a matching pair of cells.
///
/// When two cells of one unit hold the identical two-digit candidate set,
/// those digits must occupy exactly those two cells, so they are removed
/// from every other cell of that unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut CandidateGrid, topology: &Topology) -> bool {
        let mut changed = false;
        for cell in Cell::all() {
            let pair = grid.candidates(cell);
            if pair.len() != 2 {
                continue;
            }
            for group in topology.unit_groups(cell) {
                for &twin in group.iter() {
                    if grid.candidates(twin) != pair {
                        continue;
                    }
                    // The pair digits are confined to `cell` and `twin`;
                    // clear them from the rest of the unit.
                    for &other in group.iter() {
                        if other == twin {
                            continue;
                        }
                        for digit in pair.iter() {
                            changed |= grid.remove_candidate(other, digit);
                        }
                    }
                }
            }
        }
        changed
    }
}

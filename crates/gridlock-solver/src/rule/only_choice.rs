use gridlock_core::{CandidateGrid, Cell, DigitSet, Topology};

use crate::rule::{BoxedRule, Rule};

const NAME: &str = "Only Choice";

/// Collapses a cell when one of its candidates fits nowhere else in a unit.
///
/// For every unsolved cell and every unit it belongs to, if exactly one of
/// the cell's candidates appears in no other cell of that unit, that digit
/// has only one possible location and is placed there.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut CandidateGrid, topology: &Topology) -> bool {
        let mut changed = false;
        for cell in Cell::all() {
            let candidates = grid.candidates(cell);
            if candidates.len() <= 1 {
                continue;
            }
            for group in topology.unit_groups(cell) {
                let mut elsewhere = DigitSet::EMPTY;
                for &peer in group.iter() {
                    elsewhere |= grid.candidates(peer);
                }
                if let Some(digit) = (candidates - elsewhere).as_single() {
                    grid.place(cell, digit);
                    changed = true;
                    // The cell is solved now; its remaining units hold
                    // nothing new this pass.
                    break;
                }
            }
        }
        changed
    }
}

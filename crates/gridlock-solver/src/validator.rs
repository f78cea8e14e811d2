//! Full-grid validity checking.

use gridlock_core::{CandidateGrid, DigitSet, Topology};

/// Checks that a fully-assigned grid satisfies every unit constraint.
///
/// Returns `true` only if every cell is solved and every unit's nine cells
/// hold the digits 1-9 exactly once. "All cells solved" and "constraints
/// satisfied" are not logically equivalent if propagation has a latent
/// defect, so this check is the authoritative gate before a grid is declared
/// a solution.
///
/// # Examples
///
/// ```
/// use gridlock_core::{CandidateGrid, Topology, Variant};
/// use gridlock_solver::is_valid_solution;
///
/// let topology = Topology::new(Variant::Classic);
/// let grid = CandidateGrid::from_givens(
///     "267945381853716249491823576576438192384192657129657438642379815935281764718564923",
/// )?;
/// assert!(is_valid_solution(&grid, &topology));
/// # Ok::<(), gridlock_core::ParseGridError>(())
/// ```
#[must_use]
pub fn is_valid_solution(grid: &CandidateGrid, topology: &Topology) -> bool {
    if !grid.is_solved() {
        return false;
    }
    for unit in topology.units() {
        let mut seen = DigitSet::EMPTY;
        for &cell in unit.cells() {
            let Some(digit) = grid.solved_digit(cell) else {
                return false;
            };
            if !seen.insert(digit) {
                return false;
            }
        }
        if seen != DigitSet::FULL {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Cell, Digit, Variant};

    use super::*;

    const SOLVED: &str =
        "267945381853716249491823576576438192384192657129657438642379815935281764718564923";

    #[test]
    fn test_accepts_valid_solution() {
        let topology = Topology::new(Variant::Classic);
        let grid = CandidateGrid::from_givens(SOLVED).unwrap();
        assert!(is_valid_solution(&grid, &topology));
    }

    #[test]
    fn test_accepts_diagonal_solution_under_diagonal_topology() {
        // SOLVED happens to satisfy the diagonal constraints too.
        let topology = Topology::new(Variant::Diagonal);
        let grid = CandidateGrid::from_givens(SOLVED).unwrap();
        assert!(is_valid_solution(&grid, &topology));
    }

    #[test]
    fn test_rejects_incomplete_grid() {
        let topology = Topology::new(Variant::Classic);
        let input = SOLVED.to_owned().replacen('2', ".", 1);
        let grid = CandidateGrid::from_givens(&input).unwrap();
        assert!(!is_valid_solution(&grid, &topology));
    }

    #[test]
    fn test_rejects_duplicate_in_row() {
        let topology = Topology::new(Variant::Classic);
        let mut grid = CandidateGrid::from_givens(SOLVED).unwrap();
        // Row A starts 2 6 7: forcing A2 to 2 duplicates within the row.
        grid.place(Cell::new(0, 1), Digit::D2);
        assert!(grid.is_solved());
        assert!(!is_valid_solution(&grid, &topology));
    }

    #[test]
    fn test_rejects_diagonal_violation_only_under_diagonal_topology() {
        // A classic solution whose main diagonal repeats the digit 1.
        let input =
            "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
        let grid = CandidateGrid::from_givens(input).unwrap();

        assert!(is_valid_solution(&grid, &Topology::new(Variant::Classic)));
        assert!(!is_valid_solution(&grid, &Topology::new(Variant::Diagonal)));
    }
}

//! Constraint topology: units and peer relations.
//!
//! The topology is computed once from the grid geometry and an optional
//! diagonal toggle, and is immutable afterwards. All propagation and search
//! components borrow it read-only.

use tinyvec::ArrayVec;

use crate::{cell::Cell, cell_set::CellSet};

/// Which constraint variant the topology is built for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Rows, columns, and 3×3 blocks (27 units).
    #[default]
    Classic,
    /// Rows, columns, blocks, and both main diagonals (29 units).
    Diagonal,
}

/// The kind of a constraint unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A full row.
    Row,
    /// A full column.
    Column,
    /// A 3×3 block.
    Block,
    /// The top-left to bottom-right diagonal.
    MainDiagonal,
    /// The top-right to bottom-left diagonal.
    AntiDiagonal,
}

/// A group of 9 cells that must collectively contain each digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; 9],
}

impl Unit {
    fn new(kind: UnitKind, cells: [Cell; 9]) -> Self {
        Self { kind, cells }
    }

    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the 9 member cells in construction order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

/// The co-members of one unit a cell belongs to, excluding the cell itself.
pub type UnitGroup = ArrayVec<[Cell; 8]>;

/// The immutable constraint topology of a puzzle.
///
/// Holds the unit list, the per-cell unit peer groups (one group of 8
/// co-members per unit the cell belongs to), and the flattened peer set per
/// cell. In the classic variant every cell has exactly 20 peers; the diagonal
/// variant adds peers for cells on a diagonal.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Cell, Topology, Variant};
///
/// let topology = Topology::new(Variant::Classic);
/// assert_eq!(topology.units().len(), 27);
/// assert_eq!(topology.peers(Cell::new(0, 0)).len(), 20);
///
/// let topology = Topology::new(Variant::Diagonal);
/// assert_eq!(topology.units().len(), 29);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    variant: Variant,
    units: Vec<Unit>,
    groups: [Vec<UnitGroup>; 81],
    peers: [CellSet; 81],
}

impl Topology {
    /// Builds the topology for the given variant.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let mut units = Vec::with_capacity(29);
        for r in 0..9 {
            units.push(Unit::new(
                UnitKind::Row,
                std::array::from_fn(|i| Cell::new(r, to_u8(i))),
            ));
        }
        for c in 0..9 {
            units.push(Unit::new(
                UnitKind::Column,
                std::array::from_fn(|i| Cell::new(to_u8(i), c)),
            ));
        }
        for b in 0..9u8 {
            units.push(Unit::new(
                UnitKind::Block,
                std::array::from_fn(|i| {
                    Cell::new(b / 3 * 3 + to_u8(i) / 3, b % 3 * 3 + to_u8(i) % 3)
                }),
            ));
        }
        if variant == Variant::Diagonal {
            units.push(Unit::new(
                UnitKind::MainDiagonal,
                std::array::from_fn(|i| Cell::new(to_u8(i), to_u8(i))),
            ));
            units.push(Unit::new(
                UnitKind::AntiDiagonal,
                std::array::from_fn(|i| Cell::new(to_u8(i), 8 - to_u8(i))),
            ));
        }

        let mut groups: [Vec<UnitGroup>; 81] = std::array::from_fn(|_| Vec::new());
        let mut peers = [CellSet::EMPTY; 81];
        for unit in &units {
            for &cell in unit.cells() {
                let mut group = UnitGroup::new();
                for &other in unit.cells() {
                    if other != cell {
                        group.push(other);
                        peers[cell.index()].insert(other);
                    }
                }
                groups[cell.index()].push(group);
            }
        }

        Self {
            variant,
            units,
            groups,
            peers,
        }
    }

    /// Returns the variant this topology was built for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns all constraint units.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the unit peer groups of a cell, one group per unit the cell
    /// belongs to, each excluding the cell itself.
    #[must_use]
    pub fn unit_groups(&self, cell: Cell) -> &[UnitGroup] {
        &self.groups[cell.index()]
    }

    /// Returns the flattened set of all peers of a cell.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }
}

fn to_u8(i: usize) -> u8 {
    u8::try_from(i).unwrap_or_default()
}

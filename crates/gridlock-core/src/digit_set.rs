//! A set of candidate digits for a single cell.

use std::{
    fmt::{self, Debug, Display},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::digit::Digit;

/// A set of candidate digits (1-9) for a single cell.
///
/// The set is backed by a `u16` where bits 0-8 represent digits 1-9, giving
/// O(1) membership tests, insertion, and removal. A cell is *solved* when its
/// set is a singleton, *unsolved* when it holds more than one digit, and
/// contradictory when it is empty.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
///
/// // Singleton detection
/// let solved = DigitSet::singleton(Digit::D3);
/// assert_eq!(solved.as_single(), Some(Digit::D3));
/// ```
///
/// # Set Operations
///
/// ```
/// use gridlock_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a - b, DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    #[must_use]
    pub const fn singleton(digit: Digit) -> Self {
        Self {
            bits: 1 << (digit.value() - 1),
        }
    }

    /// Inserts a digit into the set.
    ///
    /// Returns `true` if the digit was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = 1 << (digit.value() - 1);
        let changed = self.bits & bit == 0;
        self.bits |= bit;
        changed
    }

    /// Removes a digit from the set.
    ///
    /// Returns `true` if the digit was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = 1 << (digit.value() - 1);
        let changed = self.bits & bit != 0;
        self.bits &= !bit;
        changed
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.bits & (1 << (digit.value() - 1)) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the single digit if the set is a singleton, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::singleton(Digit::D4).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(&self) -> Option<Digit> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        Some(Digit::from_value(value))
    }

    /// Returns `true` if every digit in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(&self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Digit> + use<> {
        let bits = self.bits;
        Digit::ALL
            .into_iter()
            .filter(move |d| bits & (1 << (d.value() - 1)) != 0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitOr for DigitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Sub for DigitSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSet{{")?;
        Display::fmt(self, f)?;
        write!(f, "}}")
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            Display::fmt(&digit, f)?;
        }
        Ok(())
    }
}

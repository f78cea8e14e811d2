//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// This enum provides a type-safe representation of the values a cell may
/// hold, ruling out invalid digits at compile time.
///
/// # Examples
///
/// ```
/// use gridlock_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a puzzle character
/// let digit = Digit::from_char('7');
/// assert_eq!(digit, Some(Digit::D7));
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from a puzzle character `'1'..='9'`.
    ///
    /// Returns `None` for any other character, including `'.'` and `'0'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Digit;
    ///
    /// assert_eq!(Digit::from_char('1'), Some(Digit::D1));
    /// assert_eq!(Digit::from_char('.'), None);
    /// assert_eq!(Digit::from_char('0'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .filter(|&d| d >= 1)
            .map(|d| Self::from_value(u8::try_from(d).unwrap_or_default()))
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the puzzle character for this digit (`'1'..='9'`).
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

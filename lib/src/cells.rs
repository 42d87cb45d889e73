//! Cells and rows of the cellular automaton.

use crate::{error::Error, rules::Neighborhood};
use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The state of a cell.
///
/// There are exactly three states, `0`, `1` and `2`.
/// A `Symbol` can only be constructed through checked constructors,
/// so it never holds any other value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// The state `0`.
    pub const ZERO: Self = Self(0);
    /// The state `1`.
    pub const ONE: Self = Self(1);
    /// The state `2`.
    pub const TWO: Self = Self(2);

    /// All three states, in ascending order.
    pub const ALL: [Self; 3] = [Self::ZERO, Self::ONE, Self::TWO];

    /// Creates a symbol from an integer.
    ///
    /// Returns `None` if the integer is not `0`, `1` or `2`.
    #[inline]
    pub fn new(value: i64) -> Option<Self> {
        match value {
            0..=2 => Some(Self(value as u8)),
            _ => None,
        }
    }

    /// The integer value of the symbol.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The character used to display the symbol.
    ///
    /// * `0` is represented by `.`;
    /// * `1` is represented by `A`;
    /// * `2` is represented by `B`.
    #[inline]
    pub fn to_char(self) -> char {
        match self.0 {
            0 => '.',
            1 => 'A',
            _ => 'B',
        }
    }

    /// Parses a character, either a display character or a digit.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '0' => Some(Self::ZERO),
            'A' | 'a' | '1' => Some(Self::ONE),
            'B' | 'b' | '2' => Some(Self::TWO),
            _ => None,
        }
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl From<Symbol> for usize {
    fn from(symbol: Symbol) -> Self {
        symbol.0 as usize
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::new(value)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Signed(value), &"0, 1 or 2"))
    }
}

/// A row of cells.
///
/// The length of a row is fixed at construction.
/// The row is circular: the left neighbor of the first cell is the last cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<u8>")
)]
pub struct Row {
    cells: Vec<Symbol>,
}

impl Row {
    /// Creates a row from a vector of symbols.
    pub fn new(cells: Vec<Symbol>) -> Self {
        Self { cells }
    }

    /// Creates a row from integers, checking that each of them is a valid state.
    ///
    /// Returns [`Error::InvalidSymbol`] for the first invalid value.
    pub fn from_values(values: &[i64]) -> Result<Self, Error> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| Symbol::new(value).ok_or(Error::InvalidSymbol { index, value }))
            .collect()
    }

    /// The cells as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.cells
    }

    /// Gets a cell with circular indexing, so that `-1` is the last cell.
    ///
    /// Returns `None` if the row is empty.
    pub fn get_wrapped(&self, index: isize) -> Option<Symbol> {
        if self.cells.is_empty() {
            return None;
        }
        let index = index.rem_euclid(self.cells.len() as isize) as usize;
        Some(self.cells[index])
    }

    /// The neighborhood of the cell at `index`: its left neighbor and itself.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn neighborhood(&self, index: usize) -> Neighborhood {
        let center = self.cells[index];
        let left = match index.checked_sub(1) {
            Some(i) => self.cells[i],
            None => self.cells[self.cells.len() - 1],
        };
        Neighborhood::new(left, center)
    }

    /// Number of cells in each state, indexed by the state.
    pub fn counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for &symbol in &self.cells {
            counts[usize::from(symbol)] += 1;
        }
        counts
    }
}

impl Deref for Row {
    type Target = [Symbol];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl From<Vec<Symbol>> for Row {
    fn from(cells: Vec<Symbol>) -> Self {
        Self::new(cells)
    }
}

impl From<Row> for Vec<u8> {
    fn from(row: Row) -> Self {
        row.cells.into_iter().map(u8::from).collect()
    }
}

impl TryFrom<Vec<i64>> for Row {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

impl FromIterator<Symbol> for Row {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Parses a row from its display characters or digits, e.g. `".AB"` or `"012"`.
impl FromStr for Row {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, c)| {
                Symbol::from_char(c).ok_or(Error::InvalidSymbol {
                    index,
                    value: c as i64,
                })
            })
            .collect()
    }
}

/// Displays the row with the display characters of its cells.
impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for symbol in &self.cells {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

//! The spacetime field: the history of all generations.

use crate::cells::Row;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::Serialize;

/// The spacetime field.
///
/// The `t`-th row is the configuration after `t` steps;
/// the `0`-th row is the initial condition.
///
/// It is append-only. Only a [`World`](crate::World) can add rows to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct SpacetimeField {
    rows: Vec<Row>,
}

impl SpacetimeField {
    /// Creates a field with only the initial condition.
    pub(crate) fn new(initial: Row) -> Self {
        Self {
            rows: vec![initial],
        }
    }

    /// Appends a new generation.
    pub(crate) fn push(&mut self, row: Row) {
        debug_assert_eq!(row.len(), self.width());
        self.rows.push(row);
    }

    /// All rows, in the order of time.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row after `t` steps.
    pub fn get(&self, t: usize) -> Option<&Row> {
        self.rows.get(t)
    }

    /// The latest row.
    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Width of the field, i.e., the length of every row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of generations, including the initial one.
    pub fn generations(&self) -> usize {
        self.rows.len()
    }

    /// Same as [`generations`](Self::generations).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there is no row at all.
    ///
    /// A field built by a [`World`](crate::World) always contains the initial row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Number of cells in each state at time `t`, indexed by the state.
    pub fn counts(&self, t: usize) -> Option<[usize; 3]> {
        self.rows.get(t).map(Row::counts)
    }

    /// Converts to a rectangular grid of integers,
    /// `(generations) × (width)`, for rendering or export.
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&symbol| symbol.value()).collect())
            .collect()
    }
}

impl<'a> IntoIterator for &'a SpacetimeField {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Displays the field in a plaintext format, one generation per line.
///
/// * `0` is represented by `.`;
/// * `1` is represented by `A`;
/// * `2` is represented by `B`.
impl Display for SpacetimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

//! Rules given by a lookup table.

use super::{Neighborhood, Rule, NEIGHBORHOODS};
use crate::{cells::Symbol, error::Error};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of distinct rules, `3^9`.
pub const RULE_COUNT: u32 = 19683;

/// The largest valid rule number.
pub const MAX_RULE_NUMBER: u32 = RULE_COUNT - 1;

/// A rule given by a lookup table, which maps each of the 9 neighborhoods
/// to the next state.
///
/// The table is stored as a dense array indexed by [`Neighborhood::index`].
///
/// # Rule numbers
///
/// Write the rule number in ternary, least significant digit first,
/// padded with zeros to 9 digits. The `i`-th digit is then the output
/// for the `i`-th neighborhood in [`NEIGHBORHOODS`].
///
/// For example, `7518` is `101022110` in ternary, so the table maps
/// `(0, 0)` to `0`, `(0, 1)` to `1`, `(0, 2)` to `1`, `(1, 0)` to `2`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64", into = "u32")
)]
pub struct RuleTable {
    /// The output for each neighborhood.
    outputs: [Symbol; 9],
}

/// Builds the lookup table of a rule number.
///
/// Returns [`Error::InvalidRule`] unless `0 <= rule_number < 19683`.
pub fn build_rule_table(rule_number: i64) -> Result<RuleTable, Error> {
    if !(0..RULE_COUNT as i64).contains(&rule_number) {
        return Err(Error::InvalidRule(rule_number));
    }
    let mut outputs = [Symbol::ZERO; 9];
    let mut n = rule_number as usize;
    // Least significant digit first, so that the high digits pad with zeros.
    for output in outputs.iter_mut() {
        *output = Symbol::ALL[n % 3];
        n /= 3;
    }
    Ok(RuleTable { outputs })
}

impl RuleTable {
    /// Builds a table directly from the outputs of the 9 neighborhoods,
    /// in the order of [`NEIGHBORHOODS`].
    pub fn from_outputs(outputs: [Symbol; 9]) -> Self {
        Self { outputs }
    }

    /// Builds a table from a function on neighborhoods.
    pub fn from_fn<F: FnMut(Neighborhood) -> Symbol>(mut f: F) -> Self {
        let mut outputs = [Symbol::ZERO; 9];
        for (output, &nbhd) in outputs.iter_mut().zip(NEIGHBORHOODS.iter()) {
            *output = f(nbhd);
        }
        Self { outputs }
    }

    /// The rule number of the table.
    ///
    /// This is the inverse of [`build_rule_table`].
    pub fn rule_number(&self) -> u32 {
        self.outputs
            .iter()
            .rev()
            .fold(0, |n, &output| n * 3 + u32::from(output.value()))
    }

    /// The ternary digits of the rule number,
    /// least significant digit first, padded to 9 digits.
    pub fn ternary_digits(&self) -> [Symbol; 9] {
        self.outputs
    }

    /// Iterates over all neighborhoods and their outputs, in the order of
    /// [`NEIGHBORHOODS`].
    pub fn entries(&self) -> impl Iterator<Item = (Neighborhood, Symbol)> + '_ {
        NEIGHBORHOODS.iter().copied().zip(self.outputs.iter().copied())
    }

    /// The output for a neighborhood.
    #[inline]
    pub fn get(&self, nbhd: Neighborhood) -> Symbol {
        self.outputs[nbhd.index()]
    }
}

impl Rule for RuleTable {
    #[inline]
    fn next_state(&self, nbhd: Neighborhood) -> Symbol {
        self.get(nbhd)
    }

    fn rule_number(&self) -> u32 {
        RuleTable::rule_number(self)
    }
}

impl TryFrom<i64> for RuleTable {
    type Error = Error;

    fn try_from(rule_number: i64) -> Result<Self, Self::Error> {
        build_rule_table(rule_number)
    }
}

impl From<RuleTable> for u32 {
    fn from(table: RuleTable) -> Self {
        table.rule_number()
    }
}

/// Parses a rule number, with an optional `W` prefix, e.g. `W7518` or `7518`.
impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('W')
            .or_else(|| s.strip_prefix('w'))
            .unwrap_or(s);
        let rule_number = digits
            .parse::<i64>()
            .map_err(|_| Error::ParseRule(s.to_string()))?;
        build_rule_table(rule_number)
    }
}

/// Displays the rule as `W` followed by the rule number.
impl Display for RuleTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.rule_number())
    }
}

//! Cellular automaton rules.
//!
//! The next state of a cell only depends on its left neighbor and itself.
//! Such a rule is determined by its outputs on the 9 possible neighborhoods,
//! and is numbered by reading these outputs as a ternary number.

mod table;

use crate::cells::Symbol;
pub use table::{build_rule_table, RuleTable, MAX_RULE_NUMBER, RULE_COUNT};

/// The neighborhood of a cell: its left neighbor and itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Neighborhood {
    /// The state of the left neighbor.
    pub left: Symbol,
    /// The state of the cell itself.
    pub center: Symbol,
}

impl Neighborhood {
    /// Creates a neighborhood.
    #[inline]
    pub const fn new(left: Symbol, center: Symbol) -> Self {
        Self { left, center }
    }

    /// The position of the neighborhood in [`NEIGHBORHOODS`],
    /// i.e., `left * 3 + center`.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.left) * 3 + usize::from(self.center)
    }
}

/// All 9 neighborhoods, in lexicographic order.
pub const NEIGHBORHOODS: [Neighborhood; 9] = [
    Neighborhood::new(Symbol::ZERO, Symbol::ZERO),
    Neighborhood::new(Symbol::ZERO, Symbol::ONE),
    Neighborhood::new(Symbol::ZERO, Symbol::TWO),
    Neighborhood::new(Symbol::ONE, Symbol::ZERO),
    Neighborhood::new(Symbol::ONE, Symbol::ONE),
    Neighborhood::new(Symbol::ONE, Symbol::TWO),
    Neighborhood::new(Symbol::TWO, Symbol::ZERO),
    Neighborhood::new(Symbol::TWO, Symbol::ONE),
    Neighborhood::new(Symbol::TWO, Symbol::TWO),
];

/// A cellular automaton rule.
///
/// [`World`](crate::World) is generic over this trait,
/// though [`RuleTable`] is the only implementation in this crate.
pub trait Rule {
    /// The state of a cell in the next generation,
    /// given its neighborhood in this generation.
    fn next_state(&self, nbhd: Neighborhood) -> Symbol;

    /// The rule number.
    fn rule_number(&self) -> u32;
}

impl<R: Rule + ?Sized> Rule for &R {
    #[inline]
    fn next_state(&self, nbhd: Neighborhood) -> Symbol {
        (**self).next_state(nbhd)
    }

    fn rule_number(&self) -> u32 {
        (**self).rule_number()
    }
}

impl<R: Rule + ?Sized> Rule for std::sync::Arc<R> {
    #[inline]
    fn next_state(&self, nbhd: Neighborhood) -> Symbol {
        (**self).next_state(nbhd)
    }

    fn rule_number(&self) -> u32 {
        (**self).rule_number()
    }
}

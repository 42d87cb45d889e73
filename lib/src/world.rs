//! The world, which evolves a row of cells step by step.

use crate::{
    cells::Row,
    error::Error,
    field::SpacetimeField,
    rules::{build_rule_table, Rule, RuleTable},
};
use log::debug;

/// The world.
///
/// It owns the rule, the current row and the [`SpacetimeField`]
/// of all rows produced so far.
#[derive(Clone, Debug)]
pub struct World<R: Rule = RuleTable> {
    /// The rule of the cellular automaton.
    rule: R,

    /// The configuration in the latest generation.
    current: Row,

    /// All generations, starting from the initial condition.
    ///
    /// Its last row is always equal to `current`.
    spacetime: SpacetimeField,
}

impl World<RuleTable> {
    /// Creates a new world from a rule number and an initial condition.
    ///
    /// Returns [`Error::InvalidSymbol`] if the initial condition contains
    /// a value other than `0`, `1` and `2`,
    /// and [`Error::InvalidRule`] if the rule number is out of range.
    pub fn new(rule_number: i64, initial: &[i64]) -> Result<Self, Error> {
        let initial = Row::from_values(initial)?;
        let rule = build_rule_table(rule_number)?;
        Ok(Self::with_rule(rule, initial))
    }
}

impl<R: Rule> World<R> {
    /// Creates a new world from a rule and a row.
    pub fn with_rule(rule: R, initial: Row) -> Self {
        debug!(
            "New world: rule W{}, length {}",
            rule.rule_number(),
            initial.len()
        );
        World {
            rule,
            current: initial.clone(),
            spacetime: SpacetimeField::new(initial),
        }
    }

    /// Computes the next row from the current one.
    ///
    /// Every cell only reads the current row, so the order of the cells
    /// does not matter.
    fn next_row(&self) -> Row {
        (0..self.current.len())
            .map(|i| self.rule.next_state(self.current.neighborhood(i)))
            .collect()
    }

    /// Evolves the world by one step.
    pub fn step(&mut self) {
        let new_row = self.next_row();
        self.spacetime.push(new_row.clone());
        self.current = new_row;
    }

    /// Evolves the world by `time_steps` steps.
    ///
    /// Returns [`Error::InvalidStepCount`] if `time_steps` is negative,
    /// in which case the world is unchanged.
    pub fn evolve(&mut self, time_steps: i64) -> Result<(), Error> {
        if time_steps < 0 {
            return Err(Error::InvalidStepCount(time_steps));
        }
        debug!("Evolving {} steps from generation {}", time_steps, self.time());
        for _ in 0..time_steps {
            self.step();
        }
        Ok(())
    }

    /// Evolves the world by at most `time_steps` steps.
    ///
    /// After each step, `f` is called with the number of the new generation
    /// and the new row. The evolution stops early once `f` returns `false`.
    ///
    /// Returns the number of steps actually performed.
    pub fn evolve_while<F>(&mut self, time_steps: i64, mut f: F) -> Result<u64, Error>
    where
        F: FnMut(u64, &Row) -> bool,
    {
        if time_steps < 0 {
            return Err(Error::InvalidStepCount(time_steps));
        }
        let mut steps = 0;
        while steps < time_steps as u64 {
            self.step();
            steps += 1;
            if !f(self.time(), &self.current) {
                debug!("Evolution stopped at generation {}", self.time());
                break;
            }
        }
        Ok(steps)
    }

    /// The rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The configuration in the latest generation.
    pub fn current(&self) -> &Row {
        &self.current
    }

    /// The initial condition.
    pub fn initial(&self) -> &Row {
        // The field always starts with the initial condition.
        self.spacetime.get(0).unwrap_or(&self.current)
    }

    /// The spacetime field of all generations.
    pub fn spacetime(&self) -> &SpacetimeField {
        &self.spacetime
    }

    /// Consumes the world and returns its spacetime field.
    pub fn into_spacetime(self) -> SpacetimeField {
        self.spacetime
    }

    /// Number of cells in a row.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the rows are empty.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of steps performed so far.
    pub fn time(&self) -> u64 {
        (self.spacetime.len() - 1) as u64
    }
}

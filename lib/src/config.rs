//! World configuration.

use crate::{
    cells::Row,
    error::Error,
    init::create_initial_condition,
    rules::{build_rule_table, RuleTable},
    world::World,
};
use educe::Educe;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// The rule number.
    #[educe(Default = 7518)]
    pub rule_number: i64,

    /// Length of the random initial condition.
    ///
    /// Ignored when [`initial`](#structfield.initial) is given.
    #[educe(Default = 100)]
    pub length: i64,

    /// Number of time steps to run.
    #[educe(Default = 100)]
    pub time: i64,

    /// Seed of the random initial condition.
    ///
    /// `None` means that the initial condition is not reproducible.
    pub seed: Option<u64>,

    /// An explicit initial condition.
    ///
    /// `None` means that a random initial condition of the given
    /// [`length`](#structfield.length) is generated.
    pub initial: Option<Row>,
}

impl Config {
    /// Sets up a new configuration with given rule number, length and time.
    pub fn new(rule_number: i64, length: i64, time: i64) -> Self {
        Config {
            rule_number,
            length,
            time,
            ..Config::default()
        }
    }

    /// Sets the rule number.
    pub fn set_rule_number(mut self, rule_number: i64) -> Self {
        self.rule_number = rule_number;
        self
    }

    /// Sets the length of the random initial condition.
    pub fn set_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    /// Sets the number of time steps.
    pub fn set_time(mut self, time: i64) -> Self {
        self.time = time;
        self
    }

    /// Sets the seed.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the initial condition.
    pub fn set_initial<T: Into<Option<Row>>>(mut self, initial: T) -> Self {
        self.initial = initial.into();
        self
    }

    /// The rule table of the rule number.
    pub fn rule(&self) -> Result<RuleTable, Error> {
        build_rule_table(self.rule_number)
    }

    /// The initial condition: the explicit one if given,
    /// otherwise a random one.
    pub fn initial_condition(&self) -> Result<Row, Error> {
        match &self.initial {
            Some(initial) => Ok(initial.clone()),
            None => create_initial_condition(self.length, self.seed),
        }
    }

    /// Creates a new world from the configuration, without evolving it.
    ///
    /// Returns an error if the rule number, the length or the time is invalid.
    pub fn world(&self) -> Result<World, Error> {
        let rule = self.rule()?;
        if self.time < 0 {
            return Err(Error::InvalidStepCount(self.time));
        }
        let initial = self.initial_condition()?;
        Ok(World::with_rule(rule, initial))
    }

    /// Creates a new world from the configuration,
    /// and evolves it by [`time`](#structfield.time) steps.
    pub fn run(&self) -> Result<World, Error> {
        debug!("Running {:?}", self);
        let mut world = self.world()?;
        world.evolve(self.time)?;
        Ok(world)
    }
}

//! A simulator for 3-state nearest-neighbor cellular automata.
//!
//! Each cell has one of three states, `0`, `1` and `2`. In every step,
//! all cells are updated at the same time, and the new state of a cell
//! only depends on the states of its left neighbor and itself.
//! The row of cells is finite and circular.
//!
//! # Example
//!
//! ```rust
//! use terca_lib::World;
//!
//! let mut world = World::new(7518, &[0, 1, 2, 0, 1]).unwrap();
//! world.evolve(10).unwrap();
//! assert_eq!(world.spacetime().generations(), 11);
//! ```

mod cells;
mod config;
mod error;
mod field;
pub mod init;
pub mod rules;
mod world;

pub use cells::{Row, Symbol};
pub use config::Config;
pub use error::Error;
pub use field::SpacetimeField;
pub use rules::{build_rule_table, Neighborhood, Rule, RuleTable};
pub use world::World;

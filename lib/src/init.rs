//! Random initial conditions.

use crate::{
    cells::{Row, Symbol},
    error::Error,
};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

/// Generates a row of `length` cells, each uniformly random in `{0, 1, 2}`.
///
/// Returns [`Error::InvalidLength`] if `length` is negative.
pub fn random_row<G: Rng>(length: i64, rng: &mut G) -> Result<Row, Error> {
    if length < 0 {
        return Err(Error::InvalidLength(length));
    }
    Ok((0..length)
        .map(|_| Symbol::ALL[rng.gen_range(0..3)])
        .collect())
}

/// Generates a random row of `length` cells.
///
/// With a seed, the row is reproducible. Otherwise the thread-local
/// random number generator is used.
pub fn create_initial_condition(length: i64, seed: Option<u64>) -> Result<Row, Error> {
    match seed {
        Some(seed) => random_row(length, &mut StdRng::seed_from_u64(seed)),
        None => random_row(length, &mut thread_rng()),
    }
}

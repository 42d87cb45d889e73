//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid rule number {0}: it should be an integer between 0 and 19682.
    InvalidRule(i64),
    /// Invalid rule: {0:?} is not a rule number.
    ParseRule(String),
    /// Cell at index {index} has invalid state {value}: it should be 0, 1 or 2.
    InvalidSymbol {
        /// The index of the offending cell.
        index: usize,
        /// The offending value.
        value: i64,
    },
    /// Invalid number of time steps {0}: it should be non-negative.
    InvalidStepCount(i64),
    /// Invalid length {0}: it should be non-negative.
    InvalidLength(i64),
}

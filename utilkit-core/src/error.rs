//! Error types for the utilities.

use thiserror::Error;

/// Errors that can occur when calling a utility.
#[derive(Error, Debug)]
pub enum UtilError {
    /// Factorial was requested for a negative number
    #[error("Invalid argument: cannot compute factorial of negative number {0}")]
    NegativeFactorial(i64),

    /// Factorial result does not fit in a `u128`
    #[error("Factorial of {0} overflows u128")]
    FactorialOverflow(i64),

    /// Memoizer arguments could not be turned into a cache key
    #[error("Cannot serialize memoization key: {0}")]
    KeySerialization(#[source] serde_json::Error),

    /// Guessing range or secret is not usable
    #[error("Invalid range: {low}..={high} (secret: {secret:?})")]
    InvalidRange {
        /// Lower bound (inclusive)
        low: u32,
        /// Upper bound (inclusive)
        high: u32,
        /// Secret that was rejected, if any
        secret: Option<u32>,
    },
}

impl UtilError {
    /// Returns `true` if this error signals a rejected argument rather than
    /// an arithmetic or serialization limit.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            UtilError::NegativeFactorial(_) | UtilError::InvalidRange { .. }
        )
    }
}

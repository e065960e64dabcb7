//! Errors raised while building distributions or configuring randomness.

use thiserror::Error;

/// A distribution was requested with weights that describe no valid law.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DistributionError {
    /// Both weights are zero, so neither outcome has any probability.
    #[error("both weights are zero, so no outcome can be drawn")]
    ZeroTotalWeight,

    /// A weight is infinite or NaN.
    #[error("weight {weight} is not a finite number")]
    NonFiniteWeight {
        /// The offending weight.
        weight: f64,
    },

    /// A geometric distribution whose trials can never succeed.
    #[error("the success weight is zero, so the geometric distribution never terminates")]
    ZeroSuccessWeight,

    /// A geometric distribution whose expected number of trials is too large
    /// to sample.
    #[error("success probability {probability} is below the minimum of {minimum}")]
    NegligibleSuccessWeight {
        /// The normalized success probability.
        probability: f64,
        /// The smallest accepted probability.
        minimum: f64,
    },
}

/// The randomness source could not be configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The seed text is not an unsigned 64-bit integer.
    #[error("invalid random seed {value:?}: {message}")]
    InvalidSeed {
        /// The rejected text.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// The seed variable exists but cannot be read.
    #[error("cannot read the random seed variable: {0}")]
    EnvironmentVariable(#[from] std::env::VarError),
}

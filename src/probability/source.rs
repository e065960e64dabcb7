//! Configurable randomness source.
//!
//! Distributions never reach for a global generator: every draw is taken from
//! the [`RngCore`] handed to [`Distribution::sample`](super::Distribution::sample).
//! [`RandomSource`] is the ready-made generator for that role. It runs in one
//! of two modes:
//!
//! - **Entropy**: seeded from the operating system, different on every run.
//! - **Seeded**: deterministic, the same seed always yields the same draws.
//!
//! [`RandomSource::from_env`] picks the mode from the `KLEISLI_RNG_SEED`
//! environment variable.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::error::ConfigError;

/// The environment variable read by [`RandomSource::from_env`].
pub const SEED_VARIABLE: &str = "KLEISLI_RNG_SEED";

/// A seedable generator that distributions can sample from.
///
/// # Examples
///
/// ```rust
/// use kleisli::probability::{Distribution, RandomSource};
///
/// let mut first = RandomSource::seeded(7);
/// let mut second = RandomSource::seeded(7);
/// let uniform = Distribution::uniform();
///
/// assert_eq!(uniform.sample(&mut first), uniform.sample(&mut second));
/// ```
#[derive(Clone)]
pub struct RandomSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomSource {
    /// A source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// A deterministic source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Configures a source from the `KLEISLI_RNG_SEED` environment variable.
    ///
    /// - If set: uses the seed value for deterministic mode
    /// - If not set: uses entropy mode
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but is not a valid `u64`, or
    /// is not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_variable(SEED_VARIABLE)
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable name.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but is not a valid `u64`, or
    /// is not valid Unicode.
    pub fn from_variable(name: &str) -> Result<Self, ConfigError> {
        match std::env::var(name) {
            Ok(text) => {
                let source: Self = text.parse()?;
                tracing::info!(variable = name, seed = ?source.seed, "using deterministic random source");
                Ok(source)
            }
            Err(std::env::VarError::NotPresent) => Ok(Self::from_entropy()),
            Err(error) => Err(ConfigError::from(error)),
        }
    }

    /// The seed of a deterministic source; `None` in entropy mode.
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl FromStr for RandomSource {
    type Err = ConfigError;

    /// Parses a decimal `u64` seed, ignoring surrounding whitespace.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.trim()
            .parse::<u64>()
            .map(Self::seeded)
            .map_err(|error| ConfigError::InvalidSeed {
                value: text.to_string(),
                message: error.to_string(),
            })
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, destination: &mut [u8]) {
        self.rng.fill_bytes(destination);
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RandomSource")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

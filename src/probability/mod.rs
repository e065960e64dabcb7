//! Probability monad.
//!
//! - [`Distribution`]: a deferred sampler with `map`, `flat_map`, `zip`
//! - [`Samples`]: an endless iterator of draws
//! - [`RandomSource`]: seeded or entropy-backed randomness
//!
//! The randomness source is always passed in by the caller, so a seeded
//! [`RandomSource`] reproduces every draw of a program.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::probability::{Distribution, RandomSource};
//!
//! let mut rng = RandomSource::seeded(42);
//! let point = Distribution::gaussian().zip2(Distribution::gaussian());
//! let (x, y) = point.sample(&mut rng);
//! assert!(x.is_finite() && y.is_finite());
//! ```

mod distribution;
mod error;
mod source;

pub use distribution::{Distribution, MIN_GEOMETRIC_SUCCESS_PROBABILITY, Samples};
pub use error::{ConfigError, DistributionError};
pub use source::{RandomSource, SEED_VARIABLE};

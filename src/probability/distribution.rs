//! Distribution Monad - deferred random sampling.
//!
//! A `Distribution<T>` wraps a sampler `&mut dyn RngCore -> T`. Nothing is
//! drawn when a distribution is built or combined; every call to
//! [`Distribution::sample`] runs the sampler again and produces an
//! independent value.
//!
//! # Note on Type Classes
//!
//! Like `Reader` and `State`, the combinators are inherent methods: the
//! `Rc<dyn Fn>` representation needs `'static` bounds the type class traits
//! do not carry.
//!
//! # Laws
//!
//! With a fixed seed, the following pairs produce identical draws:
//!
//! - Functor identity: `d.map(|x| x)` and `d`
//! - Left identity: `Distribution::always(a).flat_map(f)` and `f(a)`
//! - Right identity: `d.flat_map(Distribution::always)` and `d`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::probability::{Distribution, RandomSource};
//!
//! let mut rng = RandomSource::seeded(1);
//! let dice = Distribution::uniform().map(|u| (u * 6.0) as u8 + 1);
//! let roll = dice.sample(&mut rng);
//! assert!((1..=6).contains(&roll));
//! ```

use std::f64::consts::PI;
use std::iter::FusedIterator;
use std::rc::Rc;

use rand::{Rng, RngCore};

use super::error::DistributionError;

/// A probability distribution over `T`, sampled on demand.
pub struct Distribution<T>
where
    T: 'static,
{
    sampler: Rc<dyn Fn(&mut dyn RngCore) -> T>,
}

impl<T> Distribution<T>
where
    T: 'static,
{
    /// Creates a distribution from a sampling function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::probability::{Distribution, RandomSource};
    /// use rand::RngCore;
    ///
    /// let word = Distribution::new(|rng: &mut dyn RngCore| rng.next_u32() % 10);
    /// assert!(word.sample(&mut RandomSource::seeded(5)) < 10);
    /// ```
    pub fn new<F>(sampler: F) -> Self
    where
        F: Fn(&mut dyn RngCore) -> T + 'static,
    {
        Self {
            sampler: Rc::new(sampler),
        }
    }

    /// Draws one value. Each call is an independent draw.
    pub fn sample(&self, rng: &mut dyn RngCore) -> T {
        (self.sampler)(rng)
    }

    /// The distribution that always yields `value`.
    pub fn always(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Defers building a distribution until it is sampled.
    ///
    /// `factory` runs again on every sample; its result is never cached.
    /// This is what lets a distribution refer to itself without recursing
    /// at construction time.
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        Self::new(move |rng| factory().sample(rng))
    }

    /// Transforms every drawn value.
    pub fn map<B, F>(self, function: F) -> Distribution<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        let sampler = self.sampler;
        Distribution::new(move |rng| function(sampler(rng)))
    }

    /// Chooses the next distribution from a drawn value.
    ///
    /// Both draws happen at sampling time, first from `self`, then from the
    /// distribution `function` returns.
    pub fn flat_map<B, F>(self, function: F) -> Distribution<B>
    where
        F: Fn(T) -> Distribution<B> + 'static,
        B: 'static,
    {
        let sampler = self.sampler;
        Distribution::new(move |rng| {
            let value = sampler(rng);
            function(value).sample(rng)
        })
    }

    /// Draws from both distributions, left first, and pairs the results.
    pub fn zip2<B>(self, other: Distribution<B>) -> Distribution<(T, B)>
    where
        B: 'static,
    {
        let first = self.sampler;
        let second = other.sampler;
        Distribution::new(move |rng| {
            let left = first(rng);
            (left, second(rng))
        })
    }

    /// Draws from three distributions, left to right.
    pub fn zip3<B, D>(
        self,
        second: Distribution<B>,
        third: Distribution<D>,
    ) -> Distribution<(T, B, D)>
    where
        B: 'static,
        D: 'static,
    {
        self.zip2(second)
            .zip2(third)
            .map(|((first, second), third)| (first, second, third))
    }

    /// An endless iterator of independent draws, owning its randomness source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::probability::{Distribution, RandomSource};
    ///
    /// let nines: Vec<i32> = Distribution::always(9)
    ///     .to_sequence(RandomSource::seeded(0))
    ///     .take(5)
    ///     .collect();
    /// assert_eq!(nines, vec![9; 5]);
    /// ```
    pub fn to_sequence<R>(self, rng: R) -> Samples<T, R>
    where
        R: RngCore,
    {
        Samples {
            distribution: self,
            rng,
        }
    }
}

impl Distribution<f64> {
    /// Uniform over `[0, 1)`.
    #[must_use]
    pub fn uniform() -> Self {
        Self::new(|rng| rng.random::<f64>())
    }

    /// Standard normal, mean 0 and variance 1, by the Box-Muller transform.
    ///
    /// The first uniform draw is mapped to `(0, 1]` so its logarithm is finite.
    #[must_use]
    pub fn gaussian() -> Self {
        Self::uniform()
            .zip2(Self::uniform())
            .map(|(first, second)| {
                let radius_draw = 1.0 - first;
                (-2.0 * radius_draw.ln()).sqrt() * (2.0 * PI * second).sin()
            })
    }
}

impl Distribution<bool> {
    /// `true` with probability `|weight_true| / (|weight_true| + |weight_false|)`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::NonFiniteWeight`] for an infinite or NaN
    /// weight and [`DistributionError::ZeroTotalWeight`] when both are zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::probability::{Distribution, RandomSource};
    ///
    /// let certain = Distribution::bernoulli(1.0, 0.0).unwrap();
    /// assert!(certain.sample(&mut RandomSource::seeded(3)));
    /// assert!(Distribution::bernoulli(0.0, 0.0).is_err());
    /// ```
    pub fn bernoulli(weight_true: f64, weight_false: f64) -> Result<Self, DistributionError> {
        let probability = success_probability(weight_true, weight_false)?;
        Ok(Self::with_probability(probability))
    }

    fn with_probability(probability: f64) -> Self {
        Distribution::uniform().map(move |draw| draw < probability)
    }

    /// A fair coin.
    #[must_use]
    pub fn fair_coin() -> Self {
        Distribution::uniform().map(|draw| draw < 0.5)
    }
}

impl Distribution<u64> {
    /// Number of Bernoulli trials up to and including the first success.
    ///
    /// Always at least 1.
    ///
    /// Sampling recurses once per failed trial, so the success probability
    /// must be at least [`MIN_GEOMETRIC_SUCCESS_PROBABILITY`].
    ///
    /// # Errors
    ///
    /// Same as [`Distribution::bernoulli`], plus
    /// [`DistributionError::ZeroSuccessWeight`] when success is impossible and
    /// [`DistributionError::NegligibleSuccessWeight`] when it is too unlikely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::probability::{Distribution, RandomSource};
    ///
    /// let trials = Distribution::geometric(1.0, 3.0).unwrap();
    /// assert!(trials.sample(&mut RandomSource::seeded(11)) >= 1);
    /// ```
    pub fn geometric(weight_true: f64, weight_false: f64) -> Result<Self, DistributionError> {
        let probability = success_probability(weight_true, weight_false)?;
        if probability == 0.0 {
            tracing::warn!(weight_false, "rejecting geometric distribution without success weight");
            return Err(DistributionError::ZeroSuccessWeight);
        }
        if probability < MIN_GEOMETRIC_SUCCESS_PROBABILITY {
            tracing::warn!(probability, "rejecting geometric distribution with negligible success weight");
            return Err(DistributionError::NegligibleSuccessWeight {
                probability,
                minimum: MIN_GEOMETRIC_SUCCESS_PROBABILITY,
            });
        }
        Ok(geometric_from(Distribution::with_probability(probability)))
    }

    /// Trials until the first head of a fair coin.
    #[must_use]
    pub fn fair_geometric() -> Self {
        geometric_from(Distribution::fair_coin())
    }
}

/// Smallest success probability [`Distribution::geometric`] accepts.
pub const MIN_GEOMETRIC_SUCCESS_PROBABILITY: f64 = 1e-3;

/// Validates a weight pair and returns `|weight_true| / (|weight_true| + |weight_false|)`.
///
/// Both weights are divided by the larger one first, so the sum stays in
/// `[1, 2]` whatever their magnitude.
fn success_probability(weight_true: f64, weight_false: f64) -> Result<f64, DistributionError> {
    for weight in [weight_true, weight_false] {
        if !weight.is_finite() {
            tracing::warn!(weight, "rejecting non-finite distribution weight");
            return Err(DistributionError::NonFiniteWeight { weight });
        }
    }
    let scale = weight_true.abs().max(weight_false.abs());
    if scale == 0.0 {
        tracing::warn!("rejecting distribution with zero total weight");
        return Err(DistributionError::ZeroTotalWeight);
    }
    let scaled_true = weight_true.abs() / scale;
    let scaled_false = weight_false.abs() / scale;
    Ok(scaled_true / (scaled_true + scaled_false))
}

// A failed trial adds one to a fresh geometric draw. The tail is rebuilt
// through `lazy` on each sample, so construction never recurses.
fn geometric_from(coin: Distribution<bool>) -> Distribution<u64> {
    let retry = coin.clone();
    coin.flat_map(move |success| {
        if success {
            Distribution::always(1)
        } else {
            let retry = retry.clone();
            Distribution::lazy(move || geometric_from(retry.clone())).map(|trials| trials + 1)
        }
    })
}

/// Endless draws from a [`Distribution`], created by
/// [`Distribution::to_sequence`].
pub struct Samples<T, R>
where
    T: 'static,
{
    distribution: Distribution<T>,
    rng: R,
}

impl<T, R> Iterator for Samples<T, R>
where
    T: 'static,
    R: RngCore,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.distribution.sample(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, R> FusedIterator for Samples<T, R>
where
    T: 'static,
    R: RngCore,
{
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<T> Clone for Distribution<T>
where
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            sampler: self.sampler.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T> std::fmt::Display for Distribution<T>
where
    T: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Distribution>")
    }
}

static_assertions::assert_not_impl_any!(Distribution<f64>: Send, Sync);

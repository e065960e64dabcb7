//! Either type - exactly one of two values.
//!
//! `Either<E, V>` is `Error(E)` or `Value(V)`. The names are only a
//! convention: the type deliberately carries no `map` or `flat_map` of its own.
//! To transform one side, first choose it with
//! [`into_value_projection`](Either::into_value_projection) or
//! [`into_error_projection`](Either::into_error_projection); the projection
//! routes every operator to that side and leaves the other side untouched.
//!
//! The [`either`] function is the one place where a panic is turned into a
//! value.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
//!
//! let doubled = parsed.into_value_projection().map(|n| n * 2).into_either();
//! assert_eq!(doubled, Either::value(84));
//! ```

use std::panic::{self, AssertUnwindSafe};

use super::panic::Panic;
use super::projection::{ErrorProjection, ValueProjection};

/// A value that is either an `Error(E)` or a `Value(V)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, V> {
    /// The error side.
    Error(E),
    /// The value side.
    Value(V),
}

impl<E, V> Either<E, V> {
    /// Builds an `Either` populated on the error side.
    #[inline]
    pub const fn error(error: E) -> Self {
        Self::Error(error)
    }

    /// Builds an `Either` populated on the value side.
    #[inline]
    pub const fn value(value: V) -> Self {
        Self::Value(value)
    }

    /// Returns `true` for `Error`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` for `Value`.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Eliminates the `Either` by handling both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let outcome: Either<&str, u8> = Either::error("late");
    /// assert_eq!(outcome.fold(|e| e.len(), |v| usize::from(v)), 4);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_error: F, on_value: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(V) -> R,
    {
        match self {
            Self::Error(error) => on_error(error),
            Self::Value(value) => on_value(value),
        }
    }

    /// Views this `Either` through its error side.
    #[inline]
    pub const fn into_error_projection(self) -> ErrorProjection<E, V> {
        ErrorProjection::new(self)
    }

    /// Views this `Either` through its value side.
    #[inline]
    pub const fn into_value_projection(self) -> ValueProjection<E, V> {
        ValueProjection::new(self)
    }

    /// Converts into a `Result`, `Value` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        self.fold(Err, Ok)
    }
}

impl<E, V> From<Result<V, E>> for Either<E, V> {
    /// `Ok(v)` becomes `Value(v)` and `Err(e)` becomes `Error(e)`.
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<E, V> From<Either<E, V>> for Result<V, E> {
    #[inline]
    fn from(either: Either<E, V>) -> Self {
        either.into_result()
    }
}

// =============================================================================
// Panic Boundary
// =============================================================================

/// Runs `function`, turning a panic into `Either::Error`.
///
/// A normal return becomes `Value(result)`. A panic is caught and its payload
/// is returned untouched inside [`Panic`], so the exact object passed to
/// [`std::panic::panic_any`] can be recovered with [`Panic::downcast`].
///
/// The panic hook still runs, so the usual message reaches stderr. State that
/// the closure mutated before panicking is not rolled back.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{Either, either};
///
/// assert_eq!(either(|| 1 + 1).into_result().ok(), Some(2));
///
/// let failed = either(|| -> i32 { panic!("boom") });
/// let message = failed.fold(|panic| panic.message().map(str::to_owned), |_| None);
/// assert_eq!(message.as_deref(), Some("boom"));
/// ```
pub fn either<V, F>(function: F) -> Either<Panic, V>
where
    F: FnOnce() -> V,
{
    match panic::catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Either::Value(value),
        Err(payload) => {
            let captured = Panic::new(payload);
            tracing::debug!(
                message = captured.message().unwrap_or("<non-string payload>"),
                "captured panic as Either::Error"
            );
            Either::Error(captured)
        }
    }
}

/// Runs a fallible `function` and moves its `Result` into an `Either`.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{Either, try_either};
///
/// let parsed = try_either(|| "7".parse::<u8>());
/// assert_eq!(parsed.into_result(), Ok(7));
/// ```
#[inline]
pub fn try_either<V, E, F>(function: F) -> Either<E, V>
where
    F: FnOnce() -> Result<V, E>,
{
    function().into()
}

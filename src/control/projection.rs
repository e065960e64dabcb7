//! Side-scoped views over [`Either`].
//!
//! A projection owns an `Either` and binds every operator to one side:
//!
//! - [`ValueProjection`] maps, chains and zips the `Value` side.
//! - [`ErrorProjection`] maps, chains and zips the `Error` side.
//!
//! The side is chosen by the wrapper type, so it is fixed at compile time.
//! Operating on an `Either` whose populated side is not the projected one is a
//! no-op: the `Either` is re-wrapped unchanged and the user function is never
//! called.
//!
//! # Laws
//!
//! Both projections satisfy the Functor and Monad laws on their own side, and
//! **isolation**: for every `f`,
//!
//! ```text
//! Either::error(e).into_value_projection().map(f).into_either() == Either::error(e)
//! Either::value(v).into_error_projection().map(f).into_either() == Either::value(v)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! fn checked_half(n: i32) -> Either<String, i32> {
//!     if n % 2 == 0 { Either::value(n / 2) } else { Either::error(format!("{n} is odd")) }
//! }
//!
//! let result = Either::<String, i32>::value(12)
//!     .into_value_projection()
//!     .flat_map(checked_half)
//!     .flat_map(checked_half)
//!     .flat_map(checked_half)
//!     .into_either();
//! assert_eq!(result, Either::error("3 is odd".to_string()));
//! ```

use super::either::Either;
use super::maybe::Maybe;
use crate::typeclass::{Functor, Monad, TypeConstructor};

// =============================================================================
// Value Projection
// =============================================================================

/// An [`Either`] viewed through its `Value` side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ValueProjection<E, V> {
    either: Either<E, V>,
}

impl<E, V> ValueProjection<E, V> {
    /// Binds `either` to its value side.
    #[inline]
    pub const fn new(either: Either<E, V>) -> Self {
        Self { either }
    }

    /// Borrows the underlying `Either`.
    #[inline]
    pub const fn as_either(&self) -> &Either<E, V> {
        &self.either
    }

    /// Unwraps the underlying `Either`.
    #[inline]
    pub fn into_either(self) -> Either<E, V> {
        self.either
    }

    /// Switches to the error-side view of the same `Either`.
    #[inline]
    pub fn into_error_projection(self) -> ErrorProjection<E, V> {
        ErrorProjection::new(self.either)
    }

    /// Transforms the value; an error passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let ok: Either<&str, i32> = Either::value(4);
    /// assert_eq!(ok.into_value_projection().map(|n| n + 1).into_either(), Either::value(5));
    /// ```
    #[inline]
    pub fn map<W, F>(self, function: F) -> ValueProjection<E, W>
    where
        F: FnOnce(V) -> W,
    {
        ValueProjection::new(match self.either {
            Either::Error(error) => Either::Error(error),
            Either::Value(value) => Either::Value(function(value)),
        })
    }

    /// Chains a computation that may fail; an error passes through untouched.
    #[inline]
    pub fn flat_map<W, F>(self, function: F) -> ValueProjection<E, W>
    where
        F: FnOnce(V) -> Either<E, W>,
    {
        ValueProjection::new(match self.either {
            Either::Error(error) => Either::Error(error),
            Either::Value(value) => function(value),
        })
    }

    /// Eliminates the underlying `Either`.
    #[inline]
    pub fn fold<R, F, G>(self, on_error: F, on_value: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(V) -> R,
    {
        self.either.fold(on_error, on_value)
    }

    /// The value, if this side is populated.
    #[inline]
    pub fn to_maybe(self) -> Maybe<V> {
        self.fold(|_| Maybe::Absent, Maybe::Present)
    }

    /// Iterates over the zero or one value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&V> {
        match &self.either {
            Either::Error(_) => None.into_iter(),
            Either::Value(value) => Some(value).into_iter(),
        }
    }

    /// Exchanges the two sides, staying on the value projection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let failed: Either<&str, i32> = Either::error("oops");
    /// let swapped = failed.into_value_projection().swap();
    /// assert_eq!(swapped.into_either(), Either::value("oops"));
    /// ```
    #[inline]
    pub fn swap(self) -> ValueProjection<V, E> {
        ValueProjection::new(self.fold(Either::Value, Either::Error))
    }

    /// Pairs two values; the first error, left to right, wins.
    #[inline]
    pub fn zip2<W>(self, other: ValueProjection<E, W>) -> ValueProjection<E, (V, W)> {
        self.flat_map(|first| other.map(|second| (first, second)).into_either())
    }

    /// Triples three values; the first error, left to right, wins.
    #[inline]
    pub fn zip3<W, X>(
        self,
        second: ValueProjection<E, W>,
        third: ValueProjection<E, X>,
    ) -> ValueProjection<E, (V, W, X)> {
        self.flat_map(|first| {
            second
                .flat_map(|second| third.map(|third| (first, second, third)).into_either())
                .into_either()
        })
    }
}

impl<E, V> From<Either<E, V>> for ValueProjection<E, V> {
    #[inline]
    fn from(either: Either<E, V>) -> Self {
        Self::new(either)
    }
}

impl<E, V> IntoIterator for ValueProjection<E, V> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_maybe().into_iter()
    }
}

impl<E, V> TypeConstructor for ValueProjection<E, V> {
    type Inner = V;
    type WithType<B> = ValueProjection<E, B>;
}

impl<E, V> Functor for ValueProjection<E, V> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> ValueProjection<E, B>
    where
        F: FnOnce(V) -> B,
    {
        self.map(function)
    }
}

impl<E, V> Monad for ValueProjection<E, V> {
    #[inline]
    fn pure<B>(value: B) -> ValueProjection<E, B> {
        ValueProjection::new(Either::Value(value))
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> ValueProjection<E, B>
    where
        F: FnOnce(V) -> ValueProjection<E, B>,
    {
        Self::flat_map(self, |value| function(value).into_either())
    }
}

// =============================================================================
// Error Projection
// =============================================================================

/// An [`Either`] viewed through its `Error` side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ErrorProjection<E, V> {
    either: Either<E, V>,
}

impl<E, V> ErrorProjection<E, V> {
    /// Binds `either` to its error side.
    #[inline]
    pub const fn new(either: Either<E, V>) -> Self {
        Self { either }
    }

    /// Borrows the underlying `Either`.
    #[inline]
    pub const fn as_either(&self) -> &Either<E, V> {
        &self.either
    }

    /// Unwraps the underlying `Either`.
    #[inline]
    pub fn into_either(self) -> Either<E, V> {
        self.either
    }

    /// Switches to the value-side view of the same `Either`.
    #[inline]
    pub fn into_value_projection(self) -> ValueProjection<E, V> {
        ValueProjection::new(self.either)
    }

    /// Transforms the error; a value passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let failed: Either<&str, i32> = Either::error("disk full");
    /// let described = failed.into_error_projection().map(|e| e.len()).into_either();
    /// assert_eq!(described, Either::error(9));
    /// ```
    #[inline]
    pub fn map<D, F>(self, function: F) -> ErrorProjection<D, V>
    where
        F: FnOnce(E) -> D,
    {
        ErrorProjection::new(match self.either {
            Either::Error(error) => Either::Error(function(error)),
            Either::Value(value) => Either::Value(value),
        })
    }

    /// Chains a recovery step on the error; a value passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let failed: Either<&str, i32> = Either::error("retry");
    /// let recovered = failed
    ///     .into_error_projection()
    ///     .flat_map(|e| if e == "retry" { Either::value(0) } else { Either::error(e) })
    ///     .into_either();
    /// assert_eq!(recovered, Either::value(0));
    /// ```
    #[inline]
    pub fn flat_map<D, F>(self, function: F) -> ErrorProjection<D, V>
    where
        F: FnOnce(E) -> Either<D, V>,
    {
        ErrorProjection::new(match self.either {
            Either::Error(error) => function(error),
            Either::Value(value) => Either::Value(value),
        })
    }

    /// Eliminates the underlying `Either`.
    #[inline]
    pub fn fold<R, F, G>(self, on_error: F, on_value: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(V) -> R,
    {
        self.either.fold(on_error, on_value)
    }

    /// The error, if this side is populated.
    #[inline]
    pub fn to_maybe(self) -> Maybe<E> {
        self.fold(Maybe::Present, |_| Maybe::Absent)
    }

    /// Iterates over the zero or one error.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&E> {
        match &self.either {
            Either::Error(error) => Some(error).into_iter(),
            Either::Value(_) => None.into_iter(),
        }
    }

    /// Exchanges the two sides, staying on the error projection.
    #[inline]
    pub fn swap(self) -> ErrorProjection<V, E> {
        ErrorProjection::new(self.fold(Either::Value, Either::Error))
    }

    /// Pairs two errors; the first value, left to right, wins.
    #[inline]
    pub fn zip2<D>(self, other: ErrorProjection<D, V>) -> ErrorProjection<(E, D), V> {
        self.flat_map(|first| other.map(|second| (first, second)).into_either())
    }

    /// Triples three errors; the first value, left to right, wins.
    #[inline]
    pub fn zip3<D, C>(
        self,
        second: ErrorProjection<D, V>,
        third: ErrorProjection<C, V>,
    ) -> ErrorProjection<(E, D, C), V> {
        self.flat_map(|first| {
            second
                .flat_map(|second| third.map(|third| (first, second, third)).into_either())
                .into_either()
        })
    }
}

impl<E, V> From<Either<E, V>> for ErrorProjection<E, V> {
    #[inline]
    fn from(either: Either<E, V>) -> Self {
        Self::new(either)
    }
}

impl<E, V> IntoIterator for ErrorProjection<E, V> {
    type Item = E;
    type IntoIter = std::option::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_maybe().into_iter()
    }
}

impl<E, V> TypeConstructor for ErrorProjection<E, V> {
    type Inner = E;
    type WithType<B> = ErrorProjection<B, V>;
}

impl<E, V> Functor for ErrorProjection<E, V> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> ErrorProjection<B, V>
    where
        F: FnOnce(E) -> B,
    {
        self.map(function)
    }
}

impl<E, V> Monad for ErrorProjection<E, V> {
    #[inline]
    fn pure<B>(value: B) -> ErrorProjection<B, V> {
        ErrorProjection::new(Either::Error(value))
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> ErrorProjection<B, V>
    where
        F: FnOnce(E) -> ErrorProjection<B, V>,
    {
        Self::flat_map(self, |error| function(error).into_either())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn value(number: i32) -> Either<String, i32> {
        Either::Value(number)
    }

    fn error(message: &str) -> Either<String, i32> {
        Either::Error(message.to_string())
    }

    #[rstest]
    fn value_projection_skips_the_function_on_errors() {
        let projected = error("bad")
            .into_value_projection()
            .map(|_: i32| -> i32 { panic!("must not run") });
        assert_eq!(projected.into_either(), error("bad"));
    }

    #[rstest]
    fn error_projection_skips_the_function_on_values() {
        let projected = value(1)
            .into_error_projection()
            .flat_map(|_: String| -> Either<String, i32> { panic!("must not run") });
        assert_eq!(projected.into_either(), value(1));
    }

    #[rstest]
    #[case(value(1), value(2), Either::Value((1, 2)))]
    #[case(error("a"), value(2), Either::Error("a".to_string()))]
    #[case(value(1), error("b"), Either::Error("b".to_string()))]
    #[case(error("a"), error("b"), Either::Error("a".to_string()))]
    fn value_zip2_keeps_the_first_error(
        #[case] first: Either<String, i32>,
        #[case] second: Either<String, i32>,
        #[case] expected: Either<String, (i32, i32)>,
    ) {
        let zipped = first
            .into_value_projection()
            .zip2(second.into_value_projection());
        assert_eq!(zipped.into_either(), expected);
    }

    #[rstest]
    fn error_zip3_keeps_the_first_value() {
        let zipped = error("a").into_error_projection().zip3(
            value(2).into_error_projection(),
            value(3).into_error_projection(),
        );
        assert_eq!(zipped.into_either(), Either::Value(2));
    }

    #[rstest]
    fn error_zip2_collects_every_error() {
        let zipped = error("a")
            .into_error_projection()
            .zip2(error("b").into_error_projection());
        assert_eq!(
            zipped.into_either(),
            Either::Error(("a".to_string(), "b".to_string()))
        );
    }

    #[rstest]
    fn as_either_borrows_without_consuming() {
        let value_side = value(3).into_value_projection();
        assert_eq!(value_side.as_either(), &value(3));
        assert_eq!(value_side.into_either(), value(3));

        let error_side = error("e").into_error_projection();
        assert_eq!(error_side.as_either(), &error("e"));
        assert!(error_side.as_either().is_error());
    }

    #[rstest]
    fn replace_only_touches_the_active_side() {
        let replaced = value(1).into_value_projection().replace('v');
        assert_eq!(replaced.into_either(), Either::Value('v'));

        let untouched = error("kept").into_value_projection().replace('v');
        assert_eq!(untouched.into_either(), Either::Error("kept".to_string()));

        let inactive = value(9).into_error_projection().replace(0_u8);
        assert_eq!(inactive.into_either(), Either::Value(9));
    }

    #[rstest]
    fn swap_relabels_the_sides() {
        let swapped = value(5).into_error_projection().swap();
        assert_eq!(swapped.into_either(), Either::Error(5));
    }

    #[rstest]
    fn to_maybe_reflects_the_projected_side() {
        assert_eq!(value(5).into_value_projection().to_maybe(), Maybe::Present(5));
        assert_eq!(value(5).into_error_projection().to_maybe(), Maybe::Absent);
        assert_eq!(
            error("x").into_error_projection().into_iter().collect::<Vec<_>>(),
            vec!["x".to_string()]
        );
    }
}

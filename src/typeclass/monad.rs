//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::functor::Functor;

/// A type class for containers that can lift values and chain computations.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Maybe;
/// use kleisli::typeclass::Monad;
///
/// fn half(value: i32) -> Maybe<i32> {
///     if value % 2 == 0 { Maybe::present(value / 2) } else { Maybe::absent() }
/// }
///
/// let chained = Monad::flat_map(Maybe::present(20), half);
/// assert_eq!(chained, Maybe::present(10));
/// assert_eq!(Monad::flat_map(Maybe::present(3), half), Maybe::absent());
/// ```
pub trait Monad: Functor {
    /// Lifts a value into the monadic context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the inner value and flattens the result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function producing the next monadic value
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;
}

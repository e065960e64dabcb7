//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// Mapping never changes the shape of the container: an absent `Maybe` stays
/// absent, and a projection over its inactive side stays untouched.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{Either, Maybe};
/// use kleisli::typeclass::Functor;
///
/// assert_eq!(Maybe::present(5).fmap(|n| n.to_string()), Maybe::present("5".to_string()));
///
/// let failed: Either<&str, i32> = Either::error("boom");
/// let untouched = failed.into_value_projection().fmap(|n| n + 1);
/// assert_eq!(untouched.into_either(), Either::error("boom"));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the inner value with a constant, keeping the structure.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }
}

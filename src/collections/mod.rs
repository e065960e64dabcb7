//! Slice and pair helpers.
//!
//! - [`head`], [`tail`], [`uncons`]: total views over the front of a slice
//! - [`PairFirst`], [`PairSecond`]: one-sided views over a pair, see [`PairExt`]
//!
//! # Examples
//!
//! ```rust
//! use kleisli::collections::{head, tail, PairExt};
//! use kleisli::control::Maybe;
//!
//! let numbers = [1, 2, 3];
//! assert_eq!(head(&numbers), Maybe::Present(&1));
//! assert_eq!(tail(&numbers), &[2, 3]);
//!
//! let renamed = ("id", 7).to_second().map(|n| n * 2).into_pair();
//! assert_eq!(renamed, ("id", 14));
//! ```

mod pair;

pub use pair::{PairExt, PairFirst, PairSecond};

use crate::control::Maybe;

/// The first element of a slice, or `Absent` when it is empty.
///
/// # Complexity
///
/// O(1)
#[inline]
pub fn head<T>(items: &[T]) -> Maybe<&T> {
    items.first().into()
}

/// Everything after the first element.
///
/// An empty slice has an empty tail.
///
/// # Complexity
///
/// O(1)
#[inline]
pub fn tail<T>(items: &[T]) -> &[T] {
    items.get(1..).unwrap_or_default()
}

/// Splits a slice into its head and tail in one step.
///
/// # Examples
///
/// ```rust
/// use kleisli::collections::uncons;
/// use kleisli::control::Maybe;
///
/// let (first, rest) = uncons(&["a", "b"]);
/// assert_eq!(first, Maybe::Present(&"a"));
/// assert_eq!(rest, &["b"]);
/// ```
#[inline]
pub fn uncons<T>(items: &[T]) -> (Maybe<&T>, &[T]) {
    match items.split_first() {
        Some((first, rest)) => (Maybe::Present(first), rest),
        None => (Maybe::Absent, items),
    }
}

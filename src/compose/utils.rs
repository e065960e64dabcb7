//! Small combinators that make composition pipelines read well.

/// Returns the value unchanged.
///
/// The unit of [`compose`](super::compose) on both sides.
///
/// # Examples
///
/// ```
/// use kleisli::compose::{compose, identity};
///
/// let double = |x: i32| x * 2;
/// assert_eq!(compose(identity, double)(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use kleisli::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

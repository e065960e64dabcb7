//! Binary composition of unary and nullary functions.

/// Composes two functions right to left.
///
/// `compose(outer, inner)(x)` evaluates `inner(x)` first and feeds the result
/// to `outer`.
///
/// # Laws
///
/// - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
/// - **Identity**: `compose(identity, f) == f == compose(f, identity)`
///
/// # Examples
///
/// ```
/// use kleisli::compose::compose;
///
/// let length = |text: String| text.len();
/// let render = |number: i32| number.to_string();
///
/// assert_eq!(compose(length, render)(12345), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: G, inner: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| outer(inner(input))
}

/// Composes two functions left to right.
///
/// `and_then(first, second)(x) == second(first(x))`, the mirror image of
/// [`compose`].
///
/// # Examples
///
/// ```
/// use kleisli::compose::and_then;
///
/// let parse = |text: &str| text.len();
/// let is_short = |length: usize| length < 4;
///
/// assert!(and_then(parse, is_short)("abc"));
/// ```
#[inline]
pub fn and_then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    compose(second, first)
}

/// Alias of [`and_then`].
#[inline]
pub fn forward_compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    and_then(first, second)
}

/// Composes a unary function after a zero-argument supplier.
///
/// The supplier is invoked anew on every call of the returned function.
///
/// # Examples
///
/// ```
/// use kleisli::compose::compose_supplier;
///
/// let answer = compose_supplier(|x: i32| x * 2, || 21);
/// assert_eq!(answer(), 42);
/// ```
#[inline]
pub fn compose_supplier<B, C, F, G>(outer: G, supplier: F) -> impl Fn() -> C
where
    F: Fn() -> B,
    G: Fn(B) -> C,
{
    move || outer(supplier())
}

/// Feeds the output of a zero-argument supplier into `next`.
#[inline]
pub fn and_then_supplier<B, C, F, G>(supplier: F, next: G) -> impl Fn() -> C
where
    F: Fn() -> B,
    G: Fn(B) -> C,
{
    compose_supplier(next, supplier)
}

/// Method syntax for composition on any unary function.
///
/// # Examples
///
/// ```
/// use kleisli::compose::FunctionExt;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(double.compose(add_one)(3), 8);
/// assert_eq!(add_one.and_then(double)(3), 8);
/// ```
pub trait FunctionExt<A, B>: Fn(A) -> B + Sized {
    /// Returns a function that runs `inner` first and then `self`.
    fn compose<Z, F>(self, inner: F) -> impl Fn(Z) -> B
    where
        F: Fn(Z) -> A,
    {
        compose(self, inner)
    }

    /// Returns a function that runs `self` first and then `next`.
    fn and_then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        and_then(self, next)
    }
}

impl<A, B, F> FunctionExt<A, B> for F where F: Fn(A) -> B {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    fn inner_function_runs_before_outer() {
        let calls = RefCell::new(Vec::new());
        let inner = |x: i32| {
            calls.borrow_mut().push("inner");
            x
        };
        let outer = |x: i32| {
            calls.borrow_mut().push("outer");
            x
        };

        compose(outer, inner)(0);
        assert_eq!(*calls.borrow(), vec!["inner", "outer"]);
    }

    #[rstest]
    fn and_then_runs_left_operand_first() {
        let calls = RefCell::new(Vec::new());
        let first = |x: i32| {
            calls.borrow_mut().push("first");
            x
        };
        let second = |x: i32| {
            calls.borrow_mut().push("second");
            x
        };

        and_then(first, second)(0);
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    fn supplier_is_invoked_on_every_call() {
        let counter = RefCell::new(0);
        let supplier = || {
            *counter.borrow_mut() += 1;
            *counter.borrow()
        };
        let composed = compose_supplier(|x: i32| x * 10, supplier);

        assert_eq!(composed(), 10);
        assert_eq!(composed(), 20);
    }
}

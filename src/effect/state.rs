//! State Monad - stateful computation.
//!
//! A `State<S, T>` wraps a function `S -> (S, T)`: given the current state it
//! returns the next state together with a produced value. The input state is
//! never mutated in place; every run hands back a fresh pair.
//!
//! # Note on Type Classes
//!
//! State provides `map`, `flat_map`, `zip2`, ... directly on the type rather
//! than implementing `Functor`/`Monad`, because the `Rc<dyn Fn>` it wraps
//! requires `'static` bounds the type class traits do not carry.
//!
//! # Laws
//!
//! - Functor identity: `state.map(|x| x) == state`
//! - Left identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right identity: `m.flat_map(State::pure) == m`
//! - Threading: in `m.flat_map(f)`, `f(..)` runs against the state `m`
//!   produced, never against the original input.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::State;
//!
//! fn tick() -> State<u32, u32> {
//!     State::new(|count| (count + 1, count))
//! }
//!
//! let (final_count, seen) = tick().zip3(tick(), tick()).run(0);
//! assert_eq!(final_count, 3);
//! assert_eq!(seen, (0, 1, 2));
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A computation that threads a state `S` and produces a value `T`.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `T`: The produced value type
pub struct State<S, T>
where
    S: 'static,
    T: 'static,
{
    /// Shared so that cloning a State does not clone the closure.
    run_function: Rc<dyn Fn(S) -> (S, T)>,
}

impl<S, T> State<S, T>
where
    S: 'static,
    T: 'static,
{
    /// Creates a State from a transition `state -> (next_state, value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|s| (s + 1, s));
    /// assert_eq!(step.run(0), (1, 0));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (S, T) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning `(final_state, value)`.
    pub fn run(&self, initial_state: S) -> (S, T) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the value.
    pub fn eval(&self, initial_state: S) -> T {
        let (_, value) = self.run(initial_state);
        value
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        let (final_state, _) = self.run(initial_state);
        final_state
    }

    /// Produces `value` and leaves the state unchanged.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |state| (state, value.clone()))
    }

    /// Transforms the produced value; the state passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|s| (s + 1, s));
    /// assert_eq!(step.map(|value| value.to_string()).run(7), (8, "7".to_string()));
    /// ```
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (next_state, value) = (original_function)(state);
            (next_state, function(value))
        })
    }

    /// Chains a computation that depends on the produced value.
    ///
    /// The second computation starts from the state the first one produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|s| (s + 1, s));
    /// let twice = step.clone().flat_map(move |first| step.clone().map(move |second| (first, second)));
    /// assert_eq!(twice.run(0), (2, (0, 1)));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(T) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (intermediate_state, value) = (original_function)(state);
            function(value).run(intermediate_state)
        })
    }

    /// Runs both computations, left to right, and pairs their values.
    pub fn zip2<B>(self, other: State<S, B>) -> State<S, (T, B)>
    where
        B: 'static,
    {
        let first_function = self.run_function;
        let second_function = other.run_function;
        State::new(move |state| {
            let (intermediate_state, first) = (first_function)(state);
            let (final_state, second) = (second_function)(intermediate_state);
            (final_state, (first, second))
        })
    }

    /// Runs three computations, left to right, and collects their values.
    pub fn zip3<B, D>(self, second: State<S, B>, third: State<S, D>) -> State<S, (T, B, D)>
    where
        B: 'static,
        D: 'static,
    {
        self.zip2(second)
            .zip2(third)
            .map(|((first, second), third)| (first, second, third))
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Leaves the state unchanged and also returns it as the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// assert_eq!(State::<i32, i32>::identity().run(5), (5, 5));
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Applies a pure transformation to the state; the value is `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let double = State::modify(|s: i32| s * 2);
    /// assert_eq!(double.exec(21), 42);
    /// ```
    pub fn modify<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| (function(state), ()))
    }

    /// Replaces the state with `state`, whatever it was.
    pub fn put(state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| (state.clone(), ()))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, T> Clone for State<S, T>
where
    S: 'static,
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<S, T> std::fmt::Display for State<S, T>
where
    S: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn counter() -> State<i32, i32> {
        State::new(|s| (s + 1, s))
    }

    #[rstest]
    fn test_display_state() {
        assert_eq!(format!("{}", counter()), "<State>");
    }

    #[rstest]
    fn counter_runs_from_zero() {
        assert_eq!(counter().run(0), (1, 0));
    }

    #[rstest]
    fn flat_map_threads_the_updated_state() {
        let chained = counter().flat_map(|first| counter().map(move |second| (first, second)));
        assert_eq!(chained.run(0), (2, (0, 1)));
    }

    #[rstest]
    fn pure_leaves_state_untouched() {
        assert_eq!(State::<&str, u8>::pure(9).run("kept"), ("kept", 9));
    }

    #[rstest]
    fn put_then_identity_observes_new_state() {
        let computation = State::put(100).flat_map(|()| State::identity());
        assert_eq!(computation.run(1), (100, 100));
    }

    #[rstest]
    fn eval_and_exec_split_the_pair() {
        assert_eq!(counter().eval(4), 4);
        assert_eq!(counter().exec(4), 5);
    }

    #[rstest]
    fn state_clone_works() {
        let state = counter();
        let cloned = state.clone();
        assert_eq!(state.run(10), cloned.run(10));
    }
}

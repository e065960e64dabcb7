//! Deferred computations over a context or a state.
//!
//! - [`Reader`]: a computation that needs a context `C` to produce an `R`
//! - [`State`]: a computation that turns a state `S` into `(S, T)`
//!
//! Both are immutable wrappers around a shared closure: combinators such as
//! `map` and `flat_map` never run anything, they build a new closure that
//! delegates to the originals once [`Reader::read`] or [`State::run`] is
//! called.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::{Reader, State};
//!
//! let scaled: Reader<i32, i32> = Reader::ask().map(|context: i32| context * 10);
//! assert_eq!(scaled.read(4), 40);
//!
//! let push = |item: &'static str| State::modify(move |mut stack: Vec<&'static str>| {
//!     stack.push(item);
//!     stack
//! });
//! let stack = push("a").flat_map(move |()| push("b")).exec(Vec::new());
//! assert_eq!(stack, vec!["a", "b"]);
//! ```

mod reader;
mod state;

pub use reader::Reader;
pub use state::State;

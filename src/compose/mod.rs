//! Function composition utilities.
//!
//! This module builds new functions out of two existing ones. Every combinator
//! is pure sugar: no state is kept between calls and the only side effects are
//! those of the composed functions themselves.
//!
//! # Overview
//!
//! - [`compose`]: `compose(g, f)(x) = g(f(x))`, mathematical (right-to-left) order
//! - [`and_then`] / [`forward_compose`]: `and_then(f, g)(x) = g(f(x))`, data-flow order
//! - [`compose_supplier`] / [`and_then_supplier`]: the same for zero-argument functions
//! - [`FunctionExt`]: method syntax for the above on any `Fn(A) -> B`
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function
//! - [`constant`]: A function that always returns the same value
//!
//! # Evaluation Order
//!
//! Whichever spelling is used, the function that receives the original input
//! runs first and its output is what the other function reads:
//!
//! ```
//! use kleisli::compose::{and_then, compose};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose(double, add_one)(3), 8);
//! assert_eq!(and_then(add_one, double)(3), 8);
//! ```

mod combinators;
mod utils;

pub use combinators::{
    FunctionExt, and_then, and_then_supplier, compose, compose_supplier, forward_compose,
};
pub use utils::{constant, identity};

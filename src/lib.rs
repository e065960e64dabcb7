//! # kleisli
//!
//! Monadic containers, a probability monad and function composition
//! combinators for Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor` and `Monad` over a GAT-based type constructor
//! - **Function Composition**: `compose`, `and_then`, `forward_compose`
//! - **Control Structures**: `Maybe`, `Either` with side-scoped projections
//! - **Effects**: `Reader` and `State` computations
//! - **Probability**: `Distribution`, a lazily sampled probability monad
//! - **Collections**: head/tail views and pair projections
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad)
//! - `compose`: Function composition utilities
//! - `control`: `Maybe` and `Either`
//! - `effect`: `Reader` and `State`
//! - `probability`: `Distribution` and `RandomSource`
//! - `collections`: Slice and pair helpers
//! - `serde`: Serialization for `Maybe` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::prelude::*;
//!
//! let total = Maybe::present(3)
//!     .zip2(Maybe::present(5))
//!     .map(|(first, second)| first + second);
//! assert_eq!(total, Maybe::Present(8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "probability")]
    pub use crate::probability::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "probability")]
pub mod probability;

#[cfg(feature = "collections")]
pub mod collections;

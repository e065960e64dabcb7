//! Type classes for the containers of this crate.
//!
//! Rust has no higher-kinded types, so the type classes are expressed
//! through [`TypeConstructor`], a Generic Associated Type that names "the same
//! container holding a different type".
//!
//! - [`Functor`]: map a function over the contained value
//! - [`Monad`]: lift a value and sequence dependent computations
//!
//! `Maybe`, `ErrorProjection` and `ValueProjection` implement every trait here.
//! `Reader`, `State` and `Distribution` wrap `Rc<dyn Fn>` closures, which need
//! `'static` bounds these traits do not carry; they expose the same operations
//! as inherent methods instead.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Maybe;
//! use kleisli::typeclass::{Functor, Monad};
//!
//! fn double_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|value| value * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::present(21)), Maybe::present(42));
//! assert_eq!(<Maybe<i32>>::pure(1), Maybe::present(1));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

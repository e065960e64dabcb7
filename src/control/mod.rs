//! Control structures: optional values and two-sided results.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: exactly one of an error or a value
//! - [`ValueProjection`] / [`ErrorProjection`]: views that scope `map`,
//!   `flat_map` and `zip` to one side of an `Either`
//! - [`either`]: run a closure, capturing a panic as `Either::Error`
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use kleisli::control::Maybe;
//!
//! let width: Maybe<u32> = Maybe::present(4);
//! let height: Maybe<u32> = Maybe::absent();
//!
//! let area = width.zip2(height).map(|(w, h)| w * h);
//! assert_eq!(area.with_default(0), 0);
//! ```
//!
//! ## Choosing a Side
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! let outcome: Either<String, u32> = Either::error("timeout".to_string());
//!
//! // The value projection leaves the error alone...
//! let still_failed = outcome.clone().into_value_projection().map(|n| n + 1).into_either();
//! assert_eq!(still_failed, outcome);
//!
//! // ...while the error projection rewrites it.
//! let shouted = outcome.into_error_projection().map(|e| e.to_uppercase()).into_either();
//! assert_eq!(shouted, Either::error("TIMEOUT".to_string()));
//! ```

mod either;
mod maybe;
mod panic;
mod projection;

pub use either::{Either, either, try_either};
pub use maybe::Maybe;
pub use panic::Panic;
pub use projection::{ErrorProjection, ValueProjection};

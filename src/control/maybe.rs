//! Maybe type - an optional value.
//!
//! `Maybe<T>` is either `Present(value)` or `Absent`. It mirrors
//! [`Option`] and converts to and from it freely, but carries the operations
//! of this crate (`fold`, `zip2`, `zip3`, `with_default`) and implements the
//! [`Functor`] and [`Monad`] type classes.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Maybe;
//!
//! let port: Maybe<u16> = Some(8080).into();
//! let host: Maybe<&str> = Maybe::present("localhost");
//!
//! let address = host
//!     .zip2(port)
//!     .map(|(host, port)| format!("{host}:{port}"))
//!     .with_default("unknown".to_string());
//! assert_eq!(address, "localhost:8080");
//! ```

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// An optional value: `Present(T)` or `Absent`.
///
/// Every operation is total. Functions passed to `map`, `flat_map` and
/// `fold`'s presence branch are never invoked on `Absent`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// Wraps a value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The empty `Maybe`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Transforms the contained value, propagating `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(2).map(|x| x * 10), Maybe::present(20));
    /// assert_eq!(Maybe::<i32>::absent().map(|x| x * 10), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let parse = |text: &str| text.parse::<i32>().ok().into();
    /// assert_eq!(Maybe::present("12").flat_map(parse), Maybe::present(12));
    /// assert_eq!(Maybe::present("twelve").flat_map(parse), Maybe::absent());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Eliminates the container by handling both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::present(3)), "got 3");
    /// assert_eq!(describe(Maybe::absent()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_present: F, on_absent: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Pairs two values when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(3).zip2(Maybe::present(5)), Maybe::present((3, 5)));
    /// assert_eq!(Maybe::<i32>::absent().zip2(Maybe::present(5)), Maybe::absent());
    /// ```
    #[inline]
    pub fn zip2<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.flat_map(|first| other.map(|second| (first, second)))
    }

    /// Triples three values when all are present.
    #[inline]
    pub fn zip3<U, W>(self, second: Maybe<U>, third: Maybe<W>) -> Maybe<(T, U, W)> {
        self.flat_map(|first| {
            second.flat_map(|second| third.map(|third| (first, second, third)))
        })
    }

    /// Returns the contained value, or `default` when absent.
    #[inline]
    pub fn with_default(self, default: T) -> T {
        self.fold(|value| value, || default)
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Iterates over the zero or one contained value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Classes
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

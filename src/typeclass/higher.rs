//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! A type class such as `Functor` needs to talk about `Maybe<_>` as a type
//! constructor rather than about one concrete `Maybe<i32>`. [`TypeConstructor`]
//! provides that by exposing the inner type and a GAT that re-applies the
//! constructor to another type.

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is `F` itself.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Maybe;
/// use kleisli::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

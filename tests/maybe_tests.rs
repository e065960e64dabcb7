#![cfg(feature = "control")]
//! Integration tests for Maybe.

use kleisli::control::Maybe;
use kleisli::typeclass::{Functor, Monad};
use rstest::rstest;

// =============================================================================
// Construction and Queries
// =============================================================================

#[rstest]
fn test_present_and_absent_queries() {
    assert!(Maybe::present(1).is_present());
    assert!(Maybe::<i32>::absent().is_absent());
    assert_eq!(Maybe::<i32>::default(), Maybe::Absent);
}

#[rstest]
#[case(Some(3), Maybe::Present(3))]
#[case(None, Maybe::Absent)]
fn test_option_conversions(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
    let maybe: Maybe<i32> = option.into();
    assert_eq!(maybe, expected);
    assert_eq!(maybe.into_option(), option);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_map_reaches_present_values_only() {
    assert_eq!(Maybe::present(2).map(|n| n * 3), Maybe::Present(6));
    assert_eq!(Maybe::<i32>::absent().map(|n| n * 3), Maybe::Absent);
}

#[rstest]
fn test_flat_map_chains_partial_functions() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            Maybe::present(n / 2)
        } else {
            Maybe::absent()
        }
    };
    assert_eq!(Maybe::present(8).flat_map(halve).flat_map(halve), Maybe::Present(2));
    assert_eq!(Maybe::present(6).flat_map(halve).flat_map(halve), Maybe::Absent);
}

#[rstest]
#[case(Maybe::Present(1), Maybe::Present("a"), Maybe::Present(true), Maybe::Present((1, "a", true)))]
#[case(Maybe::Absent, Maybe::Present("a"), Maybe::Present(true), Maybe::Absent)]
#[case(Maybe::Present(1), Maybe::Absent, Maybe::Present(true), Maybe::Absent)]
#[case(Maybe::Present(1), Maybe::Present("a"), Maybe::Absent, Maybe::Absent)]
fn test_zip3_needs_every_value(
    #[case] first: Maybe<i32>,
    #[case] second: Maybe<&'static str>,
    #[case] third: Maybe<bool>,
    #[case] expected: Maybe<(i32, &'static str, bool)>,
) {
    assert_eq!(first.zip3(second, third), expected);
}

#[rstest]
fn test_fold_and_with_default() {
    assert_eq!(Maybe::present(4).fold(|n| n + 1, || 0), 5);
    assert_eq!(Maybe::<i32>::absent().fold(|n| n + 1, || 0), 0);
    assert_eq!(Maybe::<i32>::absent().with_default(9), 9);
}

#[rstest]
fn test_iteration_yields_zero_or_one_item() {
    let values: Vec<i32> = [Maybe::present(1), Maybe::absent(), Maybe::present(3)]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(values, vec![1, 3]);
    assert_eq!(Maybe::present('x').iter().count(), 1);
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[rstest]
fn test_functor_and_monad_instances() {
    let mapped = Maybe::present(2).fmap(|n| n + 1);
    assert_eq!(mapped, Maybe::Present(3));

    let chained = <Maybe<i32> as Monad>::flat_map(Maybe::present(2), |n| Maybe::present(n * 5));
    assert_eq!(chained, Maybe::Present(10));
    assert_eq!(<Maybe<i32> as Monad>::pure(7u8), Maybe::Present(7u8));
}

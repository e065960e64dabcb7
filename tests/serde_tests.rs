#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support.

use kleisli::control::{Either, Maybe};
use rstest::rstest;

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<i32> = Maybe::Present(5);
    let absent: Maybe<i32> = Maybe::Absent;

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    assert_eq!(present_json, r#"{"Present":5}"#);
    assert_eq!(absent_json, r#""Absent""#);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&present_json).unwrap(), present);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&absent_json).unwrap(), absent);
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let error: Either<String, i32> = Either::Error("error".to_string());
    let value: Either<String, i32> = Either::Value(42);

    let error_json = serde_json::to_string(&error).unwrap();
    let value_json = serde_json::to_string(&value).unwrap();

    assert_eq!(error_json, r#"{"Error":"error"}"#);
    assert_eq!(value_json, r#"{"Value":42}"#);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&error_json).unwrap(), error);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&value_json).unwrap(), value);
}

#[rstest]
fn test_unknown_variant_is_rejected() {
    assert!(serde_json::from_str::<Either<String, i32>>(r#"{"Left":1}"#).is_err());
}

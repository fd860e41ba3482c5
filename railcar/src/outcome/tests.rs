//! Unit tests for the synchronous [`Outcome`] container.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use serde_json::{Value, json};

use super::Outcome;

type Fallible = Outcome<i32, String>;

fn ok(value: i32) -> Fallible {
    Outcome::Ok(value)
}

fn err(error: &str) -> Fallible {
    Outcome::Err(error.to_owned())
}

#[rstest]
#[case(json!(1))]
#[case(json!("raw"))]
#[case(json!(false))]
#[case(Value::Null)]
fn success_is_fixed_by_construction(#[case] value: Value) {
    let outcome = Outcome::<Value, String>::Ok(value);
    assert!(outcome.is_ok());
    assert!(!outcome.is_err());
}

#[test]
fn failure_reports_the_error_channel() {
    let outcome = err("broken");
    assert!(outcome.is_err());
    assert!(!outcome.is_ok());
}

#[test]
fn channel_predicates_apply_only_to_their_variant() {
    assert!(ok(2).is_ok_and(|n| n > 1));
    assert!(!err("broken").is_ok_and(|_| true));
    assert!(err("broken").is_err_and(|e| e == "broken"));
    assert!(!ok(2).is_err_and(|_| true));
}

#[test]
fn and_then_short_circuits_and_moves_the_error_through() {
    let called = Rc::new(Cell::new(false));
    let witness = Rc::clone(&called);
    let propagated = err("original").and_then(move |n| {
        witness.set(true);
        ok(n)
    });
    assert!(!called.get());
    assert_eq!(propagated.unwrap_err(), "original");

    assert_eq!(ok(2).and_then(|n| ok(n * 3)).unwrap(), 6);
}

#[test]
fn and_returns_other_only_on_success() {
    assert_eq!(ok(1).and(ok(2)).unwrap(), 2);
    assert_eq!(err("broken").and(ok(2)).unwrap_err(), "broken");
}

#[test]
fn or_short_circuits_on_success_even_across_error_types() {
    let kept: Outcome<i32, u8> = ok(1).or(Outcome::Err(7));
    assert_eq!(kept.unwrap(), 1);

    let adopted: Outcome<i32, u8> = err("broken").or(Outcome::Err(7));
    assert_eq!(adopted.unwrap_err(), 7);
}

#[test]
fn or_else_receives_the_error_and_may_recover() {
    let recovered: Outcome<i32, u8> = err("broken").or_else(|e| {
        assert_eq!(e, "broken");
        Outcome::Ok(0)
    });
    assert_eq!(recovered.unwrap(), 0);

    let called = Rc::new(Cell::new(false));
    let witness = Rc::clone(&called);
    let kept: Outcome<i32, u8> = ok(1).or_else(move |_| {
        witness.set(true);
        Outcome::Err(7)
    });
    assert_eq!(kept.unwrap(), 1);
    assert!(!called.get());
}

#[test]
fn map_composes_like_a_functor() {
    let f = |n: i32| n + 1;
    let g = |n: i32| n * 2;
    let stepwise = ok(3).map(f).map(g);
    let fused = ok(3).map(|n| g(f(n)));
    assert_eq!(stepwise.unwrap(), fused.unwrap());
}

#[test]
fn map_err_transforms_only_the_error_channel() {
    assert_eq!(err("broken").map_err(|e| e.len()).unwrap_err(), 6);
    assert_eq!(ok(1).map_err(|e| e.len()).unwrap(), 1);
}

#[test]
fn map_or_else_computes_the_default_from_the_error() {
    assert_eq!(ok(2).map_or(0, |n| n * 10), 20);
    assert_eq!(err("broken").map_or(0, |n| n * 10), 0);
    assert_eq!(err("ab").map_or_else(|e| e.len() as i32, |n| n * 10), 2);
}

#[test]
fn expect_returns_the_success_value() {
    assert_eq!(ok(1).expect("should be ok"), 1);
    assert_eq!(err("broken").expect_err("should be err"), "broken");
}

#[test]
#[should_panic(expected = "config load must succeed")]
fn expect_panics_with_the_caller_message() {
    err("broken").expect("config load must succeed");
}

#[test]
#[should_panic(expected = "wanted the failure")]
fn expect_err_panics_on_success() {
    ok(1).expect_err("wanted the failure");
}

#[test]
#[should_panic(expected = "Tried to unwrap Err")]
fn unwrap_panics_with_the_fixed_message() {
    err("broken").unwrap();
}

#[test]
#[should_panic(expected = "Tried to unwrap Ok")]
fn unwrap_err_panics_with_the_fixed_message() {
    ok(1).unwrap_err();
}

#[test]
fn unwrap_or_variants_fall_back_on_failure() {
    assert_eq!(ok(1).unwrap_or(9), 1);
    assert_eq!(err("broken").unwrap_or(9), 9);
    assert_eq!(err("ab").unwrap_or_else(|e| e.len() as i32), 2);
}

#[test]
fn inspect_observes_the_matching_channel_only() {
    let seen = Rc::new(Cell::new(0));
    let witness = Rc::clone(&seen);
    let kept = ok(5).inspect(move |n| witness.set(*n));
    assert_eq!(seen.get(), 5);
    assert_eq!(kept.unwrap(), 5);

    let errors = Rc::new(Cell::new(0));
    let witness = Rc::clone(&errors);
    let kept = err("broken").inspect_err(move |e| witness.set(e.len()));
    assert_eq!(errors.get(), 6);
    assert_eq!(kept.unwrap_err(), "broken");
}

#[test]
fn exactly_one_projection_is_present() {
    assert_eq!(ok(1).ok().unwrap(), 1);
    assert!(ok(1).err().is_none());
    assert_eq!(err("broken").err().unwrap(), "broken");
    assert!(err("broken").ok().is_none());
}

#[test]
fn describe_renders_both_channels() {
    assert_eq!(ok(1).describe(), "Ok(1)");
    assert_eq!(err("broken").describe(), "Err(\"broken\")");
}

//! Unit tests for the asynchronous [`AsyncMaybe`] wrapper.

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;

use super::{AsyncMaybe, Maybe};

#[tokio::test]
async fn construction_defers_all_work_until_awaited() {
    let ran = Rc::new(Cell::new(false));
    let witness = Rc::clone(&ran);
    let chain = Maybe::Some(1).into_async().map(move |n| {
        witness.set(true);
        n
    });
    assert!(!ran.get());
    assert_eq!(chain.await.unwrap(), 1);
    assert!(ran.get());
}

#[tokio::test]
async fn and_then_normalizes_every_step_shape() {
    let from_container = Maybe::Some(1)
        .into_async()
        .and_then(|n| Maybe::Some(n + 1))
        .await;
    let from_wrapper = Maybe::Some(1)
        .into_async()
        .and_then(|n| AsyncMaybe::new(Maybe::Some(n + 1)))
        .await;
    let from_pending = Maybe::Some(1)
        .into_async()
        .and_then(|n| async move { Maybe::Some(n + 1) }.boxed_local())
        .await;
    for settled in [from_container, from_wrapper, from_pending] {
        assert_eq!(settled.unwrap(), 2);
    }
}

#[tokio::test]
async fn and_then_propagates_none_without_running_the_step() {
    let called = Rc::new(Cell::new(false));
    let witness = Rc::clone(&called);
    let settled = Maybe::<i32>::None
        .into_async()
        .and_then(move |n| {
            witness.set(true);
            Maybe::Some(n)
        })
        .await;
    assert!(settled.is_none());
    assert!(!called.get());
}

#[tokio::test]
async fn or_keeps_a_present_settlement() {
    let settled = Maybe::Some(1).into_async().or(Maybe::Some(2)).await;
    assert_eq!(settled.unwrap(), 1);
}

#[tokio::test]
async fn or_adopts_the_fallback_on_none() {
    let plain = Maybe::<i32>::None.into_async().or(Maybe::Some(2)).await;
    assert_eq!(plain.unwrap(), 2);

    let wrapped = Maybe::<i32>::None
        .into_async()
        .or(AsyncMaybe::new(Maybe::Some(3)))
        .await;
    assert_eq!(wrapped.unwrap(), 3);
}

#[tokio::test]
async fn or_else_runs_only_on_none() {
    let called = Rc::new(Cell::new(false));
    let witness = Rc::clone(&called);
    let kept = Maybe::Some(1)
        .into_async()
        .or_else(move || {
            witness.set(true);
            Maybe::Some(2)
        })
        .await;
    assert_eq!(kept.unwrap(), 1);
    assert!(!called.get());

    let adopted = Maybe::<i32>::None
        .into_async()
        .or_else(|| async { Maybe::Some(4) }.boxed_local())
        .await;
    assert_eq!(adopted.unwrap(), 4);
}

#[tokio::test]
async fn map_matches_its_synchronous_counterpart() {
    let sync = Maybe::Some(2).map(|n| n * 10);
    let settled = Maybe::Some(2).into_async().map(|n| n * 10).await;
    assert_eq!(settled.unwrap(), sync.unwrap());

    assert!(Maybe::<i32>::None.into_async().map(|n| n * 10).await.is_none());
}

#[tokio::test]
async fn map_async_awaits_the_mapped_value_before_rewrapping() {
    let settled = Maybe::Some(20)
        .into_async()
        .map_async(|n| async move { n + 1 })
        .await;
    assert_eq!(settled.unwrap(), 21);
}

#[tokio::test]
async fn ok_or_converts_the_settled_container() {
    let ok = Maybe::Some(1).into_async().ok_or("gone").await;
    assert_eq!(ok.unwrap(), 1);

    let err = Maybe::<i32>::None.into_async().ok_or("gone").await;
    assert_eq!(err.unwrap_err(), "gone");
}

#[tokio::test]
async fn ok_or_else_runs_only_when_the_settlement_is_none() {
    let called = Rc::new(Cell::new(false));
    let witness = Rc::clone(&called);
    let ok = Maybe::Some(1)
        .into_async()
        .ok_or_else(move || {
            witness.set(true);
            "gone"
        })
        .await;
    assert_eq!(ok.unwrap(), 1);
    assert!(!called.get());
}

#[tokio::test]
async fn settlement_is_memoized_across_clones() {
    let runs = Rc::new(Cell::new(0));
    let witness = Rc::clone(&runs);
    let chain = Maybe::Some(1).into_async().and_then(move |n| {
        witness.set(witness.get() + 1);
        Maybe::Some(n + 1)
    });
    let twin = chain.clone();

    let first = chain.await;
    let second = twin.await;
    assert_eq!(first.unwrap(), 2);
    assert_eq!(second.unwrap(), 2);
    assert_eq!(runs.get(), 1);
}

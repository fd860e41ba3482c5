//! Asynchronous counterpart of [`Maybe`]: a pending computation that settles
//! to a container.
//!
//! An [`AsyncMaybe`] owns exactly one pending computation. Combinators return
//! a new wrapper immediately and defer all work; awaiting is the only way to
//! force settlement. The handle is backed by [`futures::future::Shared`], so
//! clones of a wrapper observe the same settlement: the settling step runs
//! once and later awaits yield clones of the resolved container.
//!
//! Chained steps may produce their continuation in three shapes: a plain
//! [`Maybe`], another [`AsyncMaybe`], or a boxed pending computation. The
//! [`IntoAsyncMaybe`] trait normalizes all three to one pending-computation
//! form before the chain continues; this is an explicit per-shape conversion,
//! not duck typing.

use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use crate::maybe::Maybe;
use crate::outcome::AsyncOutcome;

/// A pending computation resolving to a [`Maybe`].
///
/// `T: Clone` is required by the shared settlement memo: once settled, every
/// awaiter receives its own clone of the resolved container.
///
/// # Examples
///
/// ```
/// use railcar::Maybe;
///
/// # futures::executor::block_on(async {
/// let found = Maybe::Some(2)
///     .into_async()
///     .and_then(|n| Maybe::Some(n * 10))
///     .map_async(|n| async move { n + 2 })
///     .await;
/// assert_eq!(found.unwrap(), 22);
/// # });
/// ```
#[derive(Clone)]
pub struct AsyncMaybe<T> {
    pending: Shared<LocalBoxFuture<'static, Maybe<T>>>,
}

/// Conversion of the accepted chain-step return shapes into the single
/// pending-computation form the chain runs on.
pub trait IntoAsyncMaybe<T> {
    /// Normalizes `self` into a boxed pending computation of a container.
    fn into_pending(self) -> LocalBoxFuture<'static, Maybe<T>>;
}

impl<T: 'static> IntoAsyncMaybe<T> for Maybe<T> {
    fn into_pending(self) -> LocalBoxFuture<'static, Maybe<T>> {
        std::future::ready(self).boxed_local()
    }
}

impl<T: Clone + 'static> IntoAsyncMaybe<T> for AsyncMaybe<T> {
    fn into_pending(self) -> LocalBoxFuture<'static, Maybe<T>> {
        self.pending.boxed_local()
    }
}

impl<T: 'static> IntoAsyncMaybe<T> for LocalBoxFuture<'static, Maybe<T>> {
    fn into_pending(self) -> LocalBoxFuture<'static, Maybe<T>> {
        self
    }
}

impl<T: Clone + 'static> AsyncMaybe<T> {
    /// Wraps an already-settled container.
    #[must_use]
    pub fn new(maybe: Maybe<T>) -> Self {
        Self::from_future(std::future::ready(maybe))
    }

    /// Wraps a pending computation of a container.
    #[must_use]
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Maybe<T>> + 'static,
    {
        Self {
            pending: future.boxed_local().shared(),
        }
    }

    /// On settlement, chains `f` over a present value; `None` propagates
    /// without invoking `f`. `f` may return any [`IntoAsyncMaybe`] shape.
    #[must_use]
    pub fn and_then<U, R, F>(self, f: F) -> AsyncMaybe<U>
    where
        U: Clone + 'static,
        R: IntoAsyncMaybe<U> + 'static,
        F: FnOnce(T) -> R + 'static,
    {
        AsyncMaybe::from_future(async move {
            match self.pending.await {
                Maybe::Some(value) => f(value).into_pending().await,
                Maybe::None => Maybe::None,
            }
        })
    }

    /// On settlement, keeps a present value and otherwise adopts `other`.
    #[must_use]
    pub fn or<R>(self, other: R) -> Self
    where
        R: IntoAsyncMaybe<T> + 'static,
    {
        self.or_else(move || other)
    }

    /// On settlement, keeps a present value and otherwise adopts the fallback
    /// computed by `f`.
    #[must_use]
    pub fn or_else<R, F>(self, f: F) -> Self
    where
        R: IntoAsyncMaybe<T> + 'static,
        F: FnOnce() -> R + 'static,
    {
        Self::from_future(async move {
            match self.pending.await {
                Maybe::Some(value) => Maybe::Some(value),
                Maybe::None => f().into_pending().await,
            }
        })
    }

    /// On settlement, transforms a present value; `None` propagates.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> AsyncMaybe<U>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> U + 'static,
    {
        AsyncMaybe::from_future(async move { self.pending.await.map(f) })
    }

    /// As [`AsyncMaybe::map`], for mappers whose result is itself pending.
    /// The mapped future is awaited before rewrapping as `Some`.
    #[must_use]
    pub fn map_async<U, Fut, F>(self, f: F) -> AsyncMaybe<U>
    where
        U: Clone + 'static,
        Fut: Future<Output = U> + 'static,
        F: FnOnce(T) -> Fut + 'static,
    {
        AsyncMaybe::from_future(async move {
            match self.pending.await {
                Maybe::Some(value) => Maybe::Some(f(value).await),
                Maybe::None => Maybe::None,
            }
        })
    }

    /// Produces an asynchronous outcome whose settlement converts `Some(v)`
    /// to `Ok(v)` and `None` to `Err(error)`.
    #[must_use]
    pub fn ok_or<E>(self, error: E) -> AsyncOutcome<T, E>
    where
        E: Clone + 'static,
    {
        AsyncOutcome::from_future(async move { self.pending.await.ok_or(error) })
    }

    /// As [`AsyncMaybe::ok_or`]; `f` runs only when the settled container is
    /// `None`.
    #[must_use]
    pub fn ok_or_else<E, F>(self, f: F) -> AsyncOutcome<T, E>
    where
        E: Clone + 'static,
        F: FnOnce() -> E + 'static,
    {
        AsyncOutcome::from_future(async move { self.pending.await.ok_or_else(f) })
    }
}

impl<T: Clone + 'static> IntoFuture for AsyncMaybe<T> {
    type Output = Maybe<T>;
    type IntoFuture = Shared<LocalBoxFuture<'static, Maybe<T>>>;

    fn into_future(self) -> Self::IntoFuture {
        self.pending
    }
}

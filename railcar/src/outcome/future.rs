//! Asynchronous counterpart of [`Outcome`]: a pending computation that
//! settles to a success or a failure.
//!
//! Mirrors [`AsyncMaybe`](crate::maybe::AsyncMaybe) over the success/error
//! channels. Settlement is memoized through [`futures::future::Shared`], and
//! chain-step returns are normalized through [`IntoAsyncOutcome`].

use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use crate::maybe::AsyncMaybe;
use crate::outcome::Outcome;

/// A pending computation resolving to an [`Outcome`].
///
/// `T: Clone` and `E: Clone` are required by the shared settlement memo.
#[derive(Clone)]
pub struct AsyncOutcome<T, E> {
    pending: Shared<LocalBoxFuture<'static, Outcome<T, E>>>,
}

/// Conversion of the accepted chain-step return shapes (a plain [`Outcome`],
/// an [`AsyncOutcome`], or a boxed pending computation) into the single form
/// the chain runs on.
pub trait IntoAsyncOutcome<T, E> {
    /// Normalizes `self` into a boxed pending computation of a container.
    fn into_pending(self) -> LocalBoxFuture<'static, Outcome<T, E>>;
}

impl<T: 'static, E: 'static> IntoAsyncOutcome<T, E> for Outcome<T, E> {
    fn into_pending(self) -> LocalBoxFuture<'static, Outcome<T, E>> {
        std::future::ready(self).boxed_local()
    }
}

impl<T: Clone + 'static, E: Clone + 'static> IntoAsyncOutcome<T, E> for AsyncOutcome<T, E> {
    fn into_pending(self) -> LocalBoxFuture<'static, Outcome<T, E>> {
        self.pending.boxed_local()
    }
}

impl<T: 'static, E: 'static> IntoAsyncOutcome<T, E> for LocalBoxFuture<'static, Outcome<T, E>> {
    fn into_pending(self) -> LocalBoxFuture<'static, Outcome<T, E>> {
        self
    }
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    /// Wraps an already-settled container.
    #[must_use]
    pub fn new(outcome: Outcome<T, E>) -> Self {
        Self::from_future(std::future::ready(outcome))
    }

    /// Wraps a pending computation of a container.
    #[must_use]
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<T, E>> + 'static,
    {
        Self {
            pending: future.boxed_local().shared(),
        }
    }

    /// On settlement, chains `f` over a success value; an error propagates
    /// unchanged without invoking `f`.
    #[must_use]
    pub fn and_then<U, R, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Clone + 'static,
        R: IntoAsyncOutcome<U, E> + 'static,
        F: FnOnce(T) -> R + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.pending.await {
                Outcome::Ok(value) => f(value).into_pending().await,
                Outcome::Err(error) => Outcome::Err(error),
            }
        })
    }

    /// On settlement, keeps a success value (rehomed under `other`'s error
    /// type) and otherwise adopts `other`.
    #[must_use]
    pub fn or<F2, R>(self, other: R) -> AsyncOutcome<T, F2>
    where
        F2: Clone + 'static,
        R: IntoAsyncOutcome<T, F2> + 'static,
    {
        self.or_else(move |_| other)
    }

    /// On settlement, keeps a success value and otherwise recovers from the
    /// error via `f`, which may pick a new error type.
    #[must_use]
    pub fn or_else<F2, R, F>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Clone + 'static,
        R: IntoAsyncOutcome<T, F2> + 'static,
        F: FnOnce(E) -> R + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.pending.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error) => f(error).into_pending().await,
            }
        })
    }

    /// On settlement, transforms the success channel; errors pass through.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> U + 'static,
    {
        AsyncOutcome::from_future(async move { self.pending.await.map(f) })
    }

    /// As [`AsyncOutcome::map`], for mappers whose result is itself pending.
    #[must_use]
    pub fn map_async<U, Fut, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Clone + 'static,
        Fut: Future<Output = U> + 'static,
        F: FnOnce(T) -> Fut + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.pending.await {
                Outcome::Ok(value) => Outcome::Ok(f(value).await),
                Outcome::Err(error) => Outcome::Err(error),
            }
        })
    }

    /// On settlement, transforms the error channel; successes pass through.
    #[must_use]
    pub fn map_err<F2, F>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Clone + 'static,
        F: FnOnce(E) -> F2 + 'static,
    {
        AsyncOutcome::from_future(async move { self.pending.await.map_err(f) })
    }

    /// As [`AsyncOutcome::map_err`], for mappers whose result is itself
    /// pending.
    #[must_use]
    pub fn map_err_async<F2, Fut, F>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Clone + 'static,
        Fut: Future<Output = F2> + 'static,
        F: FnOnce(E) -> Fut + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.pending.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error) => Outcome::Err(f(error).await),
            }
        })
    }

    /// Projects the success channel as an [`AsyncMaybe`].
    #[must_use]
    pub fn ok(self) -> AsyncMaybe<T> {
        AsyncMaybe::from_future(async move { self.pending.await.ok() })
    }

    /// Projects the error channel as an [`AsyncMaybe`].
    #[must_use]
    pub fn err(self) -> AsyncMaybe<E> {
        AsyncMaybe::from_future(async move { self.pending.await.err() })
    }
}

impl<T: Clone + 'static, E: Clone + 'static> IntoFuture for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;
    type IntoFuture = Shared<LocalBoxFuture<'static, Outcome<T, E>>>;

    fn into_future(self) -> Self::IntoFuture {
        self.pending
    }
}

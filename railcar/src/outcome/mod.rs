//! The [`Outcome`] container: explicit success or failure with a typed error.
//!
//! `Outcome<T, E>` mirrors [`Maybe`](crate::Maybe) with an error channel.
//! Exactly one variant holds at any time, the error is a single opaque value
//! the crate never inspects, and every combinator consumes `self` and returns
//! a fresh container. Short-circuiting operations move the untouched channel
//! through unchanged.

use std::fmt;

use crate::maybe::Maybe;

mod future;
pub use future::{AsyncOutcome, IntoAsyncOutcome};

#[cfg(test)]
mod tests;

/// A container holding either a success value (`Ok`) or an error (`Err`).
///
/// # Examples
///
/// ```
/// use railcar::Outcome;
///
/// fn halve(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::Ok(n / 2)
///     } else {
///         Outcome::Err(format!("{n} is odd"))
///     }
/// }
///
/// assert_eq!(halve(8).and_then(halve).unwrap(), 2);
/// assert_eq!(halve(7).map(|n| n * 10).unwrap_err(), "7 is odd");
/// ```
#[derive(Debug, Clone)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Ok(T),
    /// The operation failed with an error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` when the container holds a success value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` when the container holds an error.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` when successful and `f` accepts the value. `f` is never
    /// invoked on `Err`.
    #[must_use]
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` when failed and `f` accepts the error.
    #[must_use]
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => f(error),
        }
    }

    /// Returns `other` on success; propagates an existing error unchanged.
    #[must_use]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains `f` over a success value; propagates an existing error without
    /// invoking `f`.
    #[must_use]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Keeps a success value, rehoming it under `other`'s error type;
    /// otherwise falls back to `other`.
    #[must_use]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Keeps a success value; recovers from an error via `f`, which may pick
    /// a new error type.
    #[must_use]
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Transforms the success channel; the error channel passes through.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error channel; the success channel passes through.
    #[must_use]
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Applies `f` to a success value, or returns `default`.
    #[must_use]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `f` to a success value, or computes a default from the error.
    #[must_use]
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => default(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when the container holds an error.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{msg}"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when the container holds a success value.
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Ok(_) => panic!("{msg}"),
            Self::Err(error) => error,
        }
    }

    /// Invokes `f` with a borrow of the success value, then returns the
    /// container unchanged. A no-op on `Err`.
    #[must_use]
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Invokes `f` with a borrow of the error, then returns the container
    /// unchanged. A no-op on `Ok`.
    #[must_use]
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `"Tried to unwrap Err"` when the container holds an error.
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("Tried to unwrap Err"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `"Tried to unwrap Ok"` when the container holds a success
    /// value.
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => panic!("Tried to unwrap Ok"),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[must_use]
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Projects the success channel as a [`Maybe`]. Exactly one of
    /// [`Outcome::ok`] and [`Outcome::err`] is `Some` for any container.
    #[must_use]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Projects the error channel as a [`Maybe`].
    #[must_use]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    /// Wraps the container in its asynchronous counterpart, already settled.
    #[must_use]
    pub fn into_async(self) -> AsyncOutcome<T, E>
    where
        T: Clone + 'static,
        E: Clone + 'static,
    {
        AsyncOutcome::new(self)
    }

    /// Human-readable rendering: `Ok(<value>)` or `Err(<error>)`.
    #[must_use]
    pub fn describe(&self) -> String
    where
        T: fmt::Debug,
        E: fmt::Debug,
    {
        self.to_string()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value:?})"),
            Self::Err(error) => write!(f, "Err({error:?})"),
        }
    }
}

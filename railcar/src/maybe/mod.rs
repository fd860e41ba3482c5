//! The [`Maybe`] container: explicit presence or absence of a value.
//!
//! `Maybe<T>` is a closed two-variant sum type. `Some(v)` holds exactly one
//! value and `None` carries nothing; the variant is fixed at construction and
//! never inferred from the payload, so `Some(serde_json::Value::Null)` and
//! `Some(f64::NAN)` are present values distinct from `None`. Every combinator
//! consumes `self` and returns a fresh container, so no operation can mutate
//! a container in place.

use std::fmt;

use crate::outcome::Outcome;

mod future;
pub use future::{AsyncMaybe, IntoAsyncMaybe};

#[cfg(test)]
mod future_tests;

/// A container holding either one value (`Some`) or nothing (`None`).
///
/// # Examples
///
/// ```
/// use railcar::Maybe;
///
/// let label = Maybe::Some(21)
///     .map(|n| n * 2)
///     .filter(|n| *n > 10)
///     .map_or_else(|| "missing".to_owned(), |n| n.to_string());
/// assert_eq!(label, "42");
/// ```
#[derive(Debug, Clone)]
pub enum Maybe<T> {
    /// A value is present.
    Some(T),
    /// No value. A unit variant, so every `None` is the same stateless state
    /// regardless of the `T` it is used at.
    None,
}

impl<T> Maybe<T> {
    /// Returns `true` when the container holds a value.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` when the container is empty.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` when a value is present and `f` accepts it. `f` is
    /// never invoked on `None`.
    #[must_use]
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Some(value) => f(value),
            Self::None => false,
        }
    }

    /// Returns `true` when the container is empty, or when `f` accepts the
    /// present value.
    #[must_use]
    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Some(value) => f(value),
            Self::None => true,
        }
    }

    /// Returns `other` when a value is present, `None` otherwise. `other` is
    /// evaluated by the caller before the call; only the return value
    /// short-circuits.
    #[must_use]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Chains `f` over a present value; propagates `None` without invoking
    /// `f`.
    #[must_use]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps a present value; falls back to `other` on `None`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Keeps a present value; computes the fallback lazily on `None`.
    #[must_use]
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => f(),
        }
    }

    /// Transforms a present value; propagates `None` untouched.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies `f` to a present value, or returns `default`.
    #[must_use]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Some(value) => f(value),
            Self::None => default,
        }
    }

    /// Applies `f` to a present value, or computes the default lazily.
    #[must_use]
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Some(value) => f(value),
            Self::None => default(),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when the container is `None`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{msg}"),
        }
    }

    /// Invokes `f` with a borrow of the present value, then returns the
    /// container unchanged. A no-op on `None`.
    #[must_use]
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `"Tried to unwrap None"` when the container is `None`.
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("Tried to unwrap None"),
        }
    }

    /// Returns the contained value or `default`.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one from `f`.
    #[must_use]
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Keeps a present value only when `pred` accepts it; everything else
    /// becomes `None`.
    #[must_use]
    pub fn filter(self, pred: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) if pred(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Converts presence into success: `Some(v)` becomes `Ok(v)`, `None`
    /// becomes `Err(error)`.
    #[must_use]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// As [`Maybe::ok_or`], with the error computed lazily on `None`.
    #[must_use]
    pub fn ok_or_else<E>(self, f: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(f()),
        }
    }

    /// Wraps the container in its asynchronous counterpart, already settled.
    #[must_use]
    pub fn into_async(self) -> AsyncMaybe<T>
    where
        T: Clone + 'static,
    {
        AsyncMaybe::new(self)
    }

    /// Human-readable rendering: `Some(<value>)` or `None`. Strings are
    /// quoted and structured payloads keep their `Debug` shape.
    #[must_use]
    pub fn describe(&self) -> String
    where
        T: fmt::Debug,
    {
        self.to_string()
    }
}

impl<T: fmt::Debug> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({value:?})"),
            Self::None => f.write_str("None"),
        }
    }
}

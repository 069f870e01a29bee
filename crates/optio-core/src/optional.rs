//! Synchronous optional container
//!
//! [`Optional`] is a closed two-variant union: `Present` holds exactly one
//! value, `Absent` holds none. Every combinator returns a new container;
//! the receiver is consumed and never mutated in place.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{AlwaysPresent, AsyncOptional, IntoOptional, OptionalError, OptionalResult};

/// Either exactly one value or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// A held value
    Present(T),
    /// No value
    Absent,
}

impl<T> Optional<T> {
    /// Shared absent instance for this `T`
    pub const EMPTY: Optional<T> = Optional::Absent;

    /// Classify `value`: null-equivalent inputs become absent, everything
    /// else present. An `Optional` input is returned unchanged.
    #[inline]
    pub fn of<V>(value: V) -> Self
    where
        V: IntoOptional<Value = T>,
    {
        value.into_optional()
    }

    /// Wrap a value of a type that has no null-equivalent.
    ///
    /// Types like `serde_json::Value` or `Option<T>` go through
    /// [`of`](Self::of) instead:
    ///
    /// ```compile_fail
    /// use optio_core::Optional;
    ///
    /// let null = Optional::present(serde_json::Value::Null);
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self
    where
        T: AlwaysPresent,
    {
        Optional::Present(value)
    }

    /// Absent optional, same as [`EMPTY`](Self::EMPTY)
    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// True when a value is held
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// True when no value is held
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Keep the value only if `predicate` accepts it.
    ///
    /// The predicate is not invoked on an absent optional.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(value) if predicate(&value) => Optional::Present(value),
            _ => Optional::Absent,
        }
    }

    /// Transform the held value and re-classify the result.
    ///
    /// A transform returning `None` (or any other null-equivalent) collapses
    /// to absent, so `map` also filters for non-null results. A transform
    /// returning an `Optional` is taken as-is.
    pub fn map<R, F>(self, transform: F) -> Optional<R::Value>
    where
        F: FnOnce(T) -> R,
        R: IntoOptional,
    {
        match self {
            Optional::Present(value) => transform(value).into_optional(),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Transform the held value with a pending computation.
    ///
    /// The transform is invoked immediately when present; its result is
    /// classified once it resolves.
    pub fn map_async<'a, R, Fut, F>(self, transform: F) -> AsyncOptional<'a, R::Value>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R> + Send + 'a,
        R: IntoOptional,
        R::Value: Send + 'a,
    {
        match self {
            Optional::Present(value) => AsyncOptional::from_pending(transform(value)),
            Optional::Absent => AsyncOptional::Absent,
        }
    }

    /// Chain a transform that itself returns an `Optional`.
    pub fn flat_map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => transform(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Chain a transform returning either a pending `Optional` or an
    /// [`AsyncOptional`]; both are normalized into the async container.
    pub fn flat_map_async<'a, U, Fut, F>(self, transform: F) -> AsyncOptional<'a, U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<U>> + Send + 'a,
        U: Send + 'a,
    {
        match self {
            Optional::Present(value) => AsyncOptional::from_pending(transform(value)),
            Optional::Absent => AsyncOptional::Absent,
        }
    }

    /// Held value, or `fallback` as given
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => fallback,
        }
    }

    /// Held value, or the result of `supplier` (invoked at most once)
    #[inline]
    pub fn or_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => supplier(),
        }
    }

    /// Held value, or the error produced by `error_supplier`
    #[inline]
    pub fn or_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(error_supplier()),
        }
    }

    /// Held value, or [`OptionalError::ValueMissing`].
    ///
    /// Guard with [`is_present`](Self::is_present) where absence is plausible.
    pub fn get(self) -> OptionalResult<T> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => {
                tracing::trace!("get() on absent optional");
                Err(OptionalError::ValueMissing)
            }
        }
    }

    /// Run `consumer` on the held value, if any
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(value) = self {
            consumer(value);
        }
    }

    /// This optional if present, otherwise `other`
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => other,
        }
    }

    /// Borrow the held value
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Convert into the std `Option`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Iterate over the held value (zero or one item)
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Lift into an already-decided [`AsyncOptional`]
    pub fn into_async<'a>(self) -> AsyncOptional<'a, T>
    where
        T: Send + 'a,
    {
        AsyncOptional::from_optional(self)
    }
}

impl<T: DeserializeOwned> Optional<T> {
    /// JSON entry point: `null` is absent, anything else is deserialized
    /// into a present value.
    pub fn from_json(data: Value) -> OptionalResult<Self> {
        match data {
            Value::Null => Ok(Optional::Absent),
            other => Ok(Optional::Present(serde_json::from_value(other)?)),
        }
    }
}

impl<T, E> Optional<Result<T, E>> {
    /// `Present(Ok(v))` → `Ok(Present(v))`, `Present(Err(e))` → `Err(e)`,
    /// `Absent` → `Ok(Absent)`
    pub fn transpose(self) -> Result<Optional<T>, E> {
        match self {
            Optional::Present(Ok(value)) => Ok(Optional::Present(value)),
            Optional::Present(Err(err)) => Err(err),
            Optional::Absent => Ok(Optional::Absent),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

// Structural: `Some(v)` is kept as-is. Use `Optional::of` to classify `v`.
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

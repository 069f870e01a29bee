//! Deferred optional container
//!
//! [`AsyncOptional`] is the lifted form of [`Optional`]: a present-async
//! value owns one pending computation that resolves to a classified
//! `Optional<T>`, an absent-async value owns nothing and is decided at
//! construction.
//!
//! Each combinator waits for the previous step to settle, applies the
//! synchronous semantics to the resolved value, then re-lifts. Awaiting the
//! container (it implements [`Future`]) crosses back to the sync side.
//!
//! A failing pending computation is never turned into absence. Panics reach
//! the awaiter unchanged; a pending `Result` stays a present `Result` until
//! [`try_resolve`](AsyncOptional::try_resolve) transposes it.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt};

use crate::{IntoOptional, Optional, OptionalResult};

/// Either a pending computation of an [`Optional`], or an already-decided
/// absence.
#[must_use = "async optionals do nothing unless awaited"]
pub enum AsyncOptional<'a, T> {
    /// Pending computation, classified when it settles
    Present(BoxFuture<'a, Optional<T>>),
    /// Decided absence, no computation attached
    Absent,
}

impl<'a, T: Send + 'a> AsyncOptional<'a, T> {
    /// Lift a pending computation. Its output is classified through
    /// [`IntoOptional`] once it settles.
    ///
    /// This is also the normalization step for `flat_map_async`: a pending
    /// `Optional` and an `AsyncOptional` both arrive here as a
    /// `Future<Output = Optional<T>>`.
    pub fn from_pending<R, Fut>(pending: Fut) -> Self
    where
        Fut: Future<Output = R> + Send + 'a,
        R: IntoOptional<Value = T>,
    {
        AsyncOptional::Present(async move { pending.await.into_optional() }.boxed())
    }

    /// Lift an already-known optional
    pub fn from_optional(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => {
                AsyncOptional::Present(future::ready(Optional::Present(value)).boxed())
            }
            Optional::Absent => AsyncOptional::Absent,
        }
    }

    /// Decided absence
    #[inline]
    pub fn absent() -> Self {
        AsyncOptional::Absent
    }

    /// Alias of [`absent`](Self::absent)
    #[inline]
    pub fn empty() -> Self {
        AsyncOptional::Absent
    }

    /// True for the pending variant. The pending value can still classify
    /// as absent when it settles.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, AsyncOptional::Present(_))
    }

    /// True for the decided-absent variant
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, AsyncOptional::Absent)
    }

    /// Keep the settled value only if `predicate` accepts it
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'a,
    {
        match self {
            AsyncOptional::Present(pending) => {
                AsyncOptional::Present(async move { pending.await.filter(predicate) }.boxed())
            }
            AsyncOptional::Absent => AsyncOptional::Absent,
        }
    }

    /// Transform the settled value and re-classify the result
    pub fn map<R, F>(self, transform: F) -> AsyncOptional<'a, R::Value>
    where
        F: FnOnce(T) -> R + Send + 'a,
        R: IntoOptional,
        R::Value: Send + 'a,
    {
        match self {
            AsyncOptional::Present(pending) => {
                AsyncOptional::Present(async move { pending.await.map(transform) }.boxed())
            }
            AsyncOptional::Absent => AsyncOptional::Absent,
        }
    }

    /// Transform the settled value with another pending computation
    pub fn map_async<R, Fut, F>(self, transform: F) -> AsyncOptional<'a, R::Value>
    where
        F: FnOnce(T) -> Fut + Send + 'a,
        Fut: Future<Output = R> + Send + 'a,
        R: IntoOptional,
        R::Value: Send + 'a,
    {
        match self {
            AsyncOptional::Present(pending) => AsyncOptional::Present(
                async move { pending.await.map_async(transform).await }.boxed(),
            ),
            AsyncOptional::Absent => AsyncOptional::Absent,
        }
    }

    /// Chain a synchronous `Optional`-returning transform
    pub fn flat_map<U, F>(self, transform: F) -> AsyncOptional<'a, U>
    where
        F: FnOnce(T) -> Optional<U> + Send + 'a,
        U: Send + 'a,
    {
        match self {
            AsyncOptional::Present(pending) => {
                AsyncOptional::Present(async move { pending.await.flat_map(transform) }.boxed())
            }
            AsyncOptional::Absent => AsyncOptional::Absent,
        }
    }

    /// Chain a transform returning a pending `Optional` or an `AsyncOptional`
    pub fn flat_map_async<U, Fut, F>(self, transform: F) -> AsyncOptional<'a, U>
    where
        F: FnOnce(T) -> Fut + Send + 'a,
        Fut: Future<Output = Optional<U>> + Send + 'a,
        U: Send + 'a,
    {
        match self {
            AsyncOptional::Present(pending) => AsyncOptional::Present(
                async move { pending.await.flat_map_async(transform).await }.boxed(),
            ),
            AsyncOptional::Absent => AsyncOptional::Absent,
        }
    }

    /// Settle into a synchronous optional (same as `.await`)
    pub async fn resolve(self) -> Optional<T> {
        self.await
    }

    /// Settled value, or `fallback`
    pub async fn or_else(self, fallback: T) -> T {
        self.await.or_else(fallback)
    }

    /// Settled value, or the result of `supplier`
    pub async fn or_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.or_get(supplier)
    }

    /// Settled value, or the error produced by `error_supplier`
    pub async fn or_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.await.or_throw(error_supplier)
    }

    /// Settled value, or [`OptionalError::ValueMissing`](crate::OptionalError::ValueMissing)
    pub async fn get(self) -> OptionalResult<T> {
        self.await.get()
    }
}

impl<'a, T, E> AsyncOptional<'a, Result<T, E>>
where
    T: Send + 'a,
    E: Send + 'a,
{
    /// Settle and surface a failed pending computation as `Err`
    pub async fn try_resolve(self) -> Result<Optional<T>, E> {
        self.await.transpose()
    }
}

impl<'a, T> Future for AsyncOptional<'a, T> {
    type Output = Optional<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.get_mut() {
            AsyncOptional::Present(pending) => pending.as_mut().poll(cx),
            AsyncOptional::Absent => Poll::Ready(Optional::Absent),
        }
    }
}

impl<'a, T: Send + 'a> From<Optional<T>> for AsyncOptional<'a, T> {
    fn from(optional: Optional<T>) -> Self {
        AsyncOptional::from_optional(optional)
    }
}

impl<'a, T> fmt::Debug for AsyncOptional<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsyncOptional::Present(_) => f.write_str("AsyncOptional::Present(<pending>)"),
            AsyncOptional::Absent => f.write_str("AsyncOptional::Absent"),
        }
    }
}

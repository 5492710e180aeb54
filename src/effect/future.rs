//! Future - law-abiding wrapper over an asynchronous result.
//!
//! `Future<A, E>` owns a shared handle to one unit of async work that ends
//! either resolved with an `A` or rejected with a [`Rejection<E>`]. The
//! handle is memoised: clones, repeated `cata` calls and `join` all observe
//! the same settlement and never re-trigger the work.
//!
//! Every combinator returns immediately with a new pending `Future`; stages
//! chained on the same value run strictly in order once something polls the
//! result. The crate never spawns tasks: whatever executor awaits the result
//! drives the whole pipeline.
//!
//! # Examples
//!
//! ```rust
//! use functools::effect::{Future, Rejection};
//!
//! # futures::executor::block_on(async {
//! let greeting = Future::<&str, String>::of("hello")
//!     .map(|s| format!("{s}, world"))
//!     .filter(|s| s.len() > 5);
//! let rendered = greeting.cata(|s| s, |_| "rejected".to_string()).await;
//! assert_eq!(rendered, "hello, world");
//!
//! let recovered = Future::<i32, String>::rejected("offline".into()).alt(0);
//! assert_eq!(recovered.join().await, Ok(0));
//!
//! let filtered = Future::<i32, String>::of(3).filter(|n| n % 2 == 0);
//! assert_eq!(filtered.join().await, Err(Rejection::Filtered));
//! # });
//! ```

use std::fmt;
use std::future::{Future as StdFuture, IntoFuture};

use futures::future::{self, BoxFuture, FutureExt, Shared};
use tracing::trace;

use crate::control::{Pure, with_plain_value_types};
use crate::typeclass::TypeConstructor;

/// Why a [`Future`] did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Rejection<E> {
    /// The work failed with a caller-supplied reason.
    #[error("{0}")]
    Reason(E),
    /// A `filter` predicate rejected the resolved value.
    #[error("value rejected by filter")]
    Filtered,
}

impl<E> Rejection<E> {
    /// Returns the caller-supplied reason, if any.
    #[inline]
    pub const fn reason(&self) -> Option<&E> {
        match self {
            Self::Reason(reason) => Some(reason),
            Self::Filtered => None,
        }
    }

    /// Returns `true` for the `filter` sentinel.
    #[inline]
    pub const fn is_filtered(&self) -> bool {
        matches!(self, Self::Filtered)
    }

    /// Transforms the caller-supplied reason.
    pub fn map_reason<E2, F>(self, function: F) -> Rejection<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Reason(reason) => Rejection::Reason(function(reason)),
            Self::Filtered => Rejection::Filtered,
        }
    }
}

/// The eventual state of a [`Future`].
pub type Settlement<A, E> = Result<A, Rejection<E>>;

/// The raw shared handle behind a [`Future`], as returned by [`Future::join`].
pub type Handle<A, E> = Shared<BoxFuture<'static, Settlement<A, E>>>;

/// A deferred asynchronous value that resolves to `A` or rejects with `E`.
///
/// # Laws
///
/// Observed through `join().await`, `Future` satisfies the functor and
/// applicative laws, and `filter`/`alt` satisfy the filterable and
/// alternative laws stated in the `typeclass` module.
pub struct Future<A, E> {
    handle: Handle<A, E>,
}

/// Conversion into a [`Future`] rejecting with `E`, used by [`Future::alt`]
/// and [`Future::alt_chain`].
///
/// Plain values and [`Pure`] resolve immediately.
pub trait IntoAsync<E> {
    /// The resolved value type.
    type Output;

    /// Converts `self` into a `Future`.
    fn into_async(self) -> Future<Self::Output, E>;
}

/// The outcome of a [`Future::filter`] predicate: a plain `bool` or an
/// asynchronous one.
pub trait Verdict<E>: Send {
    /// Converts the verdict into a settled boolean.
    fn into_verdict(self) -> BoxFuture<'static, Settlement<bool, E>>;
}

impl<A, E> Future<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// A future already resolved with `value`.
    pub fn of(value: A) -> Self {
        Self::from_settled(future::ready(Ok(value)))
    }

    /// A future already rejected with `reason`.
    pub fn rejected(reason: E) -> Self {
        Self::from_settled(future::ready(Err(Rejection::Reason(reason))))
    }

    /// Wraps an existing async computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::effect::Future;
    ///
    /// # futures::executor::block_on(async {
    /// let fetched = Future::from_future(async { Ok::<_, String>(vec![1, 2, 3]) });
    /// assert_eq!(fetched.map(|v| v.len()).join().await, Ok(3));
    /// # });
    /// ```
    pub fn from_future<F>(work: F) -> Self
    where
        F: StdFuture<Output = Result<A, E>> + Send + 'static,
    {
        Self::from_settled(work.map(|result| result.map_err(Rejection::Reason)))
    }

    /// Wraps an async computation that already reports [`Rejection`]s.
    pub fn from_settled<F>(work: F) -> Self
    where
        F: StdFuture<Output = Settlement<A, E>> + Send + 'static,
    {
        Self {
            handle: work.boxed().shared(),
        }
    }

    /// Transforms the resolved value; rejections pass through.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Future<B, E>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        let handle = self.handle;
        Future::from_settled(async move { handle.await.map(function) })
    }

    /// Applies the function carried by `functor` to the resolved value.
    ///
    /// `functor` is awaited first; the first rejection observed wins.
    #[must_use]
    pub fn ap<B, F>(self, functor: Future<F, E>) -> Future<B, E>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> B + Clone + Send + Sync + 'static,
    {
        let handle = self.handle;
        Future::from_settled(async move {
            let function = functor.handle.await?;
            let value = handle.await?;
            Ok::<B, Rejection<E>>(function(value))
        })
    }

    /// Sequences a `Future`-returning function on the resolved value.
    #[must_use]
    pub fn chain<B, F>(self, function: F) -> Future<B, E>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> Future<B, E> + Send + 'static,
    {
        let handle = self.handle;
        Future::from_settled(async move {
            let value = handle.await?;
            function(value).handle.await
        })
    }

    /// Waits for the settlement and runs exactly one of the two branches.
    ///
    /// The returned handle resolves to whichever branch ran. `cata` may be
    /// called any number of times; the underlying work runs once.
    pub fn cata<R, F, G>(&self, on_resolved: F, on_rejected: G) -> BoxFuture<'static, R>
    where
        R: Send + 'static,
        F: FnOnce(A) -> R + Send + 'static,
        G: FnOnce(Rejection<E>) -> R + Send + 'static,
    {
        let handle = self.handle.clone();
        async move {
            match handle.await {
                Ok(value) => on_resolved(value),
                Err(rejection) => on_rejected(rejection),
            }
        }
        .boxed()
    }

    /// Recovers from any rejection with `fallback`.
    ///
    /// A resolved receiver short-circuits: the fallback is never awaited.
    #[must_use]
    pub fn alt<V>(self, fallback: V) -> Self
    where
        V: IntoAsync<E, Output = A>,
    {
        let handle = self.handle;
        let fallback = fallback.into_async();
        Self::from_settled(async move {
            match handle.await {
                Ok(value) => Ok(value),
                Err(rejection) => {
                    trace!(filtered = rejection.is_filtered(), "future recovered through alt");
                    fallback.handle.await
                }
            }
        })
    }

    /// Recovers from a rejection by building a new future from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::effect::{Future, Rejection};
    ///
    /// # futures::executor::block_on(async {
    /// let retried = Future::<usize, String>::rejected("timeout".into())
    ///     .alt_chain(|rejection| match rejection {
    ///         Rejection::Reason(reason) => Future::of(reason.len()),
    ///         Rejection::Filtered => Future::of(0),
    ///     });
    /// assert_eq!(retried.join().await, Ok(7));
    /// # });
    /// ```
    #[must_use]
    pub fn alt_chain<R, F>(self, recover: F) -> Self
    where
        R: IntoAsync<E, Output = A>,
        F: FnOnce(Rejection<E>) -> R + Send + 'static,
    {
        let handle = self.handle;
        Self::from_settled(async move {
            match handle.await {
                Ok(value) => Ok(value),
                Err(rejection) => {
                    trace!(filtered = rejection.is_filtered(), "future recovered through alt_chain");
                    let next = recover(rejection).into_async();
                    next.handle.await
                }
            }
        })
    }

    /// Re-tests the resolved value; a false verdict rejects with
    /// [`Rejection::Filtered`].
    ///
    /// An asynchronous verdict is awaited before branching. A rejected
    /// receiver never runs the predicate.
    #[must_use]
    pub fn filter<P, V>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> V + Send + 'static,
        V: Verdict<E>,
    {
        let handle = self.handle;
        Self::from_settled(async move {
            let value = handle.await?;
            let verdict = predicate(&value).into_verdict();
            if verdict.await? {
                Ok(value)
            } else {
                trace!("future value rejected by filter");
                Err(Rejection::<E>::Filtered)
            }
        })
    }

    /// Exposes the raw shared handle.
    pub fn join(self) -> Handle<A, E> {
        self.handle
    }
}

impl<A, E> Clone for Future<A, E> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl<A, E> fmt::Debug for Future<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Future").finish_non_exhaustive()
    }
}

impl<A, E> IntoFuture for Future<A, E>
where
    A: Clone,
    E: Clone,
{
    type Output = Settlement<A, E>;
    type IntoFuture = Handle<A, E>;

    fn into_future(self) -> Self::IntoFuture {
        self.handle
    }
}

impl<A, E> TypeConstructor for Future<A, E> {
    type Inner = A;
    type WithType<B> = Future<B, E>;
}

// =============================================================================
// Lifting
// =============================================================================

impl<A, E> IntoAsync<E> for Future<A, E> {
    type Output = A;

    fn into_async(self) -> Self {
        self
    }
}

impl<A, E> IntoAsync<E> for Pure<A>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = A;

    fn into_async(self) -> Future<A, E> {
        Future::of(self.0)
    }
}

impl<T, E> IntoAsync<E> for Vec<T>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = Self;

    fn into_async(self) -> Future<Self, E> {
        Future::of(self)
    }
}

macro_rules! impl_into_async_for_plain_values {
    ($($ty:ty),*) => {
        $(
            impl<E> IntoAsync<E> for $ty
            where
                E: Clone + Send + Sync + 'static,
            {
                type Output = $ty;

                fn into_async(self) -> Future<$ty, E> {
                    Future::of(self)
                }
            }
        )*
    };
}

with_plain_value_types!(impl_into_async_for_plain_values);

impl<E> Verdict<E> for bool
where
    E: Send + 'static,
{
    fn into_verdict(self) -> BoxFuture<'static, Settlement<bool, E>> {
        future::ready(Ok(self)).boxed()
    }
}

impl<E> Verdict<E> for Future<bool, E>
where
    E: Clone + Send + Sync + 'static,
{
    fn into_verdict(self) -> BoxFuture<'static, Settlement<bool, E>> {
        self.handle.boxed()
    }
}

impl<E> Verdict<E> for BoxFuture<'static, bool>
where
    E: Send + 'static,
{
    fn into_verdict(self) -> BoxFuture<'static, Settlement<bool, E>> {
        self.map(Ok).boxed()
    }
}

static_assertions::assert_impl_all!(Future<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Rejection<String>: std::error::Error, Send, Sync);

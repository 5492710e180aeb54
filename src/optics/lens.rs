//! Van Laarhoven lenses.
//!
//! A lens is a single operation, [`Lens::lift`]: given a transformer from
//! the focus into some functor and a target, read the focus, transform it,
//! and map the setter over the result. Choosing the functor chooses the
//! operation: [`Const`] makes it a getter ([`view`]), [`Identity`] makes it
//! an updater ([`over`], [`set`]).
//!
//! Because a lens is nothing but its lifted transformer, composing two
//! lenses is composing their transformers ([`compose`], [`Lens::then`]);
//! no getter/setter pair is ever rebuilt.
//!
//! # Laws
//!
//! 1. **GetPut**: `set(lens, view(lens, s), s) == s`
//! 2. **PutGet**: `view(lens, set(lens, v, s)) == v`
//! 3. **PutPut**: `set(lens, v2, set(lens, v1, s)) == set(lens, v2, s)`
//!
//! # Examples
//!
//! ```
//! use functools::optics::{FunctionLens, Lens, over, view};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = FunctionLens::new(
//!     |point: &Point| point.x,
//!     |x, point: Point| Point { x, ..point },
//! );
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(view(&x_lens, point.clone()), 10);
//! assert_eq!(over(&x_lens, |x: i32| x * 2, point), Point { x: 20, y: 20 });
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::functor::{ConstKind, FunctorKind, IdentityKind};
use crate::compose::constant;
use crate::typeclass::{Const, Identity};

/// A lens from a structure `S` to a focus `A`, in van Laarhoven form.
pub trait Lens<S, A> {
    /// Reads the focus of `target`, passes it through `to_functor`, and maps
    /// the setter over the functor, rebuilding `target` inside it.
    fn lift<K, F>(&self, to_functor: F, target: S) -> K::Wrapped<S>
    where
        K: FunctorKind,
        F: FnOnce(A) -> K::Wrapped<A>;

    /// Reads the focus. See [`view`].
    fn view(&self, target: S) -> A {
        view(self, target)
    }

    /// Rebuilds `target` with its focus transformed. See [`over`].
    fn over<F>(&self, function: F, target: S) -> S
    where
        F: FnOnce(A) -> A,
    {
        over(self, function, target)
    }

    /// Rebuilds `target` with its focus replaced. See [`set`].
    fn set(&self, value: A, target: S) -> S
    where
        A: Clone,
    {
        set(self, value, target)
    }

    /// Focuses further through `inner`. See [`compose`].
    fn then<B, L>(self, inner: L) -> Composed<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        Composed::new(self, inner)
    }
}

/// Reads the focus of `target` through `lens`.
///
/// The target is passed through a constant functor, so the setter never runs.
pub fn view<S, A, L>(lens: &L, target: S) -> A
where
    L: Lens<S, A> + ?Sized,
{
    lens.lift::<ConstKind<A>, _>(Const::new, target)
        .into_value()
}

/// Rebuilds `target` with the focus replaced by `function(focus)`.
pub fn over<S, A, L, F>(lens: &L, function: F, target: S) -> S
where
    L: Lens<S, A> + ?Sized,
    F: FnOnce(A) -> A,
{
    lens.lift::<IdentityKind, _>(|focus| Identity::new(function(focus)), target)
        .into_inner()
}

/// Rebuilds `target` with the focus replaced by `value`.
pub fn set<S, A, L>(lens: &L, value: A, target: S) -> S
where
    L: Lens<S, A> + ?Sized,
    A: Clone,
{
    over(lens, constant(value), target)
}

/// Composes two lenses: `outer` focuses on a `B` inside `S`, `inner` on an
/// `A` inside that `B`.
///
/// # Examples
///
/// ```
/// use functools::optics::{FunctionLens, compose, view};
///
/// let first = FunctionLens::new(|pair: &(i32, (i32, i32))| pair.1, |b, pair: (i32, (i32, i32))| (pair.0, b));
/// let second = FunctionLens::new(|pair: &(i32, i32)| pair.1, |b, pair: (i32, i32)| (pair.0, b));
///
/// assert_eq!(view(&compose(first, second), (1, (2, 3))), 3);
/// ```
pub fn compose<S, B, A, Outer, Inner>(outer: Outer, inner: Inner) -> Composed<Outer, Inner, B>
where
    Outer: Lens<S, B>,
    Inner: Lens<B, A>,
{
    Composed::new(outer, inner)
}

/// A lens built from a getter and a setter.
///
/// The getter returns an owned focus; the setter receives the new focus and
/// the original structure.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, S) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, S) -> S,
{
    /// Creates a lens from `getter` and `setter`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, S) -> S,
{
    fn lift<K, F>(&self, to_functor: F, target: S) -> K::Wrapped<S>
    where
        K: FunctorKind,
        F: FnOnce(A) -> K::Wrapped<A>,
    {
        let focus = (self.getter)(&target);
        K::fmap(to_functor(focus), |new_focus| (self.setter)(new_focus, target))
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(A, S) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, S) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// Two lenses composed through their lifted transformers.
///
/// `B` is the intermediate focus: the target of `Outer` and the source of
/// `Inner`.
pub struct Composed<Outer, Inner, B> {
    outer: Outer,
    inner: Inner,
    _marker: PhantomData<fn() -> B>,
}

impl<Outer, Inner, B> Composed<Outer, Inner, B> {
    /// Composes `outer` with `inner`.
    #[must_use]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, B, A, Outer, Inner> Lens<S, A> for Composed<Outer, Inner, B>
where
    Outer: Lens<S, B>,
    Inner: Lens<B, A>,
{
    fn lift<K, F>(&self, to_functor: F, target: S) -> K::Wrapped<S>
    where
        K: FunctorKind,
        F: FnOnce(A) -> K::Wrapped<A>,
    {
        self.outer.lift::<K, _>(
            |middle| self.inner.lift::<K, F>(to_functor, middle),
            target,
        )
    }
}

impl<Outer: Clone, Inner: Clone, B> Clone for Composed<Outer, Inner, B> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<Outer: fmt::Debug, Inner: fmt::Debug, B> fmt::Debug for Composed<Outer, Inner, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Partially applied lens operations.
///
/// Each method fixes a prefix of the arguments of [`view`], [`over`] or
/// [`set`] and returns a function of the remaining target.
///
/// # Examples
///
/// ```
/// use functools::optics::{FunctionLens, LensExt};
///
/// let first = FunctionLens::new(|pair: &(i32, i32)| pair.0, |a, pair: (i32, i32)| (a, pair.1));
/// let reset = first.clone().setter(0);
/// let bump = first.clone().modifier(|a| a + 1);
/// let read = first.viewer();
///
/// assert_eq!(reset((5, 6)), (0, 6));
/// assert_eq!(bump((5, 6)), (6, 6));
/// assert_eq!(read((5, 6)), 5);
/// ```
pub trait LensExt<S, A>: Lens<S, A> + Sized {
    /// `view` with the lens fixed.
    fn viewer(self) -> impl Fn(S) -> A {
        viewer(self)
    }

    /// `over` with the lens and the function fixed.
    fn modifier<F>(self, function: F) -> impl Fn(S) -> S
    where
        F: Fn(A) -> A,
    {
        modifier(self, function)
    }

    /// `set` with the lens and the value fixed.
    fn setter(self, value: A) -> impl Fn(S) -> S
    where
        A: Clone,
    {
        setter(self, value)
    }
}

impl<S, A, L: Lens<S, A>> LensExt<S, A> for L {}

/// Fixes the lens of [`view`].
pub fn viewer<S, A, L>(lens: L) -> impl Fn(S) -> A
where
    L: Lens<S, A>,
{
    move |target| view(&lens, target)
}

/// Fixes the lens and the function of [`over`].
pub fn modifier<S, A, L, F>(lens: L, function: F) -> impl Fn(S) -> S
where
    L: Lens<S, A>,
    F: Fn(A) -> A,
{
    move |target| over(&lens, &function, target)
}

/// Fixes the lens and the value of [`set`].
pub fn setter<S, A, L>(lens: L, value: A) -> impl Fn(S) -> S
where
    L: Lens<S, A>,
    A: Clone,
{
    move |target| set(&lens, value.clone(), target)
}

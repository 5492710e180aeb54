//! Effect - deferred, re-runnable synchronous computation.
//!
//! An `Effect` describes work without doing it. Nothing happens until
//! [`Effect::run`] is called, and every call re-executes the whole chain
//! from the root closure: results are never cached.
//!
//! # Examples
//!
//! ```rust
//! use functools::effect::Effect;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//!
//! let effect = Effect::new(move |()| {
//!     counter.set(counter.get() + 1);
//!     1
//! })
//! .chain(|v| Effect::new(move |()| v + 1));
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(effect.run(()), 2);
//! assert_eq!(effect.run(()), 2);
//! assert_eq!(runs.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::{Pure, with_plain_value_types};
use crate::typeclass::TypeConstructor;

/// A deferred computation from an input `I` to a value `A`.
///
/// Cloning an `Effect` shares the underlying closure; running either clone
/// executes the same computation again.
///
/// # Monad Laws
///
/// With `run(())` as the observation:
///
/// 1. **Left Identity**: `Effect::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(Effect::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
pub struct Effect<A, I = ()> {
    computation: Rc<dyn Fn(I) -> A>,
}

/// The result of an [`Effect::chain`] step.
///
/// An `Effect` is run (flattening one level); plain values and [`Pure`]
/// are used directly.
pub trait IntoEffect {
    /// The value produced once the step is evaluated.
    type Output;

    /// Evaluates the step.
    fn evaluate(self) -> Self::Output;
}

impl<A> IntoEffect for Effect<A> {
    type Output = A;

    fn evaluate(self) -> A {
        self.run(())
    }
}

impl<A> IntoEffect for Pure<A> {
    type Output = A;

    fn evaluate(self) -> A {
        self.0
    }
}

impl<T> IntoEffect for Vec<T> {
    type Output = Self;

    fn evaluate(self) -> Self {
        self
    }
}

impl<T> IntoEffect for Option<T> {
    type Output = Self;

    fn evaluate(self) -> Self {
        self
    }
}

macro_rules! impl_into_effect_for_plain_values {
    ($($ty:ty),*) => {
        $(
            impl IntoEffect for $ty {
                type Output = $ty;

                fn evaluate(self) -> $ty {
                    self
                }
            }
        )*
    };
}

with_plain_value_types!(impl_into_effect_for_plain_values);

impl<A, I> Effect<A, I> {
    /// Runs the computation with `input` and returns its value.
    ///
    /// A panic inside the computation propagates to the caller.
    #[inline]
    pub fn run(&self, input: I) -> A {
        (self.computation)(input)
    }
}

impl<A: 'static, I: 'static> Effect<A, I> {
    /// Wraps `computation` without running it.
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(I) -> A + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// An effect that ignores its input and yields a copy of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::effect::Effect;
    ///
    /// let effect: Effect<String> = Effect::of("ready".to_string());
    /// assert_eq!(effect.run(()), "ready");
    /// assert_eq!(effect.run(()), "ready");
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Runs this effect, then applies `function` to its value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Effect<B, I>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let computation = self.computation;
        Effect::new(move |input| function(computation(input)))
    }

    /// Runs this effect, applies `function`, and runs the result when it is
    /// itself an effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::effect::Effect;
    ///
    /// let nested = Effect::of(2).chain(|n| Effect::of(n * 10));
    /// let plain = Effect::of(2).chain(|n| n * 10);
    /// assert_eq!(nested.run(()), plain.run(()));
    /// ```
    #[must_use]
    pub fn chain<R, F>(self, function: F) -> Effect<R::Output, I>
    where
        F: Fn(A) -> R + 'static,
        R: IntoEffect,
        R::Output: 'static,
    {
        let computation = self.computation;
        Effect::new(move |input| function(computation(input)).evaluate())
    }
}

impl<A: 'static> Effect<A> {
    /// Threads this effect's value into the function carried by `functor`.
    ///
    /// The resulting effect takes `functor`'s input; `functor` runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functools::effect::Effect;
    ///
    /// let scale = Effect::new(|factor: i32| move |n: i32| n * factor);
    /// let seven: Effect<i32> = Effect::of(7);
    /// let applied = seven.ap(scale);
    /// assert_eq!(applied.run(3), 21);
    /// ```
    #[must_use]
    pub fn ap<B, F, I>(self, functor: Effect<F, I>) -> Effect<B, I>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
        I: 'static,
    {
        let computation = self.computation;
        functor.map(move |function| function(computation(())))
    }
}

impl<A, I> Clone for Effect<A, I> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<A, I> fmt::Debug for Effect<A, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Effect(<deferred>)")
    }
}

impl<A, I> TypeConstructor for Effect<A, I> {
    type Inner = A;
    type WithType<B> = Effect<B, I>;
}

static_assertions::assert_not_impl_any!(Effect<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn construction_performs_no_work() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let effect = Effect::new(move |()| counter.set(counter.get() + 1)).map(|()| 5);
        assert_eq!(runs.get(), 0);
        assert_eq!(effect.run(()), 5);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn every_run_re_executes_the_chain() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let effect = Effect::new(move |()| {
            counter.set(counter.get() + 1);
            counter.get()
        });
        assert_eq!(effect.run(()), 1);
        assert_eq!(effect.run(()), 2);
        assert_eq!(effect.clone().run(()), 3);
    }

    #[rstest]
    fn chain_flattens_effects_and_keeps_plain_values() {
        let flattened = Effect::new(|()| 1).chain(|v| Effect::new(move |()| v + 1));
        assert_eq!(flattened.run(()), 2);
        assert_eq!(flattened.run(()), 2);

        let plain = Effect::new(|()| 1).chain(|v| v + 1);
        assert_eq!(plain.run(()), 2);

        let wrapped = Effect::of(3).chain(|v| Pure(vec![v; 2]));
        assert_eq!(wrapped.run(()), vec![3, 3]);
    }

    #[rstest]
    fn run_forwards_its_argument() {
        let greet = Effect::new(|name: &'static str| format!("hello {name}")).map(|s| s.len());
        assert_eq!(greet.run("joker"), 11);
    }

    #[rstest]
    #[should_panic(expected = "computation failed")]
    fn panics_propagate_out_of_run() {
        let effect: Effect<i32> = Effect::new(|()| panic!("computation failed"));
        effect.map(|n| n + 1).run(());
    }

    #[rstest]
    fn debug_does_not_run_the_computation() {
        let effect: Effect<i32> = Effect::new(|()| unreachable!());
        assert_eq!(format!("{effect:?}"), "Effect(<deferred>)");
    }
}

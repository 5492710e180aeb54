//! Property-based tests for the `Effect` laws.
//!
//! Two effects are considered equal when running them yields equal values.

use functools::compose::identity;
use functools::effect::Effect;
use proptest::prelude::*;

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn doubled_later(n: i32) -> Effect<i32> {
    Effect::new(move |()| double(n))
}

fn negated_later(n: i32) -> Effect<i32> {
    Effect::new(move |()| n.wrapping_neg())
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(x in any::<i32>()) {
        let effect: Effect<i32> = Effect::of(x);
        prop_assert_eq!(effect.clone().map(identity).run(()), effect.run(()));
    }

    #[test]
    fn prop_functor_composition(x in any::<i32>()) {
        let effect: Effect<i32> = Effect::of(x);
        prop_assert_eq!(
            effect.clone().map(|n| double(increment(n))).run(()),
            effect.map(increment).map(double).run(())
        );
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_applicative_identity(x in any::<i32>()) {
        let effect: Effect<i32> = Effect::of(x);
        let identity_effect: Effect<fn(i32) -> i32> = Effect::of(identity::<i32>);
        prop_assert_eq!(effect.clone().ap(identity_effect).run(()), effect.run(()));
    }

    #[test]
    fn prop_applicative_homomorphism(x in any::<i32>()) {
        let function: Effect<fn(i32) -> i32> = Effect::of(increment);
        let applied = Effect::of(x).ap(function);
        prop_assert_eq!(applied.run(()), increment(x));
    }

    #[test]
    fn prop_applicative_interchange(y in any::<i32>()) {
        let u: Effect<fn(i32) -> i32> = Effect::of(double);
        let left = Effect::of(y).ap(u.clone());
        let right = u.ap(Effect::new(move |()| move |function: fn(i32) -> i32| function(y)));
        prop_assert_eq!(left.run(()), right.run(()));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_monad_left_identity(x in any::<i32>()) {
        let left: Effect<i32> = Effect::of(x).chain(doubled_later);
        prop_assert_eq!(left.run(()), doubled_later(x).run(()));
    }

    #[test]
    fn prop_monad_right_identity(x in any::<i32>()) {
        let effect: Effect<i32> = Effect::of(x);
        prop_assert_eq!(effect.clone().chain(Effect::of).run(()), effect.run(()));
    }

    #[test]
    fn prop_monad_associativity(x in any::<i32>()) {
        let effect: Effect<i32> = Effect::of(x);
        let left = effect.clone().chain(doubled_later).chain(negated_later);
        let right = effect.chain(|n| doubled_later(n).chain(negated_later));
        prop_assert_eq!(left.run(()), right.run(()));
    }

    #[test]
    fn prop_chain_accepts_plain_values(x in any::<i32>()) {
        let effect: Effect<i32> = Effect::of(x);
        prop_assert_eq!(
            effect.clone().chain(increment).run(()),
            effect.chain(|n| Effect::of(increment(n))).run(())
        );
    }

    #[test]
    fn prop_run_is_repeatable(x in any::<i32>()) {
        let effect = Effect::new(move |()| increment(x)).chain(doubled_later);
        prop_assert_eq!(effect.run(()), effect.run(()));
    }
}

//! Property-based tests for the `Maybe` laws.
//!
//! - **Functor**: identity and composition
//! - **Applicative**: identity, homomorphism, interchange and composition
//! - **Monad**: left identity, right identity and associativity
//! - **Alternative**: associativity and distributivity
//! - **Filterable**: identity, distributivity and annihilation

use functools::compose::identity;
use functools::control::Maybe;
use functools::typeclass::Functor;
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn half_if_even(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::just(n) } else { Maybe::nothing() }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(m in any_maybe()) {
        prop_assert_eq!(m.map(identity), m);
    }

    #[test]
    fn prop_functor_identity_keeps_present_nesting(m in any_maybe()) {
        let nested = m.fmap(Maybe::just);
        prop_assert_eq!(nested.map(identity), nested);
    }

    #[test]
    fn prop_functor_composition(m in any_maybe()) {
        let composed = m.map(|n| double(increment(n)));
        let chained = m.map(increment).map(double);
        prop_assert_eq!(composed, chained);
    }

    #[test]
    fn prop_fmap_agrees_with_map_for_plain_values(m in any_maybe()) {
        prop_assert_eq!(m.fmap(increment), m.map(increment));
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_applicative_identity(v in any_maybe()) {
        prop_assert_eq!(v.ap(Maybe::just(identity::<i32>)), v);
    }

    #[test]
    fn prop_applicative_homomorphism(x in any::<i32>()) {
        prop_assert_eq!(Maybe::just(x).ap(Maybe::just(increment)), Maybe::just(increment(x)));
    }

    #[test]
    fn prop_applicative_interchange(y in any::<i32>(), present in any::<bool>()) {
        let u: Maybe<fn(i32) -> i32> = if present { Maybe::just(double) } else { Maybe::nothing() };
        let left = Maybe::just(y).ap(u);
        let right = u.ap(Maybe::just(move |function: fn(i32) -> i32| function(y)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_applicative_composition(v in any_maybe(), u_present in any::<bool>(), w_present in any::<bool>()) {
        let u: Maybe<fn(i32) -> i32> = if u_present { Maybe::just(increment) } else { Maybe::nothing() };
        let w: Maybe<fn(i32) -> i32> = if w_present { Maybe::just(double) } else { Maybe::nothing() };

        let left = v.ap(u).ap(w);
        let composed = w.fmap(|f| move |g: fn(i32) -> i32| move |x: i32| f(g(x)));
        let right = v.ap(u.ap(composed));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_monad_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Maybe::of(x).chain(half_if_even), half_if_even(x));
    }

    #[test]
    fn prop_monad_right_identity(m in any_maybe()) {
        prop_assert_eq!(m.chain(Maybe::just), m);
    }

    #[test]
    fn prop_monad_associativity(m in any_maybe()) {
        let left = m.chain(half_if_even).chain(positive);
        let right = m.chain(|x| half_if_even(x).chain(positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Alternative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_alt_associativity(a in any_maybe(), b in any_maybe(), c in any_maybe()) {
        prop_assert_eq!(a.alt(b).alt(c), a.alt(b.alt(c)));
    }

    #[test]
    fn prop_alt_distributivity(a in any_maybe(), b in any_maybe()) {
        prop_assert_eq!(a.alt(b).map(double), a.map(double).alt(b.map(double)));
    }

    #[test]
    fn prop_alt_nothing_is_neutral(a in any_maybe()) {
        prop_assert_eq!(Maybe::nothing().alt(a), a);
        prop_assert_eq!(a.alt(Maybe::nothing()), a);
    }
}

// =============================================================================
// Filterable Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_identity(m in any_maybe()) {
        prop_assert_eq!(m.filter(|_| true), m);
    }

    #[test]
    fn prop_filter_distributivity(m in any_maybe()) {
        let is_even = |n: &i32| n % 2 == 0;
        let is_positive = |n: &i32| *n > 0;
        prop_assert_eq!(
            m.filter(is_even).filter(is_positive),
            m.filter(|n| is_even(n) && is_positive(n))
        );
    }

    #[test]
    fn prop_filter_annihilation(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(Maybe::just(x).filter(|_| false), Maybe::just(y).filter(|_| false));
    }
}

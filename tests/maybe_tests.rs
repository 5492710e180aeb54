//! Scenario tests for `Maybe`.

use functools::control::{Maybe, Pure};
use functools::typeclass::{Alternative, Applicative, Monad};
use functools::value::Value;
use rstest::rstest;

// =============================================================================
// Normalisation
// =============================================================================

#[rstest]
fn absent_inputs_normalise_to_nothing() {
    assert!(Maybe::new(None::<i32>).is_nothing());
    assert!(Maybe::new(Maybe::<i32>::nothing()).is_nothing());
    assert!(Maybe::new(Value::Null).is_nothing());
}

#[rstest]
#[case(Maybe::new(1).is_just())]
#[case(Maybe::new(0).is_just())]
#[case(Maybe::new("").is_just())]
#[case(Maybe::new(false).is_just())]
#[case(Maybe::new(()).is_just())]
#[case(Maybe::new(Vec::<i32>::new()).is_just())]
#[case(Maybe::new(Pure(None::<i32>)).is_just())]
#[case(Maybe::new(Value::from(0)).is_just())]
fn present_inputs_normalise_to_just(#[case] is_just: bool) {
    assert!(is_just);
}

#[rstest]
fn map_collapses_absent_results() {
    let lookup = |name: &str| if name == "alice" { Some(30) } else { None };
    assert_eq!(Maybe::just("alice").map(lookup), Maybe::just(30));
    assert_eq!(Maybe::just("bob").map(lookup), Maybe::nothing());
}

#[rstest]
fn map_rewraps_a_present_maybe_result() {
    let find_pet = |owner: &str| {
        if owner == "alice" {
            Maybe::just("joker")
        } else {
            Maybe::nothing()
        }
    };
    assert_eq!(
        Maybe::just("alice").map(find_pet),
        Maybe::just(Maybe::just("joker"))
    );
    assert_eq!(Maybe::just("bob").map(find_pet), Maybe::nothing());
    assert_eq!(Maybe::just("alice").chain(find_pet), Maybe::just("joker"));
}

#[rstest]
fn map_with_identity_keeps_nested_maybe() {
    let nested = Maybe::just(Maybe::just(1));
    assert_eq!(nested.map(|inner| inner), nested);
}

#[rstest]
fn map_keeps_nested_maybe_when_wrapped_in_pure() {
    let nested = Maybe::just(1).map(|n| Pure(Maybe::just(n)));
    assert_eq!(nested, Maybe::just(Maybe::just(1)));
    assert_eq!(nested.flatten(), Maybe::just(1));
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn nothing_never_runs_the_function() {
    let mut calls = 0;
    let result = Maybe::<i32>::nothing().map(|n| {
        calls += 1;
        n + 1
    });
    assert!(result.is_nothing());
    assert_eq!(calls, 0);
}

#[rstest]
fn chain_does_not_rewrap() {
    let parse = |s: &str| Maybe::from(s.parse::<i32>().ok());
    assert_eq!(Maybe::just("42").chain(parse), Maybe::just(42));
    assert_eq!(Maybe::just("forty-two").chain(parse), Maybe::nothing());
}

fn double(n: i32) -> i32 {
    n * 2
}

#[rstest]
#[case(Maybe::just(3), Maybe::just(double as fn(i32) -> i32), Maybe::just(6))]
#[case(Maybe::nothing(), Maybe::just(double as fn(i32) -> i32), Maybe::nothing())]
fn ap_applies_the_carried_function(
    #[case] value: Maybe<i32>,
    #[case] function: Maybe<fn(i32) -> i32>,
    #[case] expected: Maybe<i32>,
) {
    assert_eq!(value.ap(function), expected);
}

#[rstest]
fn ap_without_a_function_is_nothing() {
    let missing: Maybe<fn(i32) -> i32> = Maybe::nothing();
    assert_eq!(Maybe::just(3).ap(missing), Maybe::nothing());
}

#[rstest]
fn filter_downgrades_on_false() {
    assert_eq!(Maybe::just(4).filter(|n| n % 2 == 0), Maybe::just(4));
    assert_eq!(Maybe::just(5).filter(|n| n % 2 == 0), Maybe::nothing());
}

#[rstest]
fn alt_accepts_raw_values_and_maybes() {
    assert_eq!(Maybe::nothing().alt(7), Maybe::just(7));
    assert_eq!(Maybe::nothing().alt(Some(7)), Maybe::just(7));
    assert_eq!(Maybe::nothing().alt(Maybe::just(7)), Maybe::just(7));
    assert_eq!(Maybe::just(1).alt(7), Maybe::just(1));
}

#[rstest]
fn alt_chain_is_lazy() {
    let mut calls = 0;
    let kept = Maybe::just(1).alt_chain(|| {
        calls += 1;
        Maybe::just(2)
    });
    assert_eq!(kept, Maybe::just(1));
    assert_eq!(calls, 0);
    assert_eq!(Maybe::nothing().alt_chain(|| Maybe::just(2)), Maybe::just(2));
}

#[rstest]
fn cata_is_the_only_exit() {
    let greeting = |m: Maybe<&str>| m.cata(|name| format!("hello {name}"), || "who?".to_string());
    assert_eq!(greeting(Maybe::just("alice")), "hello alice");
    assert_eq!(greeting(Maybe::nothing()), "who?");
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[rstest]
fn typeclass_instances_agree_with_inherent_methods() {
    assert_eq!(Maybe::just(2).flat_map(|n| Maybe::just(n + 1)), Maybe::just(3));
    assert_eq!(Maybe::just(2).map2(Maybe::just(3), |a, b| a * b), Maybe::just(6));
    assert_eq!(Maybe::just(2).product(Maybe::just('x')), Maybe::just((2, 'x')));
    assert_eq!(<Maybe<()>>::pure(5), Maybe::just(5));
    assert_eq!(<Maybe<()>>::empty::<i32>(), Maybe::nothing());
}

#[rstest]
fn choice_takes_the_first_just() {
    let picked = Maybe::choice([Maybe::nothing(), Maybe::just(2), Maybe::just(3)]);
    assert_eq!(picked, Maybe::just(2));
    assert_eq!(Maybe::<i32>::choice([]), Maybe::nothing());
}

#[rstest]
fn conversions_round_trip_through_option() {
    let converted: Option<i32> = Maybe::just(1).into();
    assert_eq!(converted, Some(1));
    assert_eq!(Maybe::from(None::<i32>).into_option(), None);
    assert_eq!(Maybe::<i32>::default(), Maybe::nothing());
}

#[rstest]
fn display_shows_the_variant() {
    assert_eq!(Maybe::just(5).to_string(), "Just(5)");
    assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing");
}

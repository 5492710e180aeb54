//! Lenses over [`Value`] paths.
//!
//! [`prop`] focuses on one key and [`path`] on a sequence of keys. Both read
//! with [`value::get`](crate::value::get) and write with
//! [`value::assoc`](crate::value::assoc), so an update copies only the nodes
//! along the path and shares every other branch with the original.
//!
//! A missing focus reads as [`Value::Null`].

use super::functor::FunctorKind;
use super::lens::Lens;
use crate::value::{Key, Path, Value, assoc, get};

/// A lens focusing on the value at a fixed [`Path`].
///
/// # Examples
///
/// ```rust
/// use functools::optics::{path, prop, view, over};
/// use functools::value::Value;
///
/// let alice = Value::object([
///     ("name", Value::from("Alice Jones")),
///     ("pets", Value::object([("dog", Value::from("joker"))])),
/// ]);
///
/// assert_eq!(view(&path(["pets", "dog"]), alice.clone()), Value::from("joker"));
///
/// let shouted = over(
///     &prop("name"),
///     |name: Value| Value::from(name.as_str().unwrap_or_default().to_uppercase()),
///     alice.clone(),
/// );
/// assert_eq!(shouted["name"], Value::from("ALICE JONES"));
/// assert!(shouted["pets"].ptr_eq(&alice["pets"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathLens {
    path: Path,
}

impl PathLens {
    /// Creates a lens focusing on `path`.
    pub fn new(path: impl Into<Path>) -> Self {
        Self { path: path.into() }
    }

    /// The focused path.
    pub const fn path(&self) -> &Path {
        &self.path
    }
}

impl Lens<Value, Value> for PathLens {
    fn lift<K, F>(&self, to_functor: F, target: Value) -> K::Wrapped<Value>
    where
        K: FunctorKind,
        F: FnOnce(Value) -> K::Wrapped<Value>,
    {
        let focus = get(&self.path, &target).cloned().unwrap_or_default();
        K::fmap(to_functor(focus), |new_focus| {
            assoc(&self.path, new_focus, &target)
        })
    }
}

/// A lens over a single key.
pub fn prop(key: impl Into<Key>) -> PathLens {
    let key: Key = key.into();
    PathLens::new(key)
}

/// A lens over a sequence of keys.
pub fn path(keys: impl Into<Path>) -> PathLens {
    PathLens::new(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, set, view};
    use rstest::rstest;

    fn alice() -> Value {
        Value::object([
            ("name", Value::from("Alice Jones")),
            (
                "address",
                Value::array([
                    Value::from("22 Walnut St"),
                    Value::from("San Francisco"),
                    Value::from("CA"),
                ]),
            ),
            (
                "pets",
                Value::object([("dog", Value::from("joker")), ("cat", Value::from("batman"))]),
            ),
        ])
    }

    #[rstest]
    fn missing_focus_reads_as_null() {
        assert_eq!(view(&path(["pets", "fish"]), alice()), Value::Null);
        assert_eq!(view(&prop("age"), alice()), Value::Null);
    }

    #[rstest]
    fn prop_accepts_indices() {
        let city = compose(prop("address"), prop(1usize));
        assert_eq!(view(&city, alice()), Value::from("San Francisco"));
    }

    #[rstest]
    fn set_writes_through_missing_intermediates() {
        let updated = set(&path(["pets", "fish", "name"]), Value::from("nemo"), alice());
        assert_eq!(updated["pets"]["fish"]["name"], Value::from("nemo"));
        assert_eq!(updated["pets"]["dog"], Value::from("joker"));
    }

    #[rstest]
    fn accessors_expose_the_path() {
        let lens = path(["pets", "dog"]);
        assert_eq!(lens.path().to_string(), "pets.dog");
        assert_eq!(prop("pets"), PathLens::new(Key::from("pets")));
    }
}

//! Structured values addressed by paths.
//!
//! [`Value`] is a JSON-shaped tree whose arrays, objects and strings are
//! reference counted, so cloning a node is a shallow copy that shares every
//! child. [`get`] reads along a [`Path`] and [`assoc`] rebuilds a tree along
//! one, copying only the nodes on the path.
//!
//! # Examples
//!
//! ```rust
//! use functools::path;
//! use functools::value::{Value, assoc, get};
//!
//! let alice = Value::object([
//!     ("name", Value::from("Alice Jones")),
//!     ("pets", Value::object([("dog", Value::from("joker"))])),
//! ]);
//!
//! assert_eq!(get(&path!["pets", "dog"], &alice), Some(&Value::from("joker")));
//! assert_eq!(get(&path!["pets", "cat"], &alice), None);
//!
//! let renamed = assoc(&path!["name"], Value::from("Alice"), &alice);
//! assert!(renamed["pets"].ptr_eq(&alice["pets"]));
//! ```

mod access;
mod path;
#[cfg(feature = "serde")]
mod serialization;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

pub use access::{assoc, get};
pub use path::{Key, Path, PathError};

use crate::control::{IntoMaybe, Maybe};

/// A JSON-shaped value with shared children.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(Arc<str>),
    /// An ordered sequence of values.
    Array(Arc<Vec<Value>>),
    /// A string-keyed map of values.
    Object(Arc<BTreeMap<String, Value>>),
}

static NULL: Value = Value::Null;

impl Value {
    /// Builds an object from key/value pairs.
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::Object(Arc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        ))
    }

    /// Builds an array from values.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Array(Arc::new(items.into_iter().collect()))
    }

    /// Returns `true` for `Null`.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for arrays and objects.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Returns the boolean payload.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the numeric payload.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Returns the elements of an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the entries of an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Reads one level down.
    ///
    /// Objects accept an `Index` as its decimal string and arrays accept a
    /// `Field` that spells an index canonically (`"1"`, never `"01"`).
    pub fn get_key(&self, key: &Key) -> Option<&Self> {
        match (self, key) {
            (Self::Object(entries), Key::Field(field)) => entries.get(field),
            (Self::Object(entries), Key::Index(index)) => entries.get(&index.to_string()),
            (Self::Array(items), Key::Index(index)) => items.get(*index),
            (Self::Array(items), Key::Field(field)) => {
                Key::parse_index(field).and_then(|index| items.get(index))
            }
            _ => None,
        }
    }

    /// Reference identity: `true` when both values share the same allocation.
    ///
    /// Scalars have no allocation of their own and compare by value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left.to_bits() == right.to_bits(),
            (Self::String(left), Self::String(right)) => Arc::ptr_eq(left, right),
            (Self::Array(left), Self::Array(right)) => Arc::ptr_eq(left, right),
            (Self::Object(left), Self::Object(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl<K: Into<Key>> Index<K> for Value {
    type Output = Self;

    /// Reads one level down, yielding `Null` when the key is missing.
    fn index(&self, key: K) -> &Self {
        self.get_key(&key.into()).unwrap_or(&NULL)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(Arc::new(items))
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Object(Arc::new(entries))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl IntoMaybe for Value {
    type Value = Self;
    type Mapped = Self;

    fn into_maybe(self) -> Maybe<Self> {
        if self.is_null() {
            Maybe::Nothing
        } else {
            Maybe::Just(self)
        }
    }

    fn into_mapped(self) -> Maybe<Self> {
        self.into_maybe()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::Array(items) => {
                formatter.write_str("[")?;
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Object(entries) => {
                formatter.write_str("{")?;
                for (position, (key, item)) in entries.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key:?}: {item}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Default);

//! Keys and paths into a [`Value`](super::Value).
//!
//! A [`Key`] carries its own shape: `Field` addresses an object entry and
//! `Index` an array slot. When [`assoc`](super::assoc) has to create a
//! missing intermediate container, the shape of the following key decides
//! whether it creates an array or an object.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// One segment of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// An object entry.
    Field(String),
    /// An array slot.
    Index(usize),
}

impl Key {
    /// Returns `true` for `Index`.
    #[inline]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Reads `segment` as an array index when it is a canonical decimal:
    /// ASCII digits only, with no leading zero unless it is `"0"`.
    pub fn parse_index(segment: &str) -> Option<usize> {
        let canonical = !segment.is_empty()
            && segment.bytes().all(|byte| byte.is_ascii_digit())
            && (segment == "0" || !segment.starts_with('0'));
        if canonical {
            segment.parse().ok()
        } else {
            None
        }
    }
}

impl From<&str> for Key {
    fn from(field: &str) -> Self {
        Self::Field(field.to_owned())
    }
}

impl From<String> for Key {
    fn from(field: String) -> Self {
        Self::Field(field)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => formatter.write_str(field),
            Self::Index(index) => write!(formatter, "{index}"),
        }
    }
}

/// Error returned when a dotted path string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The input was empty.
    #[error("path is empty")]
    EmptyPath,
    /// Two dots were adjacent, or the input started or ended with a dot.
    #[error("empty path segment at position {position}")]
    EmptySegment {
        /// Zero-based index of the offending segment.
        position: usize,
    },
}

/// A sequence of keys from the root of a value to a focus.
///
/// # Examples
///
/// ```rust
/// use functools::path;
/// use functools::value::{Key, Path};
///
/// let parsed = Path::parse("address.0").unwrap();
/// assert_eq!(parsed, path!["address", 0usize]);
/// assert_eq!(parsed.keys()[1], Key::Index(0));
/// assert_eq!(parsed.to_string(), "address.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Path {
    keys: Vec<Key>,
}

impl Path {
    /// The empty path, which addresses the whole value.
    #[inline]
    pub const fn root() -> Self {
        Self { keys: Vec::new() }
    }

    /// Builds a path from anything convertible into keys.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a dotted path such as `"pets.dog"` or `"address.0"`.
    ///
    /// Segments made only of ASCII digits become [`Key::Index`].
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyPath`] for an empty string and
    /// [`PathError::EmptySegment`] when any segment is empty.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            debug!("rejected empty path");
            return Err(PathError::EmptyPath);
        }
        input
            .split('.')
            .enumerate()
            .map(|(position, segment)| parse_segment(position, segment))
            .collect::<Result<Vec<_>, _>>()
            .map(|keys| Self { keys })
            .inspect_err(|error| debug!(input, %error, "rejected path"))
    }

    /// The keys, root first.
    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` for the root path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns a new path with `key` appended.
    #[must_use]
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut keys = self.keys.clone();
        keys.push(key.into());
        Self { keys }
    }

    /// Returns a new path with every key of `other` appended.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            keys: self.keys.iter().chain(&other.keys).cloned().collect(),
        }
    }
}

fn parse_segment(position: usize, segment: &str) -> Result<Key, PathError> {
    if segment.is_empty() {
        return Err(PathError::EmptySegment { position });
    }
    Ok(Key::parse_index(segment).map_or_else(|| Key::Field(segment.to_owned()), Key::Index))
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::from_keys(keys)
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Self { keys: vec![key] }
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for Path {
    fn from(keys: [K; N]) -> Self {
        Self::from_keys(keys)
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, key) in self.keys.iter().enumerate() {
            if position > 0 {
                formatter.write_str(".")?;
            }
            write!(formatter, "{key}")?;
        }
        Ok(())
    }
}

/// Builds a [`Path`](crate::value::Path) from a list of keys.
///
/// String literals become fields and `usize` values become indices.
///
/// # Examples
///
/// ```rust
/// use functools::path;
/// use functools::value::Key;
///
/// let focus = path!["address", 1usize];
/// assert_eq!(focus.keys(), &[Key::from("address"), Key::Index(1)]);
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    ($($key:expr),* $(,)?) => {
        $crate::value::Path::from(::std::vec![$($crate::value::Key::from($key)),*])
    };
}

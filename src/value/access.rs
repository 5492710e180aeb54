//! Reading and copy-on-write updating along a path.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::trace;

use super::{Key, Path, Value};

/// Reads the value at `path`.
///
/// Returns `None` as soon as a segment is missing or an intermediate value
/// is not a container. The root path returns `value` itself.
///
/// # Examples
///
/// ```rust
/// use functools::path;
/// use functools::value::{Value, get};
///
/// let address = Value::object([(
///     "address",
///     Value::array([Value::from("22 Walnut St"), Value::from("CA")]),
/// )]);
/// assert_eq!(get(&path!["address", 1usize], &address), Some(&Value::from("CA")));
/// assert_eq!(get(&path!["address", 5usize, "zip"], &address), None);
/// ```
pub fn get<'a>(path: &Path, value: &'a Value) -> Option<&'a Value> {
    path.keys()
        .iter()
        .try_fold(value, |current, key| current.get_key(key))
}

/// Returns a copy of `value` with `new` stored at `path`.
///
/// Only the nodes along the path are copied; every other branch is shared
/// with `value`. A missing (or scalar) intermediate is replaced by a fresh
/// array when the next key is an [`Key::Index`], and by a fresh object
/// otherwise. An `Index` written into an array pads the copy with `Null`,
/// up to a bounded number of slots; any other write produces an object copy,
/// with indices stored under their decimal spelling.
///
/// # Examples
///
/// ```rust
/// use functools::path;
/// use functools::value::{Value, assoc};
///
/// let updated = assoc(&path!["tags", 1usize], Value::from("new"), &Value::Null);
/// assert_eq!(updated.to_string(), r#"{"tags": [null, "new"]}"#);
/// ```
pub fn assoc(path: &Path, new: Value, value: &Value) -> Value {
    assoc_keys(path.keys(), new, value)
}

fn assoc_keys(keys: &[Key], new: Value, target: &Value) -> Value {
    let Some((key, rest)) = keys.split_first() else {
        return new;
    };
    let child = match rest.first() {
        None => new,
        Some(next) => match target.get_key(key) {
            Some(existing) if existing.is_container() => assoc_keys(rest, new, existing),
            _ => {
                trace!(%key, next_is_index = next.is_index(), "creating intermediate container");
                assoc_keys(rest, new, &empty_container(next))
            }
        },
    };
    write_key(target, key, child)
}

fn empty_container(next: &Key) -> Value {
    if next.is_index() {
        Value::Array(Arc::default())
    } else {
        Value::Object(Arc::default())
    }
}

/// Most `Null` slots a single write may append to an array. Writes further
/// past the end turn the array into an object keyed by decimal indices.
const MAX_PADDING: usize = 1 << 16;

fn write_key(target: &Value, key: &Key, child: Value) -> Value {
    match (target, key) {
        (Value::Array(items), Key::Index(index))
            if index.saturating_sub(items.len()) <= MAX_PADDING =>
        {
            let mut items = Vec::clone(items);
            if let Some(slot) = items.get_mut(*index) {
                *slot = child;
            } else {
                items.resize(*index, Value::Null);
                items.push(child);
            }
            Value::Array(Arc::new(items))
        }
        (Value::Object(entries), _) => {
            let mut entries = BTreeMap::clone(entries);
            entries.insert(key.to_string(), child);
            Value::Object(Arc::new(entries))
        }
        (Value::Array(items), _) => {
            if key.is_index() {
                trace!(%key, length = items.len(), "index too far past the end, storing as a field");
            }
            let mut entries: BTreeMap<String, Value> = items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item.clone()))
                .collect();
            entries.insert(key.to_string(), child);
            Value::Object(Arc::new(entries))
        }
        _ => Value::object([(key.to_string(), child)]),
    }
}

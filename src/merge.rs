//! Recursive merging of configuration trees.
//!
//! Two flavours live here:
//!
//! - [`deep_merge`] works on untyped [`serde_json::Value`] trees and is used
//!   for the open-ended style properties a host framework understands but
//!   this crate does not model.
//! - [`Merge`] is implemented by the typed configuration structures. Patch
//!   fields left as `None` keep the target's value, maps merge key by key.
//!
//! Neither flavour mutates its inputs. A merge always produces a new value,
//! which is what lets the config store hand out stable snapshots.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A value that can absorb a partial patch of itself.
pub trait Merge {
    /// The partial form applied on top of `Self`.
    type Patch;

    /// Returns a new value with `patch` applied over `self`.
    fn merged(&self, patch: &Self::Patch) -> Self;
}

/// Deep-merges `source` over `target`, returning a new tree.
///
/// - If `target` is not an object, `source` wins.
/// - If `source` is not an object, `target` wins.
/// - Otherwise every key of `source` is applied over a copy of `target`:
///   arrays replace outright, objects meeting objects recurse, and anything
///   else replaces.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use textskin::deep_merge;
///
/// let merged = deep_merge(
///     &json!({ "a": [1, 2], "b": { "x": 1, "y": 2 } }),
///     &json!({ "a": [3], "b": { "y": 5 } }),
/// );
/// assert_eq!(merged, json!({ "a": [3], "b": { "x": 1, "y": 5 } }));
/// ```
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return match target {
            Value::Object(_) => target.clone(),
            _ => source.clone(),
        };
    };

    let mut output: Map<String, Value> = target_map.clone();
    for (key, source_value) in source_map {
        let merged = match (source_value, target_map.get(key)) {
            (Value::Array(_), _) => source_value.clone(),
            (Value::Object(_), Some(target_value @ Value::Object(_))) => {
                deep_merge(target_value, source_value)
            }
            _ => source_value.clone(),
        };
        output.insert(key.clone(), merged);
    }

    Value::Object(output)
}

/// Merges a keyed map of patchable values.
///
/// Existing entries absorb the patch entry, new keys are inserted as given.
pub(crate) fn merge_map<V>(target: &BTreeMap<String, V>, patch: &BTreeMap<String, V>) -> BTreeMap<String, V>
where
    V: Merge<Patch = V> + Clone,
{
    let mut output = target.clone();
    for (key, value) in patch {
        let merged = match target.get(key) {
            Some(existing) => existing.merged(value),
            None => value.clone(),
        };
        output.insert(key.clone(), merged);
    }
    output
}

/// Picks the patch leaf when present, otherwise keeps the target leaf.
pub(crate) fn merge_leaf<T: Clone>(target: &T, patch: &Option<T>) -> T {
    patch.as_ref().unwrap_or(target).clone()
}

/// Same as [`merge_leaf`] for leaves that are themselves optional.
pub(crate) fn merge_optional<T: Clone>(target: &Option<T>, patch: &Option<T>) -> Option<T> {
    patch.as_ref().or(target.as_ref()).cloned()
}

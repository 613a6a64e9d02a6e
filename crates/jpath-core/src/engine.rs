//! Value accessor engine — walks a `serde_json::Value` along a segment list.
//!
//! Three entry points share one set of stepping rules:
//!
//! - [`get`] borrows and never mutates. A segment whose container kind does
//!   not match the current node, a missing key or an out-of-range index all
//!   short-circuit to `None`.
//! - [`set`] creates whatever is missing. A node of the wrong kind is replaced
//!   by an empty container of the kind the segment expects (its previous
//!   content is discarded), missing keys are inserted, arrays grow with `null`
//!   filler, and the leaf is assigned wholesale.
//! - [`remove`] never creates structure. It walks to the parent of the leaf
//!   and deletes one key or one element; anything unresolvable is a no-op.
//!
//! Mutation goes through `&mut` references, so every ancestor reflects the
//! change as soon as the walk returns.
//!
//! Negative indices count from the end (`len + index`). For `get`/`remove`
//! an effective position outside `0..len` is absent; for `set` a position
//! below zero clamps to `0`, which also covers any negative index on an empty
//! array.

use crate::segment::Segment;
use serde_json::{Map, Value};

/// Borrow the value at `path`, or `None` if any step does not resolve.
pub(crate) fn get<'a>(root: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    path.iter().try_fold(root, step)
}

/// One read-only step into `value`.
pub(crate) fn step<'a>(value: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match value {
        Value::Object(map) => object_child(map, segment),
        Value::Array(items) => array_child(items, segment),
        _ => None,
    }
}

/// Read-only step into an object. Index segments never match an object.
pub(crate) fn object_child<'a>(map: &'a Map<String, Value>, segment: &Segment) -> Option<&'a Value> {
    match segment {
        Segment::Name(key) => map.get(key),
        Segment::Index(_) => None,
    }
}

/// Read-only step into an array. Name segments never match an array.
pub(crate) fn array_child<'a>(items: &'a [Value], segment: &Segment) -> Option<&'a Value> {
    match segment {
        Segment::Index(index) => items.get(resolve_index(*index, items.len())?),
        Segment::Name(_) => None,
    }
}

/// Assign `new_value` at `path`, creating every missing container on the way.
///
/// An empty path replaces `root` itself.
pub(crate) fn set(root: &mut Value, path: &[Segment], new_value: Value) {
    let mut current = &mut *root;
    for segment in path {
        current = match segment {
            Segment::Name(key) => ensure_object(current, segment)
                .entry(key.clone())
                .or_insert(Value::Null),
            Segment::Index(index) => {
                let items = ensure_array(current, segment);
                let position = grow_to(items, *index);
                &mut items[position]
            }
        };
    }
    *current = new_value;
    tracing::trace!(path = ?path, root = %root, "set");
}

/// Delete the leaf at `path` and return it.
///
/// Returns `None` without touching anything when the path does not resolve.
/// The empty path addresses no parent container, so it is a no-op as well.
pub(crate) fn remove(root: &mut Value, path: &[Segment]) -> Option<Value> {
    let (leaf, parents) = path.split_last()?;
    let parent = parents.iter().try_fold(&mut *root, step_mut)?;
    let removed = match (parent, leaf) {
        (Value::Object(map), Segment::Name(key)) => map.shift_remove(key),
        (Value::Array(items), Segment::Index(index)) => {
            let position = resolve_index(*index, items.len())?;
            Some(items.remove(position))
        }
        _ => None,
    }?;
    tracing::trace!(path = ?path, root = %root, "remove");
    Some(removed)
}

fn step_mut<'a>(value: &'a mut Value, segment: &Segment) -> Option<&'a mut Value> {
    match (value, segment) {
        (Value::Object(map), Segment::Name(key)) => map.get_mut(key),
        (Value::Array(items), Segment::Index(index)) => {
            let position = resolve_index(*index, items.len())?;
            items.get_mut(position)
        }
        _ => None,
    }
}

/// Map a possibly negative index onto `0..len`.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let position = if index < 0 {
        i64::try_from(len).ok()?.checked_add(index)?
    } else {
        index
    };
    usize::try_from(position).ok().filter(|&position| position < len)
}

/// Make sure `items` has a slot for `index` and return its position.
fn grow_to(items: &mut Vec<Value>, index: i64) -> usize {
    let position = if index < 0 {
        i64::try_from(items.len())
            .ok()
            .and_then(|len| len.checked_add(index))
            .and_then(|position| usize::try_from(position).ok())
            .unwrap_or(0)
    } else {
        usize::try_from(index).unwrap_or(usize::MAX)
    };
    if position >= items.len() {
        items.resize(position.saturating_add(1), Value::Null);
    }
    position
}

fn ensure_object<'a>(value: &'a mut Value, segment: &Segment) -> &'a mut Map<String, Value> {
    if !value.is_object() {
        replace_with_container(value, segment, Value::Object(Map::new()));
    }
    match value {
        Value::Object(map) => map,
        other => unreachable!("expected an object after coercion, found {}", kind_of(other)),
    }
}

fn ensure_array<'a>(value: &'a mut Value, segment: &Segment) -> &'a mut Vec<Value> {
    if !value.is_array() {
        replace_with_container(value, segment, Value::Array(Vec::new()));
    }
    match value {
        Value::Array(items) => items,
        other => unreachable!("expected an array after coercion, found {}", kind_of(other)),
    }
}

fn replace_with_container(value: &mut Value, segment: &Segment, container: Value) {
    // Null is the filler for missing slots, replacing it loses nothing.
    if !value.is_null() {
        tracing::debug!(
            expected = segment.container_kind(),
            found = kind_of(value),
            "discarding value to make room for a container"
        );
    }
    *value = container;
}

/// Human-readable kind name used in diagnostics and panics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! # jpath-core
//!
//! Path-addressed access to nested JSON values: read with [`get`], write with
//! automatic creation of missing structure with [`set`], and delete with
//! [`remove`].
//!
//! Paths come in two forms that resolve identically:
//!
//! - **String paths** like `"name0/name1[2]"`: names separated by `/`, with
//!   bracketed integer indices. See [`parser`] for the full grammar and
//!   [`PathSyntax`] for other separators.
//! - **List paths** like `path!["name0", "name1", 2]`: strings are object
//!   keys, integers are array indices. Names may contain any character,
//!   including the separator and brackets.
//!
//! ## Quick start
//!
//! ```rust
//! use jpath_core::{get, get_or, path, remove, set};
//! use serde_json::{json, Value};
//!
//! let mut doc = Value::Null;
//! set(&mut doc, "name0/name1[2]", "abc");
//! assert_eq!(doc, json!({"name0": {"name1": [null, null, "abc"]}}));
//!
//! assert_eq!(get(&doc, &path!["name0", "name1", -1]), Some(json!("abc")));
//! assert_eq!(get_or(&doc, "name0/missing", json!(55)), json!(55));
//!
//! remove(&mut doc, "name0/name1[0]");
//! assert_eq!(get(&doc, "name0/name1"), Some(json!([null, "abc"])));
//! ```
//!
//! ## Modules
//!
//! - [`segment`] — `Segment` / `Path` model and the `path!` macro
//! - [`parser`] — string path → `Path`, separator configuration
//! - [`root`] — root adapters for `Value`, `Map`, `Vec<Value>` and [`Document`]
//! - [`error`] — error types for conversions from untyped input

mod engine;
pub mod error;
pub mod parser;
pub mod root;
pub mod segment;

pub use error::JpathError;
pub use parser::{split_path, PathSyntax, DEFAULT_SEPARATOR};
pub use root::{Document, JsonRoot};
pub use segment::{AsPath, Path, Segment};

use serde_json::Value;

/// Look up the value at `path`.
///
/// Returns `None` when any step does not resolve: a missing key, an index out
/// of range, or a node whose kind does not match the segment (a name applied
/// to an array, an index applied to an object or scalar). Never mutates.
///
/// The empty path returns the root itself.
pub fn get<R: JsonRoot>(root: &R, path: impl AsPath) -> Option<Value> {
    root.lookup(&path.as_segments())
}

/// Like [`get`], but returns `default` when the path does not resolve.
///
/// A stored `null` resolves and is returned as is; only absence falls back.
///
/// ```
/// use jpath_core::get_or;
/// use serde_json::json;
///
/// let doc = json!({"a": null});
/// assert_eq!(get_or(&doc, "a", json!(false)), json!(null));
/// assert_eq!(get_or(&doc, "b", json!(false)), json!(false));
/// ```
pub fn get_or<R: JsonRoot>(root: &R, path: impl AsPath, default: Value) -> Value {
    get(root, path).unwrap_or(default)
}

/// Assign `new_value` at `path`, creating every missing container.
///
/// Nodes along the way whose kind does not match the next segment are
/// replaced by an empty container of the right kind. Arrays too short for an
/// index are padded with `null`. The leaf is replaced wholesale. The empty
/// path replaces the root.
///
/// # Panics
///
/// Panics when the root is an object-rooted `Map` and the operation would
/// turn it into an array, or an array-rooted `Vec<Value>` and it would turn
/// into an object. Both are caller bugs, not runtime conditions.
///
/// ```
/// use jpath_core::set;
/// use serde_json::json;
///
/// let mut doc = json!({"a": "scalar"});
/// set(&mut doc, "a/b", 1);
/// assert_eq!(doc, json!({"a": {"b": 1}}));
/// ```
pub fn set<R: JsonRoot>(root: &mut R, path: impl AsPath, new_value: impl Into<Value>) {
    let segments = path.as_segments();
    let new_value = new_value.into();
    root.with_value(|value| engine::set(value, &segments, new_value));
}

/// Delete the object key or array element at `path` and return it.
///
/// Later array elements shift down by one. Does nothing and returns `None`
/// when the path does not resolve; never creates structure.
///
/// # Panics
///
/// Same root-shape rules as [`set`]; removal alone can never violate them.
pub fn remove<R: JsonRoot>(root: &mut R, path: impl AsPath) -> Option<Value> {
    let segments = path.as_segments();
    root.with_value(|value| engine::remove(value, &segments))
}

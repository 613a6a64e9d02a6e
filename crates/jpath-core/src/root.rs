//! Root-type adapters.
//!
//! Every operation runs the engine against a generic `serde_json::Value`.
//! [`JsonRoot`] is the normalization step that lets object-rooted,
//! array-rooted and document roots share that engine while keeping their own
//! top-level shape:
//!
//! | Root                | Shape after set/remove                                  |
//! |---------------------|---------------------------------------------------------|
//! | `Value`             | anything                                                |
//! | `Map<String, Value>`| object; becoming an array panics, a scalar empties it   |
//! | `Vec<Value>`        | array; becoming an object panics, a scalar empties it   |
//! | [`Document`]        | object or array, whichever the engine produced          |

use crate::engine;
use crate::error::{JpathError, Result};
use crate::segment::Segment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// A JSON tree that path operations can be applied to.
pub trait JsonRoot {
    /// Clone out the value at `path`, or `None` if it does not resolve.
    fn lookup(&self, path: &[Segment]) -> Option<Value>;

    /// Run `f` against the root viewed as a generic value, then restore the
    /// root's own shape from whatever `f` left behind.
    fn with_value<T>(&mut self, f: impl FnOnce(&mut Value) -> T) -> T;
}

impl JsonRoot for Value {
    fn lookup(&self, path: &[Segment]) -> Option<Value> {
        engine::get(self, path).cloned()
    }

    fn with_value<T>(&mut self, f: impl FnOnce(&mut Value) -> T) -> T {
        f(self)
    }
}

impl JsonRoot for Map<String, Value> {
    fn lookup(&self, path: &[Segment]) -> Option<Value> {
        match path.split_first() {
            None => Some(Value::Object(self.clone())),
            Some((first, rest)) => engine::get(engine::object_child(self, first)?, rest).cloned(),
        }
    }

    /// # Panics
    ///
    /// Panics if `f` turns the root into an array, e.g. by setting a path
    /// that starts with an index. An object root can never become an array.
    fn with_value<T>(&mut self, f: impl FnOnce(&mut Value) -> T) -> T {
        let mut value = Value::Object(std::mem::take(self));
        let out = f(&mut value);
        *self = match value {
            Value::Object(map) => map,
            Value::Array(_) => panic!("object root cannot become an array; path must start with a name"),
            _ => Map::new(),
        };
        out
    }
}

impl JsonRoot for Vec<Value> {
    fn lookup(&self, path: &[Segment]) -> Option<Value> {
        match path.split_first() {
            None => Some(Value::Array(self.clone())),
            Some((first, rest)) => engine::get(engine::array_child(self, first)?, rest).cloned(),
        }
    }

    /// # Panics
    ///
    /// Panics if `f` turns the root into an object, e.g. by setting a path
    /// that starts with a name. An array root can never become an object.
    fn with_value<T>(&mut self, f: impl FnOnce(&mut Value) -> T) -> T {
        let mut value = Value::Array(std::mem::take(self));
        let out = f(&mut value);
        *self = match value {
            Value::Array(items) => items,
            Value::Object(_) => panic!("array root cannot become an object; path must start with an index"),
            _ => Vec::new(),
        };
        out
    }
}

/// A JSON text whose top level is an object or an array.
///
/// Unlike the object- and array-rooted adapters, a document may switch
/// between the two: setting `"[0]"` on an object document turns it into an
/// array document.
///
/// ```
/// use jpath_core::{set, Document};
///
/// let mut doc: Document = r#"{"a": 1}"#.parse().unwrap();
/// set(&mut doc, "[1]", "x");
/// assert!(doc.is_array());
/// assert_eq!(doc.as_array().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Document {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

impl Default for Document {
    /// An empty object.
    fn default() -> Self {
        Document::Object(Map::new())
    }
}

impl Document {
    pub fn is_object(&self) -> bool {
        matches!(self, Document::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Document::Array(_))
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Document::Object(map) => Some(map),
            Document::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Document::Array(items) => Some(items),
            Document::Object(_) => None,
        }
    }
}

impl JsonRoot for Document {
    fn lookup(&self, path: &[Segment]) -> Option<Value> {
        match self {
            Document::Object(map) => map.lookup(path),
            Document::Array(items) => items.lookup(path),
        }
    }

    fn with_value<T>(&mut self, f: impl FnOnce(&mut Value) -> T) -> T {
        let mut value = Value::from(std::mem::take(self));
        let out = f(&mut value);
        *self = match value {
            Value::Array(items) => Document::Array(items),
            Value::Object(map) => Document::Object(map),
            _ => Document::default(),
        };
        out
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Object(map) => Value::Object(map),
            Document::Array(items) => Value::Array(items),
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = JpathError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Document::Object(map)),
            Value::Array(items) => Ok(Document::Array(items)),
            other => Err(JpathError::NotADocument(engine::kind_of(&other))),
        }
    }
}

impl FromStr for Document {
    type Err = JpathError;

    /// Parse JSON text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`JpathError::Json`] for malformed JSON and
    /// [`JpathError::NotADocument`] when the top level is a scalar.
    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Document::try_from(value)
    }
}

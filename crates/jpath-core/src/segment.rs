//! Segment model shared by string paths and list paths.
//!
//! A [`Path`] is an ordered list of [`Segment`]s. Names address object keys,
//! indices address array elements. Once built a path no longer depends on any
//! separator, so it can be parsed once and shared freely across threads.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One unit of a path.
///
/// Serialized untagged: a JSON string is a [`Segment::Name`], a JSON integer
/// is a [`Segment::Index`]. Anything else fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Object key. The empty string is a valid key.
    Name(String),
    /// Array index. Negative values count from the end, `-1` is the last element.
    Index(i64),
}

impl Segment {
    /// Container kind this segment expects to step into.
    pub(crate) fn container_kind(&self) -> &'static str {
        match self {
            Segment::Name(_) => "object",
            Segment::Index(_) => "array",
        }
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Name(name.to_owned())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Name(name)
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Segment::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(i64::from(index))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// An ordered list of segments. The empty path addresses the root itself.
///
/// # Examples
///
/// ```
/// use jpath_core::{path, Path, Segment};
///
/// let p = path!["users", 0, "name"];
/// assert_eq!(p.len(), 3);
/// assert_eq!(p.segments()[1], Segment::Index(0));
/// assert_eq!(p.to_string(), "users[0]/name");
/// assert_eq!(Path::new().push("a").push(-1), path!["a", -1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Segment>);

impl Path {
    /// Create an empty path (the root).
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a segment, builder style.
    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        self.0.push(segment.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders the path with the default `/` separator.
///
/// Indices attach to the preceding name without a separator, so
/// `["a", 1, "b"]` renders as `a[1]/b`. Names containing the separator or
/// brackets do not survive a render-then-parse trip; use list paths for those.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 && matches!(segment, Segment::Name(_)) {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Anything the public operations accept as a path.
///
/// Strings are parsed with the default syntax (separator `/`). To parse with a
/// different separator, build a [`Path`] first via
/// [`PathSyntax::split`](crate::PathSyntax::split).
pub trait AsPath {
    fn as_segments(&self) -> Cow<'_, [Segment]>;
}

impl AsPath for &str {
    fn as_segments(&self) -> Cow<'_, [Segment]> {
        Cow::Owned(crate::parser::split_path(self).into_segments())
    }
}

impl AsPath for String {
    fn as_segments(&self) -> Cow<'_, [Segment]> {
        Cow::Owned(crate::parser::split_path(self).into_segments())
    }
}

impl AsPath for &String {
    fn as_segments(&self) -> Cow<'_, [Segment]> {
        Cow::Owned(crate::parser::split_path(self).into_segments())
    }
}

impl AsPath for Path {
    fn as_segments(&self) -> Cow<'_, [Segment]> {
        Cow::Borrowed(&self.0)
    }
}

impl AsPath for &Path {
    fn as_segments(&self) -> Cow<'_, [Segment]> {
        Cow::Borrowed(&self.0)
    }
}

impl AsPath for &[Segment] {
    fn as_segments(&self) -> Cow<'_, [Segment]> {
        Cow::Borrowed(self)
    }
}

impl AsPath for Vec<Segment> {
    fn as_segments(&self) -> Cow<'_, [Segment]> {
        Cow::Borrowed(self)
    }
}

/// Build a [`Path`] from string and integer literals.
///
/// Strings become names, integers become indices:
///
/// ```
/// use jpath_core::{path, Segment};
///
/// let p = path!["name2", "name /2", "time [ms]"];
/// assert_eq!(p.segments()[1], Segment::Name("name /2".into()));
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::Path::from(vec![$($crate::Segment::from($segment)),+])
    };
}

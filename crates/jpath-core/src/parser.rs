//! Path parser — string expression → [`Path`].
//!
//! # Grammar
//!
//! - Segments are joined by the separator (default `/`). A leading, trailing or
//!   doubled separator produces an empty-string name.
//! - A name may be followed by bracketed integer indices: `name[2]`,
//!   `name[1][-1]`. The name is flushed as its own segment (unless empty) and
//!   each index becomes a [`Segment::Index`].
//! - Bracket content that is not a base-10 integer is literal text, so
//!   `time [ms]` is the single name `"time [ms]"`. No error is raised.
//! - Text between a closing index bracket and the next separator is dropped.
//! - The empty string is the empty path, i.e. the root.
//!
//! # Examples
//!
//! ```
//! use jpath_core::{path, split_path, PathSyntax};
//!
//! assert_eq!(split_path("name0/name1[2]"), path!["name0", "name1", 2]);
//! assert_eq!(split_path("[1]/x"), path![1, "x"]);
//!
//! let dotted = PathSyntax::new('.').unwrap();
//! assert_eq!(dotted.split("a.b[1]"), split_path("a/b[1]"));
//! ```

use crate::error::{JpathError, Result};
use crate::segment::{Path, Segment};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

const BRACKET_OPEN: char = '[';
const BRACKET_CLOSE: char = ']';

/// Separator used when no [`PathSyntax`] is given.
pub const DEFAULT_SEPARATOR: char = '/';

/// String path syntax configuration.
///
/// Passed explicitly to [`PathSyntax::split`] instead of living in shared
/// mutable state, so concurrent callers with different separators never
/// interfere. Only string paths depend on it; list paths carry no separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSyntax")]
pub struct PathSyntax {
    separator: char,
}

/// Unvalidated form of [`PathSyntax`] as it appears in configuration files.
#[derive(Deserialize)]
#[serde(default)]
struct RawSyntax {
    separator: char,
}

impl Default for RawSyntax {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl TryFrom<RawSyntax> for PathSyntax {
    type Error = JpathError;

    fn try_from(raw: RawSyntax) -> Result<Self> {
        Self::new(raw.separator)
    }
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl PathSyntax {
    /// Create a syntax using `separator` between segments.
    ///
    /// # Errors
    ///
    /// Returns [`JpathError::InvalidSeparator`] for `[` or `]`, which are
    /// reserved for index suffixes.
    pub fn new(separator: char) -> Result<Self> {
        if separator == BRACKET_OPEN || separator == BRACKET_CLOSE {
            return Err(JpathError::InvalidSeparator(separator));
        }
        Ok(Self { separator })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Split a string path into segments.
    ///
    /// Never fails: malformed brackets fold into the surrounding name.
    pub fn split(&self, path: &str) -> Path {
        let mut segments = Vec::new();
        if path.is_empty() {
            return Path::from(segments);
        }

        // Byte offset where the pending name starts; `None` right after an
        // index bracket, until the next separator.
        let mut name_start = Some(0);
        // Byte offset just past the most recent `[`.
        let mut index_start: Option<usize> = None;

        for (pos, ch) in path.char_indices() {
            if ch == self.separator {
                if let Some(start) = name_start {
                    segments.push(Segment::Name(path[start..pos].to_owned()));
                }
                name_start = Some(pos + ch.len_utf8());
                index_start = None;
            } else if ch == BRACKET_OPEN {
                index_start = Some(pos + ch.len_utf8());
            } else if ch == BRACKET_CLOSE {
                let Some(start) = index_start else {
                    continue;
                };
                let Ok(index) = path[start..pos].parse::<i64>() else {
                    continue;
                };
                let bracket = start - BRACKET_OPEN.len_utf8();
                if let Some(name) = name_start.filter(|&name| bracket > name) {
                    segments.push(Segment::Name(path[name..bracket].to_owned()));
                }
                segments.push(Segment::Index(index));
                name_start = None;
                index_start = None;
            }
        }

        if let Some(start) = name_start {
            segments.push(Segment::Name(path[start..].to_owned()));
        }
        Path::from(segments)
    }
}

/// Split `path` using the default `/` separator.
pub fn split_path(path: &str) -> Path {
    PathSyntax::default().split(path)
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(split_path(s))
    }
}

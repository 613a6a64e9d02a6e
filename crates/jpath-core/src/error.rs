//! Error types for jpath operations.
//!
//! Only conversions from untyped input can fail. A path that does not resolve
//! is ordinary control flow (`None` from [`crate::get`], a no-op for
//! [`crate::remove`]) and never produces an error.

use thiserror::Error;

/// Errors that can occur while building paths, syntaxes or documents.
#[derive(Error, Debug)]
pub enum JpathError {
    /// JSON text (a document or a list-form path) failed to parse.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested separator collides with the index bracket syntax.
    #[error("Invalid separator {0:?}: brackets are reserved for array indices")]
    InvalidSeparator(char),

    /// A document must hold an object or an array at its top level.
    #[error("Not a document: top-level value is {0}, expected object or array")]
    NotADocument(&'static str),
}

/// Convenience alias used throughout jpath-core.
pub type Result<T> = std::result::Result<T, JpathError>;

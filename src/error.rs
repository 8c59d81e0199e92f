//! Error types for trueno-painter operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting draw expressions.
///
/// Layout strings never produce errors: a malformed row simply
/// contributes no regions.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (configuration file access).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Draw expression is structurally broken (unbalanced parentheses,
    /// non-numeric projection index).
    #[error("Malformed expression `{expression}`: {reason}")]
    MalformedExpression {
        /// Expression text as given.
        expression: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Named histogram is absent from both the store and the fallback source.
    #[error("Histogram not found: {0}")]
    NotFound(String),

    /// Projection asks for more axes than the histogram has.
    #[error("Insufficient dimensions: projection requests {requested} axes, histogram `{name}` has {available}")]
    DimensionMismatch {
        /// Histogram name.
        name: String,
        /// Number of projection indices.
        requested: usize,
        /// Declared dimensionality of the histogram.
        available: usize,
    },

    /// Projection index out of range or repeated.
    #[error("Invalid projection axis {axis} for a {dimensions}-dimensional histogram")]
    InvalidAxis {
        /// Offending axis index.
        axis: usize,
        /// Declared dimensionality of the histogram.
        dimensions: usize,
    },

    /// Range clause is not two parseable bounds.
    #[error("Invalid range `{0}`")]
    InvalidRange(String),

    /// Histogram construction error (zero bins, bad edges, ...).
    #[error("Invalid histogram: {0}")]
    InvalidHistogram(String),

    /// Configuration file could not be parsed.
    #[error("config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// Configuration key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Rendering backend error.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

impl Error {
    /// Whether the error is informational rather than a hard failure.
    ///
    /// A missing histogram is routine in interactive sessions.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by profile construction, comparison and caching.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The accumulated sample contained no alphabetic characters, so
    /// frequencies cannot be computed.
    #[error("sample contains no alphabetic characters")]
    EmptySample,

    /// Retrieving text from an external source failed.
    #[error("failed to fetch text from {locator}")]
    Fetch {
        locator: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Correlation inputs must have the same number of entries.
    #[error("profile length mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Correlation of a zero-variance vector has no defined value.
    #[error("correlation is undefined for zero-variance input")]
    UndefinedCorrelation,

    /// A cache entry exists but does not hold a valid frequency array.
    #[error("malformed cache entry {}: {reason}", path.display())]
    MalformedProfile { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

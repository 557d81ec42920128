use thiserror::Error;

/// Errors raised by the sweep itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("segment {segment} has zero length")]
    ZeroLength { segment: usize },

    #[error("segment {segment} has a non-finite coordinate")]
    NonFinite { segment: usize },

    /// A segment the sweep expected in the status was not there. This is
    /// an internal-consistency failure, not a property of the input.
    #[error("segment {segment} is missing from the sweep status")]
    MissingSegment { segment: usize },

    #[error("sweep exceeded the limit of {limit} processed events")]
    EventLimit { limit: usize },
}

/// Errors raised while reading a segment file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("input is empty, expected a segment count")]
    MissingCount,

    #[error("invalid segment count {token:?}")]
    InvalidCount { token: String },

    #[error("line {line}: expected 4 coordinates, found {found}")]
    WrongTokenCount { line: usize, found: usize },

    #[error("line {line}: invalid integer {token:?}")]
    InvalidToken { line: usize, token: String },

    #[error("expected {expected} segments, found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("line {line}: segment has zero length")]
    ZeroLength { line: usize },
}

/// Convenience type alias for results using [`SweepError`].
pub type Result<T> = std::result::Result<T, SweepError>;

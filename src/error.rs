//! Error types for rs-readability.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base URL supplied for relative-link resolution could not be parsed.
    ///
    /// This is the only failure extraction surfaces; a document with no
    /// extractable article yields a valid empty result instead.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

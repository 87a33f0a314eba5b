//! Error types for list header parsing.

/// Result type alias for list header operations.
pub type Result<T> = std::result::Result<T, Error>;

/// List header parse errors.
///
/// Serialization never fails; every variant here comes from parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Field value was empty after trimming spaces and tabs.
    #[error("Empty field value")]
    Empty,

    /// A bracketed entry was rejected by the IRI parser.
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Value contained no bracketed IRI and was not `NO`.
    #[error("No URIs found in value: {0}")]
    NoUris(String),
}

impl Error {
    /// Returns the offending text, if the error carries any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::InvalidIri(text) | Self::NoUris(text) => Some(text),
        }
    }
}

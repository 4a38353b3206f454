use thiserror::Error;

/// Failures of the extraction engine.
///
/// Only the orchestrators surface these to callers; secondary sections
/// (pagination, correction) downgrade them to warnings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{section} has {found} elements ({expected} expected)")]
    ShapeMismatch {
        section: &'static str,
        found: usize,
        expected: &'static str,
    },

    #[error("page has no results for `{search_term}`")]
    EmptyResultSet { search_term: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid search url `{0}`")]
    InvalidUrl(String),

    #[error("invalid header value `{0}`")]
    InvalidHeader(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

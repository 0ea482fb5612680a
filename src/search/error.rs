use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// No usable origin could be determined, so no search was issued.
    #[error("location unavailable")]
    LocationUnavailable,

    /// Transport failure, timeout or non-2xx status from a remote API.
    #[error("remote unavailable: {0}")]
    RemoteUnavailable(String),

    /// The remote answered but the expected result field was missing or unreadable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    pub fn remote(e: impl std::fmt::Display) -> Self {
        SearchError::RemoteUnavailable(e.to_string())
    }

    pub fn malformed(e: impl std::fmt::Display) -> Self {
        SearchError::MalformedResponse(e.to_string())
    }
}

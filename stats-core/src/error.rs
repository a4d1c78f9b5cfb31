use thiserror::Error;

/// Failure of a single identifier's lookup. One failed lookup never aborts
/// the batch; the error stays on the slot that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Payload(String),

    #[error("no video found for this ID")]
    UnknownVideo,

    #[error("response missing {0}")]
    MissingField(&'static str),
}

/// Rejection of a fetch trigger before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter at least one Video ID")]
    NoIdentifiers,
}

use thiserror::Error;

/// Failure taxonomy for the scrape pipeline.
///
/// Every variant terminates the run: the CLI prints the message to stderr
/// and exits nonzero without emitting any stdout payload.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The stdin request was malformed or its URL has the wrong shape.
    #[error("invalid request: {0}")]
    Input(String),

    /// The upstream index answered `found: false` for the scene ID.
    #[error("Scene not found (Wrong ID?)")]
    NotFound,

    /// Transport-level failure talking to the API (DNS, refused, timeout).
    #[error("API request failed: {0}")]
    Network(String),

    /// The upstream or cached record does not match the expected shape.
    #[error("malformed scene record: {0}")]
    Record(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// True for errors caused by the request itself rather than by the
    /// upstream or the environment.
    pub fn is_input(&self) -> bool {
        matches!(self, ScrapeError::Input(_))
    }
}

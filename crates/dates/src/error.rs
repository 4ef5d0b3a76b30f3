use thiserror::Error;

/// Failures talking to the repository search API. None of these are retried.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Connection, timeout or body read failure.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Body was not JSON, or `response.numFound` / `response.docs` / a record's `date_dsi` was missing.
    #[error("malformed search response: {0}")]
    MalformedUpstreamResponse(#[source] serde_json::Error),
}

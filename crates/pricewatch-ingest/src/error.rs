use thiserror::Error;

/// Errors returned by the price-tracking API client.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with something other than 200 or 201.
    #[error("price update rejected with HTTP {status}")]
    UnexpectedStatus { status: u16 },

    /// The configured backend base URL cannot be parsed.
    #[error("invalid backend URL \"{url}\": {reason}")]
    InvalidBackendUrl { url: String, reason: String },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("no scraper available for host \"{host}\"")]
    UnsupportedRetailer { host: String },

    #[error("HTTP {status} for {url}")]
    FetchStatus { status: u16, url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{field} not found for {url}")]
    ExtractionIncomplete { field: &'static str, url: String },
}

impl ScrapeError {
    /// HTTP status associated with the failure, when one was observed.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ScrapeError::FetchStatus { status, .. } => Some(*status),
            ScrapeError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

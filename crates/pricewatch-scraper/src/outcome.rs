use pricewatch_core::ProductRecord;

use crate::error::ScrapeError;

/// Result of scraping one URL. Exactly one variant is produced per URL;
/// failures carry a human-readable message and the HTTP status when one
/// was observed.
#[derive(Debug)]
pub enum ScrapeOutcome {
    Success(ProductRecord),
    Failure {
        message: String,
        status_code: Option<u16>,
    },
}

impl ScrapeOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Success(_))
    }

    #[must_use]
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            ScrapeOutcome::Success(record) => Some(record),
            ScrapeOutcome::Failure { .. } => None,
        }
    }
}

impl From<ScrapeError> for ScrapeOutcome {
    fn from(error: ScrapeError) -> Self {
        ScrapeOutcome::Failure {
            status_code: error.status_code(),
            message: error.to_string(),
        }
    }
}

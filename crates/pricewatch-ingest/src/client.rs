//! HTTP client for the price-tracking API's price-update endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use pricewatch_core::ProductRecord;

use crate::error::IngestError;
use crate::types::PriceUpdate;

const PRICE_UPDATE_PATH: &str = "api/price-updates";

/// Client for delivering scraped records to the price-tracking API.
///
/// Construct with the backend base URL — the tests point this at a mock
/// server.
pub struct IngestClient {
    client: Client,
    endpoint: Url,
}

impl IngestClient {
    /// Creates a client for the backend at `base_url` with the given send
    /// timeout.
    ///
    /// # Errors
    ///
    /// - [`IngestError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    /// - [`IngestError::InvalidBackendUrl`] if `base_url` is not a valid
    ///   URL base.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("pricewatch/0.1 (price-tracking)")
            .build()?;

        // Normalise: exactly one trailing slash so join() appends to the
        // root path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| IngestError::InvalidBackendUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        let endpoint = base
            .join(PRICE_UPDATE_PATH)
            .map_err(|e| IngestError::InvalidBackendUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Delivers one scraped record as a price update.
    ///
    /// # Errors
    ///
    /// - [`IngestError::UnexpectedStatus`] — any response other than 200
    ///   or 201.
    /// - [`IngestError::Http`] — network failure or timeout.
    pub async fn send_price_update(&self, record: &ProductRecord) -> Result<(), IngestError> {
        let payload = PriceUpdate::from(record);
        tracing::debug!(endpoint = %self.endpoint, product = %payload.product_name, "sending price update");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        if matches!(status, 200 | 201) {
            tracing::info!(product = %payload.product_name, "price update accepted");
            Ok(())
        } else {
            Err(IngestError::UnexpectedStatus { status })
        }
    }
}

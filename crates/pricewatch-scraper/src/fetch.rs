//! HTTP fetch collaborator for product pages.
//!
//! Two routing modes: direct fetch with a browser-like header set, or a
//! third-party scraping gateway that is handed the target URL, an API key,
//! and a cost ceiling. The extraction core never sees the difference —
//! both modes hand back the page body as text.

use std::time::Duration;

use reqwest::{Client, Url};

use pricewatch_core::AppConfig;

use crate::error::ScrapeError;

/// How page fetches are routed. No `Debug` derive: the proxied variant
/// carries the gateway API key.
#[derive(Clone)]
pub enum FetchMode {
    /// GET the target URL directly.
    Direct,
    /// GET the scraping gateway, passing the target URL as a query param.
    Proxied {
        gateway_url: String,
        api_key: String,
        max_cost: String,
    },
}

pub struct FetchClient {
    client: Client,
    mode: FetchMode,
}

impl FetchClient {
    /// Creates a `FetchClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(mode: FetchMode, timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, mode })
    }

    /// Builds a client from application configuration, selecting proxied
    /// routing when the gateway toggle is on and a key is present.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScrapeError> {
        let mode = match (&config.scraper_api_key, config.use_scraper_api) {
            (Some(key), true) => FetchMode::Proxied {
                gateway_url: config.scraper_api_url.clone(),
                api_key: key.clone(),
                max_cost: config.scraper_api_max_cost.clone(),
            },
            _ => FetchMode::Direct,
        };
        Self::new(mode, config.fetch_timeout_secs, &config.user_agent)
    }

    /// Fetches one product page and returns its body.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::FetchStatus`] — any non-2xx response.
    /// - [`ScrapeError::Http`] — network failure or timeout.
    /// - [`ScrapeError::InvalidUrl`] — the configured gateway URL cannot
    ///   be parsed.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let request = match &self.mode {
            FetchMode::Direct => self
                .client
                .get(url)
                .header(
                    reqwest::header::ACCEPT,
                    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
                )
                .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                .header("Upgrade-Insecure-Requests", "1"),
            FetchMode::Proxied {
                gateway_url,
                api_key,
                max_cost,
            } => {
                let gateway = gateway_request_url(gateway_url, api_key, url, max_cost)?;
                self.client.get(gateway)
            }
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScrapeError::FetchStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        tracing::debug!(url, status = status.as_u16(), "fetched page");
        Ok(response.text().await?)
    }
}

/// Builds the gateway request URL carrying the target URL, key, and cost
/// ceiling as query parameters.
fn gateway_request_url(
    gateway_url: &str,
    api_key: &str,
    target_url: &str,
    max_cost: &str,
) -> Result<Url, ScrapeError> {
    let mut url = Url::parse(gateway_url).map_err(|e| ScrapeError::InvalidUrl {
        url: gateway_url.to_owned(),
        reason: e.to_string(),
    })?;

    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("url", target_url)
        .append_pair("max_cost", max_cost);

    Ok(url)
}

//! Full-run orchestration: scrape every manifest URL, deliver each
//! successful record, and aggregate counts for the exit decision.

use std::time::Duration;

use pricewatch_core::AppConfig;
use pricewatch_ingest::IngestClient;
use pricewatch_scraper::{scrape_batch, FetchClient, PageScraper, ScrapeOutcome};

/// Counters for one run. The process exits 0 only when every URL both
/// scraped and delivered.
#[derive(Debug)]
pub struct RunSummary {
    pub total: usize,
    pub scraped: usize,
    pub scrape_failures: usize,
    pub delivered: usize,
    pub delivery_failures: usize,
}

impl RunSummary {
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.scrape_failures == 0 && self.delivery_failures == 0
    }
}

/// Scrapes `urls` sequentially and forwards each successful record to the
/// price-tracking API. Scrape failures and delivery failures are counted
/// separately; neither stops the run.
///
/// # Errors
///
/// Fails only on setup problems (HTTP client construction, bad backend
/// URL) — per-URL faults are absorbed into the summary.
pub async fn run(config: &AppConfig, urls: &[String]) -> anyhow::Result<RunSummary> {
    let fetch = FetchClient::from_config(config)?;
    let scraper = PageScraper::new(fetch);
    let ingest = IngestClient::new(&config.backend_api_url, config.send_timeout_secs)?;

    let pacing = Duration::from_secs(config.pacing_secs);
    let outcomes = scrape_batch(&scraper, urls, pacing).await;

    let mut summary = RunSummary {
        total: urls.len(),
        scraped: 0,
        scrape_failures: 0,
        delivered: 0,
        delivery_failures: 0,
    };

    for outcome in &outcomes {
        match outcome {
            ScrapeOutcome::Success(record) => {
                summary.scraped += 1;
                match ingest.send_price_update(record).await {
                    Ok(()) => summary.delivered += 1,
                    Err(e) => {
                        tracing::error!(url = %record.source_url, error = %e, "delivery failed");
                        summary.delivery_failures += 1;
                    }
                }
            }
            ScrapeOutcome::Failure { message, .. } => {
                summary.scrape_failures += 1;
                tracing::error!(%message, "scrape failed");
            }
        }
    }

    Ok(summary)
}

pub fn log_summary(summary: &RunSummary) {
    tracing::info!(
        total = summary.total,
        scraped = summary.scraped,
        scrape_failures = summary.scrape_failures,
        delivered = summary.delivered,
        delivery_failures = summary.delivery_failures,
        "run summary"
    );
}

//! Sequential batch orchestration over a URL list.

use std::time::Duration;

use crate::outcome::ScrapeOutcome;
use crate::scrape::PageScraper;

/// Scrapes `urls` in input order, one at a time, pausing `pacing` between
/// consecutive fetches (not after the last).
///
/// One URL's failure never aborts the batch: classification failures and
/// fetch/parse faults are captured as `Failure` outcomes in place. The
/// returned outcomes are index-aligned with the input.
pub async fn scrape_batch(
    scraper: &PageScraper,
    urls: &[String],
    pacing: Duration,
) -> Vec<ScrapeOutcome> {
    tracing::info!(count = urls.len(), "starting batch scrape");

    let mut outcomes = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        outcomes.push(scraper.scrape_one(url).await);

        if i + 1 < urls.len() {
            tracing::debug!(secs = pacing.as_secs(), "pacing before next fetch");
            tokio::time::sleep(pacing).await;
        }
    }

    let successful = outcomes.iter().filter(|o| o.is_success()).count();
    tracing::info!(
        successful,
        failed = outcomes.len() - successful,
        "batch scrape complete"
    );

    outcomes
}

//! Single-page scrape orchestration: fetch → parse → extract → validate.

use reqwest::Url;
use rust_decimal::Decimal;
use scraper::Html;

use pricewatch_core::ProductRecord;

use crate::error::ScrapeError;
use crate::extract;
use crate::fetch::FetchClient;
use crate::outcome::ScrapeOutcome;
use crate::retailer::{classify_retailer, parse_product_url};

pub struct PageScraper {
    fetch: FetchClient,
}

impl PageScraper {
    #[must_use]
    pub fn new(fetch: FetchClient) -> Self {
        Self { fetch }
    }

    /// Scrapes one product page into a tagged outcome.
    ///
    /// Every fault — malformed URL, network failure, bad status,
    /// unsupported retailer, missing title or price — is converted into a
    /// [`ScrapeOutcome::Failure`]; this never propagates an error for a
    /// single URL.
    pub async fn scrape_one(&self, url: &str) -> ScrapeOutcome {
        tracing::info!(url, "scraping");
        match self.try_scrape(url).await {
            Ok(record) => {
                tracing::info!(url, title = %record.title, price = %record.price, "scraped product");
                ScrapeOutcome::Success(record)
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "scrape failed");
                ScrapeOutcome::from(e)
            }
        }
    }

    async fn try_scrape(&self, url: &str) -> Result<ProductRecord, ScrapeError> {
        let parsed = parse_product_url(url)?;
        let body = self.fetch.fetch_page(url).await?;
        build_record(url, &parsed, &body)
    }
}

/// Parses the page and runs the retailer's extraction strategy.
///
/// Synchronous on purpose: the parsed document never lives across an
/// await point. Title is checked before price, so a page missing both
/// reports the missing title.
fn build_record(url: &str, parsed: &Url, body: &str) -> Result<ProductRecord, ScrapeError> {
    let doc = Html::parse_document(body);
    let retailer = classify_retailer(parsed)?;

    let title = extract::extract_title(retailer, &doc);
    // A record's price must be positive; a zero match (e.g. a "$0.00"
    // placeholder) counts as not found.
    let price = extract::extract_price(retailer, &doc).filter(|p| p > &Decimal::ZERO);
    let description = extract::extract_description(retailer, &doc);

    let Some(title) = title else {
        return Err(ScrapeError::ExtractionIncomplete {
            field: "title",
            url: url.to_owned(),
        });
    };
    let Some(price) = price else {
        return Err(ScrapeError::ExtractionIncomplete {
            field: "price",
            url: url.to_owned(),
        });
    };

    Ok(ProductRecord::new(url, retailer, price, title, description))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMAZON_URL: &str = "https://www.amazon.ca/dp/B0TEST";

    fn parsed(url: &str) -> Url {
        parse_product_url(url).expect("test URL should parse")
    }

    #[test]
    fn build_record_with_title_and_price() {
        let body = r#"
            <span id="productTitle">Graco SlimFit Car Seat</span>
            <span class="a-price-whole">299</span>
            <span class="a-price-fraction">97</span>
        "#;
        let record = build_record(AMAZON_URL, &parsed(AMAZON_URL), body).unwrap();
        assert_eq!(record.title, "Graco SlimFit Car Seat");
        assert_eq!(record.price.to_string(), "299.97");
        assert_eq!(record.currency, "CAD");
        assert!(record.in_stock);
        assert!(record.description.is_none());
    }

    #[test]
    fn missing_title_reported_before_price() {
        // Neither field present: the title failure wins.
        let err = build_record(AMAZON_URL, &parsed(AMAZON_URL), "<body></body>").unwrap_err();
        assert!(
            matches!(err, ScrapeError::ExtractionIncomplete { field: "title", .. }),
            "expected missing title, got: {err:?}"
        );
        assert!(err.to_string().contains("title not found"));
    }

    #[test]
    fn missing_price_with_title_present() {
        let body = r#"<span id="productTitle">Graco SlimFit Car Seat</span>"#;
        let err = build_record(AMAZON_URL, &parsed(AMAZON_URL), body).unwrap_err();
        assert!(
            matches!(err, ScrapeError::ExtractionIncomplete { field: "price", .. }),
            "expected missing price, got: {err:?}"
        );
    }

    #[test]
    fn zero_price_counts_as_not_found() {
        let body = r#"
            <span id="productTitle">Placeholder Listing</span>
            <span class="a-offscreen">$0.00</span>
        "#;
        let err = build_record(AMAZON_URL, &parsed(AMAZON_URL), body).unwrap_err();
        assert!(
            matches!(err, ScrapeError::ExtractionIncomplete { field: "price", .. }),
            "expected missing price, got: {err:?}"
        );
    }

    #[test]
    fn unsupported_retailer_fails_before_extraction() {
        let url = "https://www.ebay.com/itm/999";
        let err = build_record(url, &parsed(url), "<body></body>").unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedRetailer { .. }));
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A retailer whose product pages we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Retailer {
    Amazon,
    Walmart,
}

impl Retailer {
    /// Display name used in ingestion payloads and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Retailer::Amazon => "Amazon",
            Retailer::Walmart => "Walmart",
        }
    }
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A product scraped from a retailer page, normalized for delivery to the
/// price-tracking API.
///
/// Only constructible with a title and a price; a page where either is
/// missing produces a failure outcome, never a partial record. The record
/// is not mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The product page URL the record was scraped from.
    pub source_url: String,
    pub retailer: Retailer,
    /// Exact decimal price magnitude; currency is carried separately.
    pub price: Decimal,
    /// ISO 4217 currency code. Always `"CAD"` — the scraper does not infer
    /// currency from page content.
    pub currency: String,
    pub title: String,
    /// Not populated by extraction; carried for the ingestion payload.
    pub brand: Option<String>,
    /// Not populated by extraction; carried for the ingestion payload.
    pub category: Option<String>,
    pub description: Option<String>,
    /// Always `true` — stock status is not detected from page content.
    pub in_stock: bool,
    /// Set at construction time.
    pub scraped_at: DateTime<Utc>,
}

impl ProductRecord {
    #[must_use]
    pub fn new(
        source_url: impl Into<String>,
        retailer: Retailer,
        price: Decimal,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            retailer,
            price,
            currency: "CAD".to_string(),
            title: title.into(),
            brand: None,
            category: None,
            description,
            in_stock: true,
            scraped_at: Utc::now(),
        }
    }
}

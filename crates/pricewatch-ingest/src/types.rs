use chrono::{DateTime, Utc};
use serde::Serialize;

use pricewatch_core::ProductRecord;

/// JSON body POSTed to the price-tracking API for one scraped product.
///
/// Field names follow the API's camelCase contract. `price` is rendered
/// as a string so the exact decimal representation survives transport.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    pub product_url: String,
    pub retailer: String,
    pub price: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub in_stock: bool,
    pub currency: String,
    /// ISO-8601 timestamp of when the page was scraped.
    pub scraped_at: DateTime<Utc>,
}

impl From<&ProductRecord> for PriceUpdate {
    fn from(record: &ProductRecord) -> Self {
        Self {
            product_url: record.source_url.clone(),
            retailer: record.retailer.to_string(),
            price: record.price.to_string(),
            product_name: record.title.clone(),
            brand: record.brand.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            in_stock: record.in_stock,
            currency: record.currency.clone(),
            scraped_at: record.scraped_at,
        }
    }
}

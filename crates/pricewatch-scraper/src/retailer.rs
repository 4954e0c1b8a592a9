//! Maps a product URL to the retailer whose extraction strategy can read it.

use pricewatch_core::Retailer;
use reqwest::Url;

use crate::error::ScrapeError;

/// Validates that `url` is well-formed with an http(s) scheme and a host.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidUrl`] describing what is malformed.
pub fn parse_product_url(url: &str) -> Result<Url, ScrapeError> {
    let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScrapeError::InvalidUrl {
            url: url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ScrapeError::InvalidUrl {
            url: url.to_owned(),
            reason: "missing host".to_owned(),
        });
    }

    Ok(parsed)
}

/// Classifies a URL's host into a known retailer.
///
/// Case-insensitive substring match on the host: a host containing
/// `"amazon"` is Amazon, `"walmart"` is Walmart. Unknown hosts are an
/// error — the classifier never guesses a strategy.
///
/// # Errors
///
/// - [`ScrapeError::InvalidUrl`] when the URL has no host.
/// - [`ScrapeError::UnsupportedRetailer`] naming the offending host.
pub fn classify_retailer(url: &Url) -> Result<Retailer, ScrapeError> {
    let host = url
        .host_str()
        .ok_or_else(|| ScrapeError::InvalidUrl {
            url: url.to_string(),
            reason: "missing host".to_owned(),
        })?
        .to_ascii_lowercase();

    if host.contains("amazon") {
        Ok(Retailer::Amazon)
    } else if host.contains("walmart") {
        Ok(Retailer::Walmart)
    } else {
        Err(ScrapeError::UnsupportedRetailer { host })
    }
}

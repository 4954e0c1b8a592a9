//! Per-retailer extraction strategies.
//!
//! Each retailer module exposes three pure functions over a parsed
//! document (`extract_title`, `extract_price`, `extract_description`),
//! dispatched here by [`Retailer`] value. `None` means "not found" — the
//! page scraper decides whether a missing field is fatal.
//!
//! Every strategy is an ordered fallback chain tried in decreasing
//! confidence: structured JSON-LD blocks, then meta tags, then elements
//! carrying accessibility labels, then visible text against a
//! currency-prefixed pattern, with an unscoped whole-page scan strictly
//! last (it risks matching an unrelated dollar amount). The first tactic
//! that yields a non-empty result wins; malformed JSON-LD blocks are
//! skipped per-block, never abort the chain.

mod amazon;
mod walmart;

use pricewatch_core::Retailer;
use rust_decimal::Decimal;
use scraper::{Html, Selector};

use crate::normalize::clean_text;

#[must_use]
pub fn extract_title(retailer: Retailer, doc: &Html) -> Option<String> {
    match retailer {
        Retailer::Amazon => amazon::extract_title(doc),
        Retailer::Walmart => walmart::extract_title(doc),
    }
}

#[must_use]
pub fn extract_price(retailer: Retailer, doc: &Html) -> Option<Decimal> {
    match retailer {
        Retailer::Amazon => amazon::extract_price(doc),
        Retailer::Walmart => walmart::extract_price(doc),
    }
}

#[must_use]
pub fn extract_description(retailer: Retailer, doc: &Html) -> Option<String> {
    match retailer {
        Retailer::Amazon => amazon::extract_description(doc),
        Retailer::Walmart => walmart::extract_description(doc),
    }
}

/// Cleaned `content` attribute of the first element matching `selector`.
fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let element = doc.select(&sel).next()?;
    clean_text(element.value().attr("content")?)
}

/// Text of every `<script type="application/ld+json">` block, in document
/// order. Blocks are returned raw; callers parse defensively.
fn jsonld_scripts(doc: &Html) -> Vec<String> {
    let sel =
        Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid selector");
    doc.select(&sel)
        .map(|script| script.text().collect::<String>())
        .collect()
}

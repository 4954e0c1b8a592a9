//! Walmart product-page extraction.
//!
//! Walmart renders prices in several generations of markup, so the price
//! chain is the longest in the crate: JSON-LD offers, meta/itemprop tags,
//! server-rendered price elements (aria-label first — visible text is
//! often split across styled sub-spans), and a whole-page currency scan
//! as last resort.

use regex::Regex;
use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use super::{jsonld_scripts, meta_content};
use crate::normalize::{clean_text, extract_first_number};

const TITLE_SELECTORS: &[&str] = &[
    "h1.prod-ProductTitle",
    "h1.product-title",
    r#"h1[data-automation-id="product-title"]"#,
    "h1",
];

const PRICE_META_SELECTORS: &[&str] = &[
    r#"meta[itemprop="price"]"#,
    r#"meta[property="product:price:amount"]"#,
    r#"meta[property="og:price:amount"]"#,
];

const PRICE_ELEMENT_SELECTORS: &[&str] = &[
    "span.price-characteristic",
    "span.price-group",
    r#"div[data-automation-id="price"]"#,
    r#"span[itemprop="price"]"#,
    r#"div[data-testid="price"]"#,
];

const DESCRIPTION_SELECTORS: &[&str] = &[
    "div#product-description",
    "div.about-desc",
    "div.ProductDescription-content",
    r#"div[data-testid="product-description"]"#,
];

/// JSON object keys that carry a price directly.
const PRICE_KEYS: &[&str] = &["price", "priceAmount", "currentPrice", "displayPrice"];

/// Keys checked inside a nested `offers` object.
const OFFER_PRICE_KEYS: &[&str] = &["price", "lowPrice", "highPrice"];

pub(super) fn extract_title(doc: &Html) -> Option<String> {
    // Structured metadata first.
    for raw in jsonld_scripts(doc) {
        let Ok(data) = serde_json::from_str::<Value>(&raw) else {
            continue;
        };
        let nodes: Vec<&Value> = match &data {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };
        for node in nodes {
            let is_product = node
                .get("@type")
                .and_then(Value::as_str)
                .is_some_and(|t| t == "Product" || t == "BreadcrumbList");
            if !is_product {
                continue;
            }
            if let Some(name) = node.get("name").and_then(Value::as_str) {
                if let Some(title) = clean_text(name) {
                    return Some(title);
                }
            }
        }
    }

    for selector in TITLE_SELECTORS {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = doc.select(&sel).next() {
            if let Some(title) = clean_text(&element.text().collect::<String>()) {
                return Some(title);
            }
        }
    }

    meta_content(doc, r#"meta[property="og:title"]"#)
}

pub(super) fn extract_price(doc: &Html) -> Option<Decimal> {
    let number_re = Regex::new(r"\d+(?:[\.,]\d+)?").expect("valid regex");
    let currency_re = Regex::new(r"\$\s*(\d+(?:\.\d+)?)").expect("valid regex");
    let bare_re = Regex::new(r"\d+(?:\.\d+)?").expect("valid regex");
    let embedded_price_re =
        Regex::new(r#""price"\s*:\s*"?(\d+(?:[\.,]\d+)?)"#).expect("valid regex");

    // JSON-LD offers blocks.
    for raw in jsonld_scripts(doc) {
        if raw.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(data) => {
                if let Some(price) = find_price_in_json(&data, &number_re) {
                    tracing::debug!("price found in JSON-LD block");
                    return Some(price);
                }
            }
            // Malformed block: scan its raw text instead of aborting.
            Err(_) => {
                if let Some(price) = extract_first_number(&raw, &embedded_price_re) {
                    return Some(price);
                }
            }
        }
    }

    // Meta price tags.
    for selector in PRICE_META_SELECTORS {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        if let Some(content) = doc
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr("content"))
        {
            if let Some(price) = extract_first_number(content, &bare_re) {
                return Some(price);
            }
        }
    }

    // Server-rendered price elements.
    for selector in PRICE_ELEMENT_SELECTORS {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        let Some(element) = doc.select(&sel).next() else {
            continue;
        };
        if let Some(price) = element_price(element, &currency_re, &bare_re) {
            return Some(price);
        }
    }

    // Last resort: unscoped scan of the page text.
    let page_text = doc.root_element().text().collect::<Vec<_>>().join(" ");
    extract_first_number(&page_text, &currency_re)
}

pub(super) fn extract_description(doc: &Html) -> Option<String> {
    for selector in DESCRIPTION_SELECTORS {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = doc.select(&sel).next() {
            if let Some(text) = clean_text(&element.text().collect::<String>()) {
                return Some(text);
            }
        }
    }

    meta_content(doc, r#"meta[name="description"]"#)
}

/// Price from a single element: accessibility labels, then the `content`
/// attribute, then visible text (currency-prefixed pattern before a bare
/// numeric one).
fn element_price(
    element: ElementRef<'_>,
    currency_re: &Regex,
    bare_re: &Regex,
) -> Option<Decimal> {
    let aria = element
        .value()
        .attr("aria-label")
        .or_else(|| element.value().attr("aria-valuetext"));
    if let Some(label) = aria {
        if let Some(price) = extract_first_number(label, bare_re) {
            return Some(price);
        }
    }

    if let Some(content) = element.value().attr("content") {
        if let Some(price) = extract_first_number(content, bare_re) {
            return Some(price);
        }
    }

    let text = clean_text(&element.text().collect::<String>())?;
    extract_first_number(&text, currency_re).or_else(|| extract_first_number(&text, bare_re))
}

/// Recursively searches Walmart JSON structures for a price-bearing field,
/// checking known keys at each object before descending into values.
fn find_price_in_json(value: &Value, number_re: &Regex) -> Option<Decimal> {
    match value {
        Value::Object(map) => {
            for key in PRICE_KEYS {
                if let Some(candidate) = map.get(*key).and_then(scalar_to_string) {
                    if let Some(price) = extract_first_number(&candidate, number_re) {
                        return Some(price);
                    }
                }
            }
            if let Some(Value::Object(offers)) = map.get("offers") {
                for key in OFFER_PRICE_KEYS {
                    if let Some(candidate) = offers.get(*key).and_then(scalar_to_string) {
                        if let Some(price) = extract_first_number(&candidate, number_re) {
                            return Some(price);
                        }
                    }
                }
            }
            map.values().find_map(|v| find_price_in_json(v, number_re))
        }
        Value::Array(items) => items.iter().find_map(|v| find_price_in_json(v, number_re)),
        _ => None,
    }
}

/// Strings and numbers qualify as price candidates; other shapes do not.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

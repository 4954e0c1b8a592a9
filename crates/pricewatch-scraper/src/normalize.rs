//! Text and price normalization leaves.
//!
//! These functions sit between raw HTML text and the typed fields of a
//! product record. Prices go through [`rust_decimal::Decimal`] so currency
//! values never touch floating point.

use regex::Regex;
use rust_decimal::Decimal;

/// Trims surrounding whitespace and collapses any run of
/// whitespace/newlines to a single space.
///
/// Returns `None` for empty or whitespace-only input, so an extraction
/// tactic that finds an empty element reads as "not found" rather than a
/// valid empty result. Idempotent: `clean_text(&clean_text(x)?) ==
/// clean_text(x)`.
#[must_use]
pub fn clean_text(raw: &str) -> Option<String> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Parses price components into an exact decimal value.
///
/// Strips every non-digit character from `whole`; an empty residue fails.
/// When `fraction` is present its non-digits are stripped too and the
/// parts are joined as `{whole}.{fraction}`; otherwise `whole` is parsed
/// alone.
#[must_use]
pub fn parse_decimal(whole: &str, fraction: Option<&str>) -> Option<Decimal> {
    let cleaned_whole: String = whole.chars().filter(char::is_ascii_digit).collect();
    if cleaned_whole.is_empty() {
        return None;
    }

    let price_str = match fraction {
        Some(f) => {
            let cleaned_fraction: String = f.chars().filter(char::is_ascii_digit).collect();
            format!("{cleaned_whole}.{cleaned_fraction}")
        }
        None => cleaned_whole,
    };

    price_str.parse::<Decimal>().ok()
}

/// Applies a numeric pattern to `text` and parses the first match as an
/// exact decimal.
///
/// Capture group 1 is used when the pattern has one (e.g. a
/// currency-prefixed pattern capturing the number after `$`); otherwise
/// the whole match. Comma decimal separators are normalized to a period
/// before parsing.
#[must_use]
pub fn extract_first_number(text: &str, pattern: &Regex) -> Option<Decimal> {
    let caps = pattern.captures(text)?;
    let matched = match caps.get(1) {
        Some(m) => m,
        None => caps.get(0)?,
    };
    matched.as_str().replace(',', ".").parse::<Decimal>().ok()
}

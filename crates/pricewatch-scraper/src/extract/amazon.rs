//! Amazon product-page extraction.

use regex::Regex;
use rust_decimal::Decimal;
use scraper::{Html, Selector};

use crate::normalize::{clean_text, parse_decimal};

pub(super) fn extract_title(doc: &Html) -> Option<String> {
    let sel = Selector::parse("span#productTitle").expect("valid selector");
    let element = doc.select(&sel).next()?;
    clean_text(&element.text().collect::<String>())
}

/// Price from adjoining whole/fraction sub-elements, falling back to the
/// offscreen combined price span (e.g. `"$29.99"`).
pub(super) fn extract_price(doc: &Html) -> Option<Decimal> {
    let whole_sel = Selector::parse("span.a-price-whole").expect("valid selector");
    let fraction_sel = Selector::parse("span.a-price-fraction").expect("valid selector");

    if let (Some(whole), Some(fraction)) = (
        doc.select(&whole_sel).next(),
        doc.select(&fraction_sel).next(),
    ) {
        let whole_text = whole.text().collect::<String>();
        let fraction_text = fraction.text().collect::<String>();
        if let Some(price) = parse_decimal(&whole_text, Some(&fraction_text)) {
            return Some(price);
        }
    }

    let offscreen_sel = Selector::parse("span.a-offscreen").expect("valid selector");
    let offscreen = doc.select(&offscreen_sel).next()?;
    let text = clean_text(&offscreen.text().collect::<String>())?;

    let re = Regex::new(r"(\d+)\.(\d+)").expect("valid regex");
    let caps = re.captures(&text)?;
    parse_decimal(caps.get(1)?.as_str(), Some(caps.get(2)?.as_str()))
}

/// Description from the nested description container: first `p` inside
/// `div#productDescription`, preferring a nested `span`'s text.
pub(super) fn extract_description(doc: &Html) -> Option<String> {
    let p_sel = Selector::parse("div#productDescription p").expect("valid selector");
    let paragraph = doc.select(&p_sel).next()?;

    let span_sel = Selector::parse("span").expect("valid selector");
    if let Some(span) = paragraph.select(&span_sel).next() {
        if let Some(text) = clean_text(&span.text().collect::<String>()) {
            return Some(text);
        }
    }

    clean_text(&paragraph.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    // -----------------------------------------------------------------------
    // extract_title
    // -----------------------------------------------------------------------

    #[test]
    fn title_from_product_title_span() {
        let doc = parse(
            r#"<span id="productTitle">
                Graco SlimFit   3-in-1
                Car Seat
            </span>"#,
        );
        assert_eq!(
            extract_title(&doc).as_deref(),
            Some("Graco SlimFit 3-in-1 Car Seat")
        );
    }

    #[test]
    fn title_missing_returns_none() {
        let doc = parse("<h1>Not the title element</h1>");
        assert!(extract_title(&doc).is_none());
    }

    #[test]
    fn whitespace_only_title_is_not_found() {
        let doc = parse(r#"<span id="productTitle">   </span>"#);
        assert!(extract_title(&doc).is_none());
    }

    // -----------------------------------------------------------------------
    // extract_price
    // -----------------------------------------------------------------------

    #[test]
    fn price_from_whole_and_fraction_spans() {
        let doc = parse(
            r#"<span class="a-price-whole">29.</span><span class="a-price-fraction">99</span>"#,
        );
        assert_eq!(extract_price(&doc), Some("29.99".parse().unwrap()));
    }

    #[test]
    fn price_from_offscreen_span_only() {
        let doc = parse(r#"<span class="a-offscreen">$29.99</span>"#);
        assert_eq!(extract_price(&doc), Some("29.99".parse().unwrap()));
    }

    #[test]
    fn whole_fraction_pair_beats_offscreen() {
        let doc = parse(
            r#"<span class="a-price-whole">24</span>
               <span class="a-price-fraction">97</span>
               <span class="a-offscreen">$99.99</span>"#,
        );
        assert_eq!(extract_price(&doc), Some("24.97".parse().unwrap()));
    }

    #[test]
    fn whole_span_alone_is_not_enough_without_offscreen() {
        // Only one of the pair present and no combined span: nothing to parse.
        let doc = parse(r#"<span class="a-price-whole">29</span>"#);
        assert!(extract_price(&doc).is_none());
    }

    #[test]
    fn price_with_thousands_separator() {
        let doc = parse(
            r#"<span class="a-price-whole">1,299.</span><span class="a-price-fraction">00</span>"#,
        );
        assert_eq!(extract_price(&doc), Some("1299.00".parse().unwrap()));
    }

    #[test]
    fn offscreen_without_decimal_point_is_not_found() {
        let doc = parse(r#"<span class="a-offscreen">Price unavailable</span>"#);
        assert!(extract_price(&doc).is_none());
    }

    // -----------------------------------------------------------------------
    // extract_description
    // -----------------------------------------------------------------------

    #[test]
    fn description_prefers_nested_span() {
        let doc = parse(
            r#"<div id="productDescription">
                 <p><span>Machine-washable seat pad.</span> trailing</p>
               </div>"#,
        );
        assert_eq!(
            extract_description(&doc).as_deref(),
            Some("Machine-washable seat pad.")
        );
    }

    #[test]
    fn description_falls_back_to_paragraph_text() {
        let doc = parse(
            r#"<div id="productDescription"><p>Fits children 5 to 100 lb.</p></div>"#,
        );
        assert_eq!(
            extract_description(&doc).as_deref(),
            Some("Fits children 5 to 100 lb.")
        );
    }

    #[test]
    fn description_missing_returns_none() {
        let doc = parse("<div><p>Unrelated content</p></div>");
        assert!(extract_description(&doc).is_none());
    }
}

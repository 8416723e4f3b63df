// src/specs/detail.rs
//! Spec for a single launch's detail page.
//!
//! Where the release date is read from, in order:
//! 1. `time[datetime]` (offsets converted to site time)
//! 2. text of `.available-date-component`, `.launch-date`, `.release-date`, `[data-qa="launch-date"]`
//! 3. `meta[property="product:release_date"]`
//! 4. any date in the page's visible body text (scripts and styles skipped)
//!
//! The result is always `YYYY-MM-DD`.

use chrono::NaiveDate;
use scraper::Html;

use super::{first_text, selector};
use crate::core::net::PageSource;
use crate::core::sanitize::visible_text;
use crate::dates::{find_date, iso, parse_timestamp};
use crate::error::{ParseError, ScrapeError};

pub fn fetch(source: &dyn PageSource, url: &str, today: NaiveDate) -> Result<String, ScrapeError> {
    let html_doc = source.get(url)?;
    let date = parse_doc(&html_doc, today).map_err(|e| ParseError::new(e.what, format!("{url}: {}", e.context)))?;
    Ok(iso(date))
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str, today: NaiveDate) -> Result<NaiveDate, ParseError> {
    let doc = Html::parse_document(html_doc);
    let root = doc.root_element();

    let time_sel = selector("time[datetime]")?;
    if let Some(d) = doc
        .select(&time_sel)
        .filter_map(|el| el.value().attr("datetime"))
        .find_map(parse_timestamp)
    {
        return Ok(d);
    }

    let labelled = [
        selector(".available-date-component")?,
        selector(".launch-date")?,
        selector(".release-date")?,
        selector(r#"[data-qa="launch-date"]"#)?,
    ];
    if let Some(text) = first_text(&root, &labelled) {
        if let Some(d) = find_date(&text, today) {
            return Ok(d);
        }
    }

    let meta_sel = selector(r#"meta[property="product:release_date"]"#)?;
    if let Some(d) = doc
        .select(&meta_sel)
        .filter_map(|el| el.value().attr("content"))
        .find_map(|c| parse_timestamp(c).or_else(|| find_date(c, today)))
    {
        return Ok(d);
    }

    let body_sel = selector("body")?;
    doc.select(&body_sel)
        .next()
        .and_then(|body| find_date(&visible_text(&body), today))
        .ok_or_else(|| ParseError::new("release date", "no date on detail page"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn english_caption_normalizes() {
        let doc = r#"<div class="product-info"><div class="available-date-component">Jan 1, 2030</div></div>"#;
        assert_eq!(iso(parse_doc(doc, today()).unwrap()), "2030-01-01");
    }

    #[test]
    fn time_attribute_wins() {
        let doc = r#"<time datetime="2030-03-04T10:00:00+09:00">3/4 10:00</time>
            <div class="launch-date">Jan 1, 2030</div>"#;
        assert_eq!(iso(parse_doc(doc, today()).unwrap()), "2030-03-04");
    }

    #[test]
    fn korean_caption_with_time() {
        let doc = r#"<div class="available-date-component">10/25 오전 10:00 출시</div>"#;
        assert_eq!(iso(parse_doc(doc, today()).unwrap()), "2026-10-25");
    }

    #[test]
    fn meta_fallback() {
        let doc = r#"<html><head><meta property="product:release_date" content="2030-05-06"></head><body></body></html>"#;
        assert_eq!(iso(parse_doc(doc, today()).unwrap()), "2030-05-06");
    }

    #[test]
    fn body_text_fallback() {
        let doc = r#"<body><section><h1>Air Force 1</h1><p>Drops 2030년 7월 8일</p></section></body>"#;
        assert_eq!(iso(parse_doc(doc, today()).unwrap()), "2030-07-08");
    }

    #[test]
    fn utc_timestamp_lands_on_kst_day() {
        let doc = r#"<time datetime="2029-12-31T15:00:00.000Z">1/1 00:00</time>"#;
        assert_eq!(iso(parse_doc(doc, today()).unwrap()), "2030-01-01");
    }

    #[test]
    fn body_fallback_ignores_script_and_style() {
        let doc = r#"<body>
            <script>window.__STATE__ = {rating:4.5, ver:"1.2"};</script>
            <style>.a{opacity:0.5}</style>
            <noscript>3/4</noscript>
            <p>Drops Jan 1, 2030</p>
        </body>"#;
        assert_eq!(iso(parse_doc(doc, today()).unwrap()), "2030-01-01");
    }

    #[test]
    fn no_date_is_parse_error() {
        let err = parse_doc("<body><h1>Air Force 1</h1></body>", today()).unwrap_err();
        assert_eq!(err.what, "release date");
    }
}

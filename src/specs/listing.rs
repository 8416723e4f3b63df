// src/specs/listing.rs
//! Spec for the upcoming-launches listing.
//!
//! Cards are `figure` elements (or `.product-card` as fallback). Per card:
//! - `href`: first `a[href]`
//! - `name`: `h3` / `.headline-5` / `.product-card__title`, else the link's `aria-label`/`title`
//! - release text: `.launch-caption` / `.product-card__subtitle` / `time` / `p`, else empty
//!
//! Duplicate hrefs (carousel repeats) keep the first card.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use super::{first_text, selector};
use crate::core::net::PageSource;
use crate::core::sanitize::normalize_ws;
use crate::error::{ParseError, ScrapeError};
use crate::item::Item;

struct CardSelectors {
    link: Selector,
    names: Vec<Selector>,
    captions: Vec<Selector>,
}

impl CardSelectors {
    fn new() -> Result<Self, ParseError> {
        Ok(Self {
            link: selector("a[href]")?,
            names: vec![selector("h3")?, selector(".headline-5")?, selector(".product-card__title")?],
            captions: vec![
                selector(".launch-caption")?,
                selector(".product-card__subtitle")?,
                selector("time")?,
                selector("p")?,
            ],
        })
    }
}

pub fn fetch(source: &dyn PageSource, url: &str) -> Result<Vec<Item>, ScrapeError> {
    let html_doc = source.get(url)?;
    let items = parse_doc(&html_doc)?;
    info!(count = items.len(), "Listing parsed");
    Ok(items)
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str) -> Result<Vec<Item>, ParseError> {
    let doc = Html::parse_document(html_doc);
    let sels = CardSelectors::new()?;

    let cards: Vec<ElementRef> = [selector("figure")?, selector(".product-card")?]
        .iter()
        .map(|sel| doc.select(sel).collect::<Vec<_>>())
        .find(|found| !found.is_empty())
        .ok_or_else(|| ParseError::new("listing", "no product cards found"))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut items = Vec::with_capacity(cards.len());

    for card in cards {
        let Some(link) = card.select(&sels.link).next() else {
            debug!("Listing: card without link skipped");
            continue;
        };
        let href = link.value().attr("href").map(str::trim).unwrap_or_default();
        if href.is_empty() {
            continue;
        }
        if !seen.insert(s!(href)) {
            debug!(href, "Listing: duplicate card skipped");
            continue;
        }

        let name = first_text(&card, &sels.names)
            .or_else(|| {
                let v = link.value();
                v.attr("aria-label").or_else(|| v.attr("title")).map(normalize_ws)
            })
            .unwrap_or_default();
        let raw_release_text = first_text(&card, &sels.captions).unwrap_or_default();

        items.push(Item::new(name, href, raw_release_text));
    }

    if items.is_empty() {
        return Err(ParseError::new("listing", "product cards carry no links"));
    }
    Ok(items)
}

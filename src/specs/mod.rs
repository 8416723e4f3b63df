// src/specs/mod.rs
//! # Page specs
//!
//! One module per remote page. Each spec knows *where the ground truth lives
//! in the HTML* and how to pull it out; nothing else.
//!
//! - `listing`: the upcoming-launches grid → `Vec<Item>`.
//! - `detail`: one launch's product page → release date.
//!
//! Each spec exposes `fetch(source, url, …)` for the pipeline and a pure
//! `parse_doc(html, …)` so it can be tested offline against saved fixtures.
//! Scheduling, concurrency and output live in `scrape` and `runner`.

use scraper::{ElementRef, Selector};

use crate::core::sanitize::element_text;
use crate::error::ParseError;

pub mod detail;
pub mod listing;

fn selector(css: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::new("selector", format!("{css}: {e}")))
}

/// First non-empty normalized text among `candidates`, searched within `scope`.
fn first_text(scope: &ElementRef<'_>, candidates: &[Selector]) -> Option<String> {
    candidates.iter().find_map(|sel| {
        scope
            .select(sel)
            .map(|el| element_text(&el))
            .find(|t| !t.is_empty())
    })
}

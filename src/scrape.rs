// src/scrape.rs
use std::{
    thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::net::{ absolute_url, PageSource },
    error::ScrapeError,
    item::{ Item, ScheduledItem },
    progress::Progress,
    specs,
};

/// Fetch and parse the listing page. Any failure here is fatal for the run.
pub fn fetch_listing(source: &dyn PageSource, scrape: &ScrapeOptions) -> Result<Vec<Item>, ScrapeError> {
    info!(url = %scrape.listing_url, "Fetching listing");
    specs::listing::fetch(source, &scrape.listing_url)
}

/// Fetch one item's detail page and return its normalized release date.
pub fn resolve_one(
    source: &dyn PageSource,
    site_base: &str,
    item: &Item,
    today: NaiveDate,
) -> Result<String, ScrapeError> {
    let url = absolute_url(site_base, &item.href)?;
    specs::detail::fetch(source, &url, today)
}

/// Resolve release dates for every item on a small worker pool.
///
/// Output order matches input order. A failed item keeps `release_date: None`
/// and is reported through `progress`; it never stops the others.
pub fn resolve_release_dates<'p>(
    items: Vec<Item>,
    source: Arc<dyn PageSource>,
    scrape: &ScrapeOptions,
    today: NaiveDate,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Vec<ScheduledItem> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(items.len());
    }
    if items.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return Vec::new();
    }

    // Concurrency
    type Outcome = (usize, Result<String, String>);

    let items = Arc::new(items);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();

    let workers = scrape.workers.min(items.len()).max(1);

    for _ in 0..workers {
        let items = Arc::clone(&items);
        let idx = Arc::clone(&counter);
        let source = Arc::clone(&source);
        let tx = res_tx.clone();
        let scrape = scrape.clone();

        thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= items.len() {
                        break;
                    }
                    let result = resolve_one(source.as_ref(), &scrape.site_base, &items[i], today)
                        .map_err(|e| e.to_string());
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    thread::sleep(scrape.pause_after(i)); // be polite
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results; iteration ends once every worker has hung up
    let mut dates: Vec<Option<String>> = vec![None; items.len()];
    let mut reported = vec![false; items.len()];

    for (i, result) in res_rx {
        reported[i] = true;
        let name = items[i].name.as_str();
        match result {
            Ok(date) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(name, &date);
                }
                dates[i] = Some(date);
            }
            Err(msg) => {
                warn!(href = %items[i].href, "Release date unresolved: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, &msg);
                }
            }
        }
    }

    // A worker that panicked never sent its item back.
    for i in reported.iter().enumerate().filter(|(_, seen)| !**seen).map(|(i, _)| i) {
        warn!(href = %items[i].href, "Release date unresolved: worker stopped");
        if let Some(p) = progress.as_deref_mut() {
            p.item_failed(&items[i].name, "worker stopped before reporting");
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // A worker may still hold its handle for a moment; clone in that case.
    let items = Arc::try_unwrap(items).unwrap_or_else(|shared| (*shared).clone());
    items
        .into_iter()
        .zip(dates)
        .map(|(item, release_date)| ScheduledItem { item, release_date })
        .collect()
}

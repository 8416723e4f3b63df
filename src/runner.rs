// src/runner.rs
use std::io::Write;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    classify::classify,
    config::options::RunOptions,
    core::{ clock::Clock, net::PageSource },
    error::ScrapeError,
    file::{ self, WriteReport },
    item::{ Item, ScheduledItem },
    progress::Progress,
    report, scrape,
};

/// What a run produced.
pub struct RunSummary {
    pub released: Vec<Item>,
    pub to_be_released: Vec<ScheduledItem>,
    pub writes: WriteReport,
}

impl RunSummary {
    pub fn unresolved(&self) -> usize {
        self.to_be_released.iter().filter(|s| s.release_date.is_none()).count()
    }
}

/// Full pipeline: listing → classify → resolve dates → print → write.
///
/// Returns `Err` only when the listing itself cannot be fetched or parsed.
/// Detail failures leave `releaseDate` null; write failures land in
/// `RunSummary::writes`.
pub fn run(
    opts: &RunOptions,
    source: Arc<dyn PageSource>,
    clock: &dyn Clock,
    console: &mut dyn Write,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let upcoming = scrape::fetch_listing(source.as_ref(), &opts.scrape)?;

    let partition = classify(upcoming, clock);
    info!(
        released = partition.released.len(),
        to_be_released = partition.to_be_released.len(),
        "Classified"
    );

    let to_be_released = scrape::resolve_release_dates(
        partition.to_be_released,
        source,
        &opts.scrape,
        clock.today(),
        progress.as_deref_mut(),
    );
    let released = partition.released;

    if let Err(e) = report::print_groups(console, &released, &to_be_released) {
        warn!("Console report failed: {e}");
    }

    let writes = file::write_exports(&opts.export, &released, &to_be_released);
    for path in &writes.written {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("📝 {}", path.display()));
        }
    }
    for e in &writes.failed {
        error!("{e}");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("❌ {e}"));
        }
    }

    Ok(RunSummary { released, to_be_released, writes })
}

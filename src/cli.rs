// src/cli.rs
use std::sync::Arc;

use color_eyre::eyre::{bail, Result, WrapErr};

use crate::{
    config::options::RunOptions,
    core::{ HttpSource, SystemClock },
    progress::ConsoleProgress,
    runner,
};

/// No flags: fetch, classify, resolve, print, write. Everything comes from
/// `RunOptions::default()`.
pub fn run() -> Result<()> {
    if std::env::args().len() > 1 {
        eprintln!("{}", include_str!("cli_help.txt"));
        bail!("launch_scrape takes no arguments");
    }

    let opts = RunOptions::default();
    let source = Arc::new(HttpSource::new().wrap_err("could not set up HTTP client")?);
    let mut progress = ConsoleProgress::default();
    let mut stdout = std::io::stdout().lock();

    let summary = runner::run(&opts, source, &SystemClock, &mut stdout, Some(&mut progress))
        .wrap_err("listing page could not be scraped")?;

    if summary.unresolved() > 0 {
        tracing::warn!(count = summary.unresolved(), "Some release dates stayed unresolved");
    }
    if !summary.writes.is_ok() {
        bail!("{} of 2 output files could not be written", summary.writes.failed.len());
    }
    Ok(())
}

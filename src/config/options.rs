// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_url: String,
    pub site_base: String,
    pub workers: usize,
    pub pause_ms: u64,
    pub jitter_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_url: s!(LISTING_URL),
            site_base: s!(SITE_BASE),
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
            jitter_ms: JITTER_MS,
        }
    }
}

impl ScrapeOptions {
    /// Pause a worker takes after the request at `index`.
    /// Jitter is derived from the index so runs stay reproducible.
    pub fn pause_after(&self, index: usize) -> Duration {
        let jitter = if self.jitter_ms == 0 { 0 } else { (index as u64 * 17) % self.jitter_ms };
        Duration::from_millis(self.pause_ms + jitter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub released_file: String,
    pub to_be_released_file: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            released_file: s!(RELEASED_FILE),
            to_be_released_file: s!(TO_BE_RELEASED_FILE),
        }
    }
}

impl ExportOptions {
    pub fn released_path(&self) -> PathBuf {
        self.out_dir.join(&self.released_file)
    }

    pub fn to_be_released_path(&self) -> PathBuf {
        self.out_dir.join(&self.to_be_released_file)
    }
}

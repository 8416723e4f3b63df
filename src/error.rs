// src/error.rs
//! Error taxonomy.
//!
//! - `FetchError`: page unreachable (transport, timeout, non-2xx).
//! - `ParseError`: the markup or the date we expected is not there.
//! - `WriteError`: an output file could not be written.
//!
//! Listing-level errors abort a run. Detail-level errors are per item.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("fetch failed for {url}: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { url: url.into(), reason: reason.into() }
    }
}

#[derive(Debug, Error)]
#[error("could not parse {what}: {context}")]
pub struct ParseError {
    pub what: &'static str,
    pub context: String,
}

impl ParseError {
    pub fn new(what: &'static str, context: impl Into<String>) -> Self {
        Self { what, context: context.into() }
    }
}

#[derive(Debug, Error)]
#[error("could not write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

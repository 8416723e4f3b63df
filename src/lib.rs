// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod classify;
pub mod dates;
pub mod file;
pub mod item;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;

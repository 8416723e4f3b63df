// src/core/clock.rs
use chrono::{Local, NaiveDate};

/// Source of "today". Classification never reads system time directly.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine running the scrape.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// src/core/mod.rs

pub mod clock;
pub mod net;
pub mod sanitize;

pub use clock::{Clock, FixedClock, SystemClock};
pub use net::{HttpSource, PageSource};

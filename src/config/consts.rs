// src/config/consts.rs

// Net config
pub const SITE_BASE: &str = "https://www.nike.com";
pub const LISTING_URL: &str = "https://www.nike.com/kr/launch?s=upcoming";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en-US;q=0.5";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const SITE_UTC_OFFSET_SECS: i32 = 9 * 3600; // KST

// Export
pub const DEFAULT_OUT_DIR: &str = "models/nike";
pub const RELEASED_FILE: &str = "released_items.json";
pub const TO_BE_RELEASED_FILE: &str = "to_be_released_items.json";
pub const JSON_INDENT: &[u8] = b"    ";

// Release-text heuristics
pub const YEARLESS_LOOKBACK_DAYS: i64 = 183; // further than this from today → shift a year

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// src/dates.rs
//! Release-text parsing.
//!
//! Listing cards and detail pages describe launch dates in loose text:
//! `2030-01-01`, `Jan 1, 2030`, `2030년 1월 1일`, `10/18 오전 10:00`, or a bare
//! marker such as `출시 예정` / `Available`. This module turns that text into a
//! [`ReleaseText`] and normalizes any date it finds to `YYYY-MM-DD`.
//!
//! Dates are found anywhere in the text. Yearless dates (`10/18`, `Jan 1`,
//! `1월 1일`) take the clock's year unless that lands more than
//! [`YEARLESS_LOOKBACK_DAYS`] away from today, in which case they move a year
//! toward today (late December read in early January is last year's).
//!
//! Timestamps with an offset are read in the site's time zone
//! ([`SITE_UTC_OFFSET_SECS`]), so `2029-12-31T15:00:00Z` is `2030-01-01`.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate};

use crate::config::consts::{SITE_UTC_OFFSET_SECS, YEARLESS_LOOKBACK_DAYS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseText {
    /// Text explicitly says the item is out.
    Released,
    /// Text carries a date.
    Date(NaiveDate),
    /// Text says "coming soon" without a date.
    Upcoming,
    /// Empty or unrecognized.
    Unknown,
}

const UPCOMING_MARKERS: &[&str] = &[
    "coming soon", "upcoming", "to be released", "unreleased", "coming", "soon",
    "출시 예정", "출시예정", "곧",
];

const RELEASED_MARKERS: &[&str] = &[
    "already released", "released", "available", "in stock", "buy now", "sold out",
    "출시 완료", "출시완료", "출시됨", "구매하기", "판매 중", "판매중", "품절",
];

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

impl ReleaseText {
    pub fn parse(text: &str, today: NaiveDate) -> Self {
        if let Some(date) = find_date(text, today) {
            return ReleaseText::Date(date);
        }
        let lc = text.to_lowercase();
        // Upcoming first: "to be released" contains "released".
        if UPCOMING_MARKERS.iter().any(|m| lc.contains(m)) {
            return ReleaseText::Upcoming;
        }
        if RELEASED_MARKERS.iter().any(|m| lc.contains(m)) {
            return ReleaseText::Released;
        }
        ReleaseText::Unknown
    }

    /// Released means a date on or before `today`, or an explicit marker.
    /// Unknown text is treated as upcoming so nothing gets hidden.
    pub fn is_released(&self, today: NaiveDate) -> bool {
        match self {
            ReleaseText::Released => true,
            ReleaseText::Date(d) => *d <= today,
            ReleaseText::Upcoming | ReleaseText::Unknown => false,
        }
    }
}

/// Canonical output form for release dates.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Date of a machine-readable timestamp (`datetime` / `content` attributes).
///
/// RFC 3339 values with an offset are converted to site-local time first.
/// Bare dates and offset-less datetimes are taken as already local.
pub fn parse_timestamp(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        let site = FixedOffset::east_opt(SITE_UTC_OFFSET_SECS)?;
        return Some(dt.with_timezone(&site).date_naive());
    }
    parse_iso_prefix(s)
}

// "2030-01-01" or the date part of "2030-01-01T10:00:00"
fn parse_iso_prefix(s: &str) -> Option<NaiveDate> {
    let head = s.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/* ---------------- tokenizer ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
enum Tok {
    /// value (None on overflow), digit count
    Num(Option<u32>, usize),
    Word(String),
    Sym(char),
}

fn tokenize(text: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_ascii_digit() {
            let mut digits = s!();
            while let Some(&c) = chars.peek() {
                if !c.is_ascii_digit() { break; }
                digits.push(c);
                chars.next();
            }
            out.push(Tok::Num(digits.parse().ok(), digits.len()));
        } else if ch.is_alphabetic() {
            let mut word = s!();
            while let Some(&c) = chars.peek() {
                if !c.is_alphabetic() { break; }
                word.extend(c.to_lowercase());
                chars.next();
                // Korean date units stand alone: "2030년1월" → 2030, 년, 1, 월
                if matches!(c, '년' | '월' | '일') { break; }
            }
            out.push(Tok::Word(word));
        } else {
            if !ch.is_whitespace() {
                out.push(Tok::Sym(ch));
            }
            chars.next();
        }
    }
    out
}

fn month_from_word(w: &str) -> Option<u32> {
    if w.len() < 3 { return None; }
    MONTHS.iter().position(|full| full.starts_with(w)).map(|i| i as u32 + 1)
}

fn is_ordinal(w: &str) -> bool {
    matches!(w, "st" | "nd" | "rd" | "th")
}

/* ---------------- matcher ---------------- */

/// A date as written, before year inference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Found {
    year: Option<i32>,
    month: u32,
    day: u32,
}

struct Cursor<'a> {
    toks: &'a [Tok],
    at: usize,
}

impl<'a> Cursor<'a> {
    fn num(&mut self) -> Option<(u32, usize)> {
        match self.toks.get(self.at)? {
            Tok::Num(Some(v), len) => { self.at += 1; Some((*v, *len)) }
            _ => None,
        }
    }
    fn sym(&mut self, allowed: &[char]) -> Option<char> {
        match self.toks.get(self.at)? {
            Tok::Sym(c) if allowed.contains(c) => { self.at += 1; Some(*c) }
            _ => None,
        }
    }
    fn word_is(&mut self, w: &str) -> bool {
        match self.toks.get(self.at) {
            Some(Tok::Word(x)) if x == w => { self.at += 1; true }
            _ => false,
        }
    }
    fn month_word(&mut self) -> Option<u32> {
        match self.toks.get(self.at)? {
            Tok::Word(w) => { let m = month_from_word(w)?; self.at += 1; Some(m) }
            _ => None,
        }
    }
    fn skip_ordinal(&mut self) {
        if let Some(Tok::Word(w)) = self.toks.get(self.at) {
            if is_ordinal(w) { self.at += 1; }
        }
    }
    fn year(&mut self) -> Option<i32> {
        let save = self.at;
        match self.num() {
            Some((y, 4)) => Some(y as i32),
            _ => { self.at = save; None }
        }
    }
}

/// Try every pattern at token `start`, most specific first.
fn match_at(toks: &[Tok], start: usize) -> Option<Found> {
    let patterns: [fn(&mut Cursor) -> Option<Found>; 6] = [
        ymd_numeric, ymd_korean, month_day_year, day_month_year, md_korean, md_numeric,
    ];
    patterns.iter().find_map(|p| p(&mut Cursor { toks, at: start }))
}

// 2030-01-01 / 2030.01.01 / 2030/01/01
fn ymd_numeric(c: &mut Cursor) -> Option<Found> {
    let year = c.year()?;
    let sep = c.sym(&['-', '.', '/'])?;
    let (month, _) = c.num()?;
    c.sym(&[sep])?;
    let (day, _) = c.num()?;
    Some(Found { year: Some(year), month, day })
}

// 2030년 1월 1일
fn ymd_korean(c: &mut Cursor) -> Option<Found> {
    let year = c.year()?;
    if !c.word_is("년") { return None; }
    let mut f = md_korean(c)?;
    f.year = Some(year);
    Some(f)
}

// Jan 1, 2030 / January 1st 2030 / Jan 1 (yearless)
fn month_day_year(c: &mut Cursor) -> Option<Found> {
    let month = c.month_word()?;
    let (day, dlen) = c.num()?;
    if dlen > 2 { return None; }
    c.skip_ordinal();
    c.sym(&[',']);
    let year = c.year();
    Some(Found { year, month, day })
}

// 1 Jan 2030
fn day_month_year(c: &mut Cursor) -> Option<Found> {
    let (day, dlen) = c.num()?;
    if dlen > 2 { return None; }
    c.skip_ordinal();
    let month = c.month_word()?;
    c.sym(&[',']);
    let year = c.year()?;
    Some(Found { year: Some(year), month, day })
}

// 1월 1일
fn md_korean(c: &mut Cursor) -> Option<Found> {
    let (month, _) = c.num()?;
    if !c.word_is("월") { return None; }
    let (day, _) = c.num()?;
    if !c.word_is("일") { return None; }
    Some(Found { year: None, month, day })
}

// 10/18 or 10.18, not part of a longer numeric run
fn md_numeric(c: &mut Cursor) -> Option<Found> {
    if c.at > 0 && matches!(c.toks[c.at - 1], Tok::Sym('/' | '.' | '-')) { return None; }
    let (month, mlen) = c.num()?;
    if mlen > 2 { return None; }
    let sep = c.sym(&['/', '.'])?;
    let (day, dlen) = c.num()?;
    if dlen > 2 { return None; }
    // "1.2.3" or "10/18/2030" style runs are not a month/day pair
    if matches!(c.toks.get(c.at), Some(Tok::Sym(s)) if *s == sep) { return None; }
    Some(Found { year: None, month, day })
}

fn resolve(found: Found, today: NaiveDate) -> Option<NaiveDate> {
    match found.year {
        Some(y) => NaiveDate::from_ymd_opt(y, found.month, found.day),
        None => infer_year(found.month, found.day, today),
    }
}

fn infer_year(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let window = Duration::days(YEARLESS_LOOKBACK_DAYS);
    let year = today.year();
    let year = match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) if d > today + window => year - 1,
        Some(d) if d < today - window => year + 1,
        _ => year,
    };
    // Feb 29 outside a leap year → the next leap year
    (0..4).find_map(|k| NaiveDate::from_ymd_opt(year + k, month, day))
}

/// First valid date anywhere in `text`.
pub fn find_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let toks = tokenize(text);
    (0..toks.len()).find_map(|i| match_at(&toks, i).and_then(|f| resolve(f, today)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, dd: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, dd).unwrap()
    }

    fn today() -> NaiveDate {
        d(2026, 10, 18)
    }

    #[test]
    fn numeric_full_dates() {
        assert_eq!(find_date("2020-01-01", today()), Some(d(2020, 1, 1)));
        assert_eq!(find_date("2030.02.03", today()), Some(d(2030, 2, 3)));
        assert_eq!(find_date("Launching 2030/12/31 10:00", today()), Some(d(2030, 12, 31)));
    }

    #[test]
    fn english_month_names() {
        assert_eq!(find_date("Jan 1, 2030", today()).map(iso).as_deref(), Some("2030-01-01"));
        assert_eq!(find_date("January 1st 2030", today()).map(iso).as_deref(), Some("2030-01-01"));
        assert_eq!(find_date("Available 3 Sep 2027", today()).map(iso).as_deref(), Some("2027-09-03"));
    }

    #[test]
    fn korean_dates() {
        assert_eq!(find_date("2030년 1월 1일 오전 10:00 출시", today()), Some(d(2030, 1, 1)));
        assert_eq!(find_date("2030년1월1일", today()), Some(d(2030, 1, 1)));
        assert_eq!(find_date("11월 2일 출시 예정", today()), Some(d(2026, 11, 2)));
    }

    #[test]
    fn yearless_dates_infer_year() {
        // shortly after today → this year
        assert_eq!(find_date("10/25 오전 10:00", today()), Some(d(2026, 10, 25)));
        // recently passed → still this year
        assert_eq!(find_date("Oct 1", today()), Some(d(2026, 10, 1)));
        // far in the past → next year
        assert_eq!(find_date("1/5", today()), Some(d(2027, 1, 5)));
        // late December seen in early January → last year
        assert_eq!(find_date("12/28", d(2027, 1, 5)), Some(d(2026, 12, 28)));
        assert_eq!(find_date("Dec 31", d(2027, 1, 2)), Some(d(2026, 12, 31)));
        // Feb 29 in a non-leap year lands on the next leap year
        assert_eq!(find_date("2/29", d(2027, 2, 1)), Some(d(2028, 2, 29)));
    }

    #[test]
    fn invalid_dates_are_skipped() {
        assert_eq!(find_date("2030-13-01", today()), None);
        assert_eq!(find_date("Feb 30, 2030", today()), None);
        assert_eq!(find_date("1.2.3", today()), None);
        assert_eq!(find_date("10:00", today()), None);
    }

    #[test]
    fn markers_without_dates() {
        assert_eq!(ReleaseText::parse("출시 예정", today()), ReleaseText::Upcoming);
        assert_eq!(ReleaseText::parse("To be released", today()), ReleaseText::Upcoming);
        assert_eq!(ReleaseText::parse("Already released", today()), ReleaseText::Released);
        assert_eq!(ReleaseText::parse("구매하기", today()), ReleaseText::Released);
        assert_eq!(ReleaseText::parse("", today()), ReleaseText::Unknown);
        assert_eq!(ReleaseText::parse("Air Max Day", today()), ReleaseText::Unknown);
    }

    #[test]
    fn available_soon_is_not_released() {
        assert_eq!(ReleaseText::parse("Available Soon", today()), ReleaseText::Upcoming);
        assert_eq!(ReleaseText::parse("곧 출시", today()), ReleaseText::Upcoming);
        assert_eq!(ReleaseText::parse("Available now", today()), ReleaseText::Released);
    }

    #[test]
    fn date_wins_over_marker() {
        assert_eq!(
            ReleaseText::parse("출시 예정 2030-01-01", today()),
            ReleaseText::Date(d(2030, 1, 1))
        );
    }

    #[test]
    fn released_is_inclusive_of_today() {
        let today = today();
        assert!(ReleaseText::Date(today).is_released(today));
        assert!(ReleaseText::Date(d(2020, 1, 1)).is_released(today));
        assert!(!ReleaseText::Date(today.succ_opt().unwrap()).is_released(today));
        assert!(!ReleaseText::Unknown.is_released(today));
        assert!(!ReleaseText::Upcoming.is_released(today));
        assert!(ReleaseText::Released.is_released(today));
    }

    #[test]
    fn timestamps_read_in_site_time() {
        assert_eq!(parse_timestamp("2030-01-01T10:00:00+09:00"), Some(d(2030, 1, 1)));
        assert_eq!(parse_timestamp("2029-12-31T15:00:00.000Z"), Some(d(2030, 1, 1)));
        assert_eq!(parse_timestamp("2029-12-31T14:59:59Z"), Some(d(2029, 12, 31)));
        assert_eq!(parse_timestamp("2030-01-01T10:00:00"), Some(d(2030, 1, 1)));
        assert_eq!(parse_timestamp("2030-01-01"), Some(d(2030, 1, 1)));
        assert_eq!(parse_timestamp("soon"), None);
    }
}

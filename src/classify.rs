// src/classify.rs
use tracing::debug;

use crate::core::clock::Clock;
use crate::dates::ReleaseText;
use crate::item::{Item, Partition};

/// Split items into released / to-be-released against `clock`.
///
/// - Date on or before today, or an explicit "released" marker → released.
/// - Future date, "coming soon", empty or unparsable text → to-be-released.
///
/// Pure: same items + same clock ⇒ same partition.
pub fn classify(items: Vec<Item>, clock: &dyn Clock) -> Partition {
    let today = clock.today();
    let mut out = Partition::default();

    for item in items {
        let parsed = ReleaseText::parse(&item.raw_release_text, today);
        debug!(href = %item.href, ?parsed, "classified");
        if parsed.is_released(today) {
            out.released.push(item);
        } else {
            out.to_be_released.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Old", "/a", "2020-01-01"),
            Item::new("Future", "/b", "2030-01-01"),
            Item::new("Today", "/c", "2026-10-18"),
            Item::new("Soon", "/d", "출시 예정"),
            Item::new("Garbage", "/e", "???"),
            Item::new("Empty", "/f", ""),
            Item::new("Out", "/g", "Already released"),
        ]
    }

    fn hrefs(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.href.as_str()).collect()
    }

    #[test]
    fn splits_by_date_and_marker() {
        let p = classify(sample(), &clock());
        assert_eq!(hrefs(&p.released), vec!["/a", "/c", "/g"]);
        assert_eq!(hrefs(&p.to_be_released), vec!["/b", "/d", "/e", "/f"]);
    }

    #[test]
    fn partition_covers_input_exactly_once() {
        let input = sample();
        let all: HashSet<String> = input.iter().map(|i| i.href.clone()).collect();
        let p = classify(input.clone(), &clock());

        assert_eq!(p.len(), input.len());
        let released: HashSet<String> = p.released.iter().map(|i| i.href.clone()).collect();
        let pending: HashSet<String> = p.to_be_released.iter().map(|i| i.href.clone()).collect();
        assert!(released.is_disjoint(&pending));
        assert_eq!(&released | &pending, all);
    }

    #[test]
    fn unparsable_text_defaults_to_upcoming() {
        let p = classify(vec![Item::new("X", "/x", "launching whenever")], &clock());
        assert!(p.released.is_empty());
        assert_eq!(p.to_be_released.len(), 1);
    }

    #[test]
    fn late_december_read_in_january_is_released() {
        let jan = FixedClock(NaiveDate::from_ymd_opt(2027, 1, 5).unwrap());
        let p = classify(vec![Item::new("Holiday", "/h", "12/28 오전 10:00")], &jan);
        assert_eq!(p.released.len(), 1);
        assert!(p.to_be_released.is_empty());
    }

    #[test]
    fn available_soon_stays_upcoming() {
        let p = classify(vec![Item::new("Soon", "/s", "Available Soon")], &clock());
        assert!(p.released.is_empty());
        assert_eq!(p.to_be_released.len(), 1);
    }

    #[test]
    fn same_clock_same_partition() {
        let a = classify(sample(), &clock());
        let b = classify(sample(), &clock());
        assert_eq!(a, b);
    }
}

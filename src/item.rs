// src/item.rs
use serde::{Deserialize, Serialize};

/// One card from the upcoming-launches listing.
/// Field order is the key order of the exported JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub href: String,
    pub raw_release_text: String,
}

impl Item {
    pub fn new(name: impl Into<String>, href: impl Into<String>, raw_release_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            raw_release_text: raw_release_text.into(),
        }
    }
}

/// A to-be-released item after detail resolution.
/// `release_date` stays `None` (JSON `null`) when the detail page failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
}

impl ScheduledItem {
    pub fn unresolved(item: Item) -> Self {
        Self { item, release_date: None }
    }
}

/// Result of classification. Every input item lands in exactly one side,
/// input order preserved within each.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub released: Vec<Item>,
    pub to_be_released: Vec<Item>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.released.len() + self.to_be_released.len()
    }
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Registry entry describing a single post.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub file: String,
    pub summary: String,
}

impl PostRecord {
    pub fn sort_key(&self) -> SortKey {
        SortKey::from_id(&self.id)
    }
}

/// Ordering key for post ids.
///
/// Numeric ids rank above text ids. Numeric ids compare by value, text ids
/// compare lexicographically. The registry is sorted by this key, highest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Digits with leading zeros stripped, so `"007"` and `"7"` are equal.
    Numeric(String),
    Text(String),
}

impl SortKey {
    pub fn from_id(id: &str) -> Self {
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            SortKey::Numeric(id.trim_start_matches('0').to_string())
        } else {
            SortKey::Text(id.to_string())
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Compare by length first: no integer parsing, no overflow on long ids
            (SortKey::Numeric(a), SortKey::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Numeric(_), SortKey::Text(_)) => Ordering::Greater,
            (SortKey::Text(_), SortKey::Numeric(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

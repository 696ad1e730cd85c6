//! Version-history lookups for post creation dates
//!
//! The builder asks a [`HistoryLookup`] when each post was first added. Lookups are
//! allowed to fail: any [`LookupError`] is downgraded to a current-date fallback by
//! the caller, so implementations should report failures rather than swallow them.

pub mod git;

use std::path::Path;

pub use git::GitHistory;

use crate::error::LookupError;

/// Source of "first added" dates for post files
pub trait HistoryLookup {
    /// Return the raw history output for `path`, or `None` if the file has no history.
    ///
    /// Output is one `abbreviated-month year` entry per line, newest first.
    fn first_added(&self, path: &Path) -> Result<Option<String>, LookupError>;
}

/// Lookup that never finds history; every post gets the current date
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryLookup for NoHistory {
    fn first_added(&self, _path: &Path) -> Result<Option<String>, LookupError> {
        Ok(None)
    }
}

/// Pick the earliest entry from raw history output: the last non-empty line, lower-cased
pub fn earliest_entry(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .map(str::to_lowercase)
}

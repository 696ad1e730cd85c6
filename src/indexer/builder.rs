//! Registry builder for markdown posts.
//!
//! # Error Handling Strategy
//!
//! Two tiers, with nothing in between:
//!
//! - **History lookups**: the only recoverable failure. A [`LookupError`] is logged as a
//!   warning and the post is dated with the current month instead.
//! - **Everything else**: listing the directory, reading a post, serializing and writing
//!   the registry. These return a [`RegistryError`] and abort the run before any output
//!   is written, so there is no partial registry.
//!
//! [`LookupError`]: crate::error::LookupError

use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::history::{HistoryLookup, earliest_entry};
use crate::indexer::post_discovery::discover_posts;
use crate::models::PostRecord;
use crate::parsers::{extract_summary, extract_title, normalize_newlines};
use crate::registry_storage::write_registry;
use crate::utils::{current_month_year, post_id_from_filename};

/// Build the registry for every post in `posts_dir`
///
/// Reads each `.md` file, extracts its title and summary, asks `history` for the date
/// it was first added, and returns the records sorted highest id first (see
/// [`SortKey`](crate::models::SortKey)).
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a post cannot be read as
/// UTF-8. History lookup failures never fail the build.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use blog_registry::build_registry;
/// use blog_registry::history::GitHistory;
///
/// let registry = build_registry(Path::new("blogs/posts"), &GitHistory::new())?;
/// println!("Found {} posts", registry.len());
/// # Ok::<(), blog_registry::error::RegistryError>(())
/// ```
pub fn build_registry(posts_dir: &Path, history: &dyn HistoryLookup) -> Result<Vec<PostRecord>> {
    let posts = discover_posts(posts_dir)?;
    let mut registry = Vec::with_capacity(posts.len());

    for post in &posts {
        let content = fs::read_to_string(&post.path)
            .map_err(|source| RegistryError::ReadPost { path: post.path.clone(), source })?;
        let date = resolve_date(history, &post.path);

        let record = build_record(&post.filename, &content, date);
        debug!("Indexed {} as {:?} ({})", record.file, record.title, record.date);
        registry.push(record);
    }

    sort_registry(&mut registry);
    info!("Built registry with {} posts from {}", registry.len(), posts_dir.display());

    Ok(registry)
}

/// Build the registry described by `config` and write it to `config.output`
///
/// Returns the number of records written. The output file is replaced only after
/// every post has been processed.
pub fn generate_registry(config: &RegistryConfig, history: &dyn HistoryLookup) -> Result<usize> {
    let registry = build_registry(&config.posts_dir, history)?;
    write_registry(&config.output, &registry)?;
    Ok(registry.len())
}

/// Assemble one record from a post's file name, raw content and resolved date
pub fn build_record(filename: &str, content: &str, date: String) -> PostRecord {
    let content = normalize_newlines(content);
    let id = post_id_from_filename(filename);

    PostRecord {
        id: id.to_string(),
        title: extract_title(&content, id),
        date,
        file: filename.to_string(),
        summary: extract_summary(&content),
    }
}

/// Resolve the creation date for the post at `path`
///
/// Falls back to the current month when there is no history or the lookup fails.
pub fn resolve_date(history: &dyn HistoryLookup, path: &Path) -> String {
    match history.first_added(path) {
        Ok(Some(output)) => earliest_entry(&output).unwrap_or_else(current_month_year),
        Ok(None) => {
            debug!("No history for {}, using current date", path.display());
            current_month_year()
        }
        Err(e) => {
            warn!("History lookup failed for {}, using current date: {}", path.display(), e);
            current_month_year()
        }
    }
}

/// Sort records highest id first; records with equal keys keep their order
pub fn sort_registry(registry: &mut [PostRecord]) {
    registry.sort_by_cached_key(|record| Reverse(record.sort_key()));
}

//! Data models for the post registry.
//!
//! - [`PostRecord`] - One registry entry per markdown post
//! - [`SortKey`] - Ordering key derived from a post id

pub mod post;

pub use post::{PostRecord, SortKey};

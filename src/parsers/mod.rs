//! Markdown metadata extraction for blog posts
//!
//! Extraction is best-effort: a post without a heading falls back to its id for a
//! title, and a post without prose gets an empty summary. Nothing here fails.

pub mod markdown;

pub use markdown::{extract_summary, extract_title, normalize_newlines};

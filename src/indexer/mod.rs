//! Registry building for markdown posts
//!
//! Discovery lists the posts directory, the builder turns each post into a
//! [`PostRecord`](crate::models::PostRecord) and sorts the result. Records are rebuilt
//! from scratch on every run.

pub mod builder;
pub mod post_discovery;

pub use builder::{build_registry, generate_registry};
pub use post_discovery::{PostFile, discover_posts};

//! Blog Registry - Build a JSON index of markdown blog posts
//!
//! This library scans a directory of markdown posts and produces the registry a
//! static site renders its post list from. For every `.md` file it records:
//!
//! - The title, taken from the first `# ` heading
//! - A summary, taken from the first prose paragraph
//! - The month the post was first committed, looked up through git history
//!
//! Records are sorted newest (highest numeric id) first and written as a
//! pretty-printed JSON array.
//!
//! # Example
//!
//! ```no_run
//! use blog_registry::RegistryConfig;
//! use blog_registry::generate_registry;
//! use blog_registry::history::GitHistory;
//!
//! let config = RegistryConfig::default();
//! let count = generate_registry(&config, &GitHistory::new())?;
//! println!("Wrote {} posts to {}", count, config.output.display());
//! # Ok::<(), blog_registry::error::RegistryError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod registry_storage;
pub mod utils;

// Re-export commonly used types
pub use config::RegistryConfig;
pub use error::{LookupError, RegistryError};
pub use history::{GitHistory, HistoryLookup, NoHistory};
pub use indexer::builder::{build_registry, generate_registry};
pub use models::{PostRecord, SortKey};
pub use parsers::{extract_summary, extract_title};
pub use registry_storage::write_registry;

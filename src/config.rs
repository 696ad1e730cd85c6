use std::path::PathBuf;

/// Default location of the markdown posts
pub const DEFAULT_POSTS_DIR: &str = "blogs/posts";

/// Default location of the generated registry
pub const DEFAULT_OUTPUT_FILE: &str = "blogs/posts.json";

/// Input and output locations for one registry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub posts_dir: PathBuf,
    pub output: PathBuf,
}

impl RegistryConfig {
    pub fn new(posts_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { posts_dir: posts_dir.into(), output: output.into() }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POSTS_DIR, DEFAULT_OUTPUT_FILE)
    }
}

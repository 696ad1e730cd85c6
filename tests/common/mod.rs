//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blog_registry::utils::current_month_year;
use blog_registry::{HistoryLookup, LookupError};
use tempfile::TempDir;

/// Builder for temporary site directories laid out as `<root>/blogs/posts/*.md`
pub struct PostsDirBuilder {
    temp_dir: TempDir,
}

impl PostsDirBuilder {
    /// Create a new builder with an empty posts directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("blogs").join("posts"))
            .expect("Failed to create posts dir");
        Self { temp_dir }
    }

    /// Add a file to the posts directory with the given content
    pub fn with_file(self, filename: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.posts_dir().join(filename);
        fs::write(path, content).expect("Failed to write post");
        self
    }

    /// Add a post built with [`PostBuilder`]
    pub fn with_post(self, filename: &str, post: PostBuilder) -> Self {
        let content = post.to_markdown();
        self.with_file(filename, content)
    }

    /// Add a subdirectory inside the posts directory
    pub fn with_subdir(self, name: &str) -> Self {
        fs::create_dir(self.posts_dir().join(name)).expect("Failed to create subdir");
        self
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.temp_dir.path().join("blogs").join("posts")
    }

    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("blogs").join("posts.json")
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for PostsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for markdown post content
pub struct PostBuilder {
    title: Option<String>,
    paragraphs: Vec<String>,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self { title: None, paragraphs: Vec::new() }
    }

    /// Set the `# ` heading
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Append a paragraph (or any block separated by a blank line)
    pub fn paragraph(mut self, text: &str) -> Self {
        self.paragraphs.push(text.to_string());
        self
    }

    /// Append a fenced code block
    pub fn code_block(self, code: &str) -> Self {
        self.paragraph(&format!("```\n{}\n```", code))
    }

    pub fn to_markdown(&self) -> String {
        let mut blocks = Vec::new();
        if let Some(title) = &self.title {
            blocks.push(format!("# {}", title));
        }
        blocks.extend(self.paragraphs.iter().cloned());
        let mut markdown = blocks.join("\n\n");
        markdown.push('\n');
        markdown
    }
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// History lookup answering from a fixed table keyed by file name
///
/// Files missing from the table have no history. Files listed in `failing` return an
/// error as if git could not be run.
#[derive(Default)]
pub struct MockHistory {
    entries: HashMap<String, String>,
    failing: Vec<String>,
}

impl MockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw history output for `filename` (one entry per line, newest first)
    pub fn with_entry(mut self, filename: &str, output: &str) -> Self {
        self.entries.insert(filename.to_string(), output.to_string());
        self
    }

    pub fn failing_for(mut self, filename: &str) -> Self {
        self.failing.push(filename.to_string());
        self
    }
}

impl HistoryLookup for MockHistory {
    fn first_added(&self, path: &Path) -> Result<Option<String>, LookupError> {
        let filename =
            path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();

        if self.failing.contains(&filename) {
            return Err(LookupError::Spawn(io::Error::new(
                io::ErrorKind::NotFound,
                "mock history failure",
            )));
        }

        Ok(self.entries.get(&filename).cloned())
    }
}

/// Assert `date` is the current-date fallback, taken at `before` or just after
///
/// Accepting either value keeps the check correct across a month boundary.
pub fn assert_fallback_date(date: &str, before: &str) {
    let after = current_month_year();
    assert!(date == before || date == after, "{} is neither {} nor {}", date, before, after);
}

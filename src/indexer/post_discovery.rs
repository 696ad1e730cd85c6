use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::utils::is_post_filename;

/// A markdown post found in the posts directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFile {
    /// File name including the `.md` suffix, lossily decoded if not UTF-8
    pub filename: String,
    /// Posts directory joined with the file name
    pub path: PathBuf,
}

/// Find all `.md` files directly inside `posts_dir`
///
/// Files are returned sorted by name so repeated runs see the same order.
/// Subdirectories are not descended into and a directory whose name ends in `.md` is
/// skipped. A file name that is not valid UTF-8 is recorded in its lossy form, while
/// `path` still points at the real file.
///
/// # Errors
///
/// Returns [`RegistryError::ListDir`] if the directory or one of its entries cannot be
/// read.
pub fn discover_posts(posts_dir: &Path) -> Result<Vec<PostFile>> {
    let list_err =
        |source: io::Error| RegistryError::ListDir { path: posts_dir.to_path_buf(), source };

    let mut posts = Vec::new();
    for entry in fs::read_dir(posts_dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;

        // Non UTF-8 names are kept; the lossy form is only used for id and file
        let filename = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                let lossy = name.to_string_lossy().to_string();
                warn!("Post name is not valid UTF-8, recording it as {}", lossy);
                lossy
            }
        };

        if !is_post_filename(&filename) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            debug!("Skipping directory {}", path.display());
            continue;
        }

        posts.push(PostFile { filename, path });
    }

    posts.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn filenames(posts: &[PostFile]) -> Vec<&str> {
        posts.iter().map(|p| p.filename.as_str()).collect()
    }

    #[test]
    fn test_discover_only_markdown_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("1.md"), "# One").unwrap();
        fs::write(temp_dir.path().join("2.md"), "# Two").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(temp_dir.path().join("draft.MD"), "ignored").unwrap();

        let posts = discover_posts(temp_dir.path()).unwrap();
        assert_eq!(filenames(&posts), ["1.md", "2.md"]);
        assert_eq!(posts[0].path, temp_dir.path().join("1.md"));
    }

    #[test]
    fn test_discover_sorted_by_filename() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["c.md", "a.md", "b.md"] {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let posts = discover_posts(temp_dir.path()).unwrap();
        assert_eq!(filenames(&posts), ["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_discover_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("folder.md")).unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested").join("3.md"), "").unwrap();
        fs::write(temp_dir.path().join("1.md"), "").unwrap();

        let posts = discover_posts(temp_dir.path()).unwrap();
        assert_eq!(filenames(&posts), ["1.md"]);
    }

    // APFS rejects non UTF-8 names, so only Linux can create one
    #[cfg(target_os = "linux")]
    #[test]
    fn test_discover_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let raw_name = OsStr::from_bytes(b"\xff2.md");
        fs::write(temp_dir.path().join("1.md"), "# One").unwrap();
        fs::write(temp_dir.path().join(raw_name), "# Two").unwrap();

        let posts = discover_posts(temp_dir.path()).unwrap();
        assert_eq!(filenames(&posts), ["1.md", "\u{FFFD}2.md"]);
        assert_eq!(posts[1].path, temp_dir.path().join(raw_name));
    }

    #[test]
    fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(discover_posts(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = discover_posts(&missing).unwrap_err();
        assert!(matches!(err, RegistryError::ListDir { ref path, .. } if path == &missing));
    }
}

use std::path::{Path, PathBuf};
use std::process::Command;

use super::HistoryLookup;
use crate::error::LookupError;

const GIT_PROGRAM: &str = "git";

/// History lookup backed by `git log`
///
/// Asks git for the commits that added the file, formatted as `%b %Y`. Runs one
/// blocking process per lookup with no timeout.
#[derive(Debug, Clone, Default)]
pub struct GitHistory {
    repo_dir: Option<PathBuf>,
}

impl GitHistory {
    /// Run git in the current working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `repo_dir` instead of the current working directory
    pub fn in_dir(repo_dir: impl Into<PathBuf>) -> Self {
        Self { repo_dir: Some(repo_dir.into()) }
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(GIT_PROGRAM);
        cmd.args(["log", "--diff-filter=A", "--format=%ad", "--date=format:%b %Y", "--"])
            .arg(path);
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl HistoryLookup for GitHistory {
    fn first_added(&self, path: &Path) -> Result<Option<String>, LookupError> {
        // Relative paths are relative to our cwd, not to the repository git runs in
        let target = match &self.repo_dir {
            Some(_) => std::path::absolute(path).map_err(LookupError::Spawn)?,
            None => path.to_path_buf(),
        };
        let output = self.command(&target).output().map_err(LookupError::Spawn)?;

        if !output.status.success() {
            return Err(LookupError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(LookupError::InvalidOutput)?;
        if stdout.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(stdout))
    }
}

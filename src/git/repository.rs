use crate::error::{FwVersionError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    match_pattern: Option<String>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            match_pattern: None,
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            match_pattern: None,
        }
    }

    /// Restrict describe to tags matching a glob pattern (e.g., "v*")
    pub fn with_match_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }

    fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.repo.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch || e.code() == git2::ErrorCode::NotFound {
                FwVersionError::no_commit("HEAD does not point at a commit".to_string())
            } else {
                FwVersionError::Git(e)
            }
        })?;

        head.peel_to_commit()
            .map_err(|e| FwVersionError::no_commit(format!("cannot resolve HEAD commit: {}", e)))
    }
}

impl super::Repository for Git2Repository {
    fn describe_tags(&self) -> Result<String> {
        // Surface the empty-repository case as NoCommit rather than a
        // describe failure
        self.head_commit()?;

        let mut options = DescribeOptions::new();
        options.describe_tags();
        if let Some(pattern) = &self.match_pattern {
            options.pattern(pattern);
        }

        let describe = self.repo.describe(&options).map_err(|e| {
            FwVersionError::tag_not_found(format!("describe failed: {}", e))
        })?;

        let formatted = describe
            .format(Some(&DescribeFormatOptions::new()))
            .map_err(|e| FwVersionError::tag_not_found(format!("describe format failed: {}", e)))?;

        Ok(formatted.trim().to_string())
    }

    fn short_commit_hash(&self) -> Result<String> {
        let commit = self.head_commit()?;

        let short_id = commit
            .as_object()
            .short_id()
            .map_err(FwVersionError::Git)?;

        let hash = short_id.as_str().ok_or_else(|| {
            FwVersionError::no_commit("short commit id is not valid UTF-8".to_string())
        })?;

        Ok(hash.to_string())
    }

    fn changed_tracked_files(&self) -> Result<Vec<String>> {
        let head_tree = self.head_commit()?.tree()?;

        // Untracked files are excluded by default; this mirrors a
        // name-only diff against HEAD
        let mut options = git2::DiffOptions::new();
        let diff = self
            .repo
            .diff_tree_to_workdir_with_index(Some(&head_tree), Some(&mut options))?;

        let mut paths = Vec::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                paths.push(path.to_string_lossy().to_string());
            }
        }

        Ok(paths)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}

use crate::error::{FwVersionError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    describe_output: Option<String>,
    head_hash: Option<String>,
    changed_files: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository (no commits, no tags)
    pub fn new() -> Self {
        MockRepository {
            describe_output: None,
            head_hash: None,
            changed_files: Vec::new(),
        }
    }

    /// Set the describe output (i.e., a reachable tag exists)
    pub fn set_describe_output(&mut self, output: impl Into<String>) {
        self.describe_output = Some(output.into());
    }

    /// Set the short hash of the current commit
    pub fn set_head_hash(&mut self, hash: impl Into<String>) {
        self.head_hash = Some(hash.into());
    }

    /// Record a changed tracked file
    pub fn add_changed_file(&mut self, path: impl Into<String>) {
        self.changed_files.push(path.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn describe_tags(&self) -> Result<String> {
        if self.head_hash.is_none() {
            return Err(FwVersionError::no_commit("mock repository is empty"));
        }

        self.describe_output
            .clone()
            .ok_or_else(|| FwVersionError::tag_not_found("no tag configured in mock"))
    }

    fn short_commit_hash(&self) -> Result<String> {
        self.head_hash
            .clone()
            .ok_or_else(|| FwVersionError::no_commit("mock repository is empty"))
    }

    fn changed_tracked_files(&self) -> Result<Vec<String>> {
        if self.head_hash.is_none() {
            return Err(FwVersionError::no_commit("mock repository is empty"));
        }

        Ok(self.changed_files.clone())
    }
}

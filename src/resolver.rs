//! Version resolution pipeline
//!
//! Turns repository state into a [VersionDescriptor] in four steps:
//! query the nearest tag, parse it, query the short hash, and classify
//! working-tree dirtiness. The pipeline is linear, synchronous, and
//! idempotent: repeated calls against unchanged repository state yield an
//! identical descriptor.

use crate::domain::{Version, VersionDescriptor, VersionTag};
use crate::error::Result;
use crate::git::Repository;

/// Resolves the current repository state into a [VersionDescriptor]
pub struct VersionResolver<'a, R: Repository> {
    repo: &'a R,
}

impl<'a, R: Repository> VersionResolver<'a, R> {
    /// Create a resolver over a repository handle
    pub fn new(repo: &'a R) -> Self {
        VersionResolver { repo }
    }

    /// Run the full pipeline: tag -> version -> hash -> dirty flag
    pub fn resolve(&self) -> Result<VersionDescriptor> {
        let tag = self.resolve_tag()?;
        let version = Version::parse(tag.version_part())?;
        let commit_hash = self.resolve_commit_hash()?;
        let dirty = self.resolve_dirty_flag()?;

        Ok(VersionDescriptor::new(version, commit_hash, dirty))
    }

    /// Query the nearest reachable tag description for HEAD
    pub fn resolve_tag(&self) -> Result<VersionTag> {
        let describe = self.repo.describe_tags()?;
        Ok(VersionTag::new(describe))
    }

    /// Query the short hash of the current commit
    pub fn resolve_commit_hash(&self) -> Result<String> {
        self.repo.short_commit_hash()
    }

    /// Classify the working tree: dirty iff any tracked file differs from HEAD
    ///
    /// Point-in-time snapshot; concurrent modification during the build is
    /// not detected.
    pub fn resolve_dirty_flag(&self) -> Result<bool> {
        let changed = self.repo.changed_tracked_files()?;
        Ok(!changed.is_empty())
    }
}

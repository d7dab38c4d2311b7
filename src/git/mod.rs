//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git queries the
//! resolver needs, allowing for multiple implementations including real Git
//! repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait, which defines the
//! three repository queries fw-version consumes. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable deterministic testing against fixture state.
//!
//! ```rust
//! # use fw_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let describe = repo.describe_tags()?;
//! let hash = repo.short_commit_hash()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common git query trait for abstraction
///
/// This trait abstracts the repository queries the resolver performs so that
/// real and mock implementations are interchangeable. All queries are
/// read-only: no implementation mutates tags, commits, or the working tree.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// parallel build targets.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>] which handles Git-specific
/// and application errors uniformly. Implementations should map underlying
/// errors (like `git2::Error`) to the appropriate
/// [crate::error::FwVersionError] variants.
pub trait Repository: Send + Sync {
    /// Get the nearest tag description reachable from HEAD
    ///
    /// Equivalent to `git describe --tags`: returns the tag name itself when
    /// HEAD sits exactly on a tag, or the tag annotated with distance and
    /// hash (e.g., "v1.2.3-4-gdeadbee") otherwise.
    ///
    /// # Returns
    /// * `Ok(String)` - The describe output
    /// * `Err(TagNotFound)` - If no tag is reachable from HEAD
    /// * `Err(NoCommit)` - If the repository has no commits
    fn describe_tags(&self) -> Result<String>;

    /// Get the abbreviated hexadecimal identifier of the current commit
    ///
    /// # Returns
    /// * `Ok(String)` - The short hash of HEAD
    /// * `Err(NoCommit)` - If the repository has no commits
    fn short_commit_hash(&self) -> Result<String>;

    /// Get the paths of tracked files that differ from the current commit
    ///
    /// Mirrors `git diff --name-only HEAD`: uncommitted modifications to
    /// tracked files are reported, untracked files are not. The cardinality
    /// of the returned list is the dirty signal.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Changed tracked paths (empty for a clean tree)
    /// * `Err(NoCommit)` - If the repository has no commits
    fn changed_tracked_files(&self) -> Result<Vec<String>>;
}

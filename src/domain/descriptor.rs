use crate::domain::Version;
use std::fmt;

/// Resolved version state for a single build invocation.
///
/// Immutable once constructed; each build re-derives it from the current
/// repository state rather than persisting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDescriptor {
    pub version: Version,
    pub commit_hash: String,
    pub dirty: bool,
}

impl VersionDescriptor {
    /// Create a new descriptor
    pub fn new(version: Version, commit_hash: impl Into<String>, dirty: bool) -> Self {
        VersionDescriptor {
            version,
            commit_hash: commit_hash.into(),
            dirty,
        }
    }

    /// The dirty marker: "+" for a dirty working tree, empty otherwise
    pub fn dirty_marker(&self) -> &'static str {
        if self.dirty {
            "+"
        } else {
            ""
        }
    }
}

impl fmt::Display for VersionDescriptor {
    /// Compact form: v<major>.<minor>.<patch>-<hash><marker>
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{}-{}{}",
            self.version,
            self.commit_hash,
            self.dirty_marker()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_compact_clean() {
        let d = VersionDescriptor::new(Version::new(1, 0, 1), "a1b2c3d", false);
        assert_eq!(d.to_string(), "v1.0.1-a1b2c3d");
    }

    #[test]
    fn test_descriptor_compact_dirty() {
        let d = VersionDescriptor::new(Version::new(2, 5, 10), "deadbee", true);
        assert_eq!(d.to_string(), "v2.5.10-deadbee+");
    }

    #[test]
    fn test_dirty_marker() {
        let clean = VersionDescriptor::new(Version::new(0, 0, 0), "0000000", false);
        let dirty = VersionDescriptor::new(Version::new(0, 0, 0), "0000000", true);
        assert_eq!(clean.dirty_marker(), "");
        assert_eq!(dirty.dirty_marker(), "+");
    }
}

/// Represents the raw tag description returned by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub raw: String,
}

impl VersionTag {
    /// Create a new tag from a describe string
    pub fn new(raw: impl Into<String>) -> Self {
        VersionTag { raw: raw.into() }
    }

    /// Extract the version part of the tag (e.g., "v1.2.3" -> "1.2.3")
    ///
    /// Strips exactly one leading 'v'. A tag like "vv1.2.3" keeps its
    /// second 'v' and is rejected later during parsing.
    pub fn version_part(&self) -> &str {
        self.raw.strip_prefix('v').unwrap_or(&self.raw)
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

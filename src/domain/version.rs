use crate::error::{FwVersionError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// Takes the first three dot-separated fields positionally; only the
    /// leading run of digits of each field is significant, so describe
    /// decoration on the patch field ("1.2.3-4-gdeadbee") is truncated.
    /// The major field must start with a digit.
    pub fn parse(tag: &str) -> Result<Self> {
        // Remove a single leading 'v' prefix
        let clean_tag = tag.strip_prefix('v').unwrap_or(tag);

        let re = regex::Regex::new(r"^(\d+)[^.]*\.(\d+)[^.]*\.(\d+)")
            .map_err(|e| FwVersionError::malformed_tag(format!("internal pattern error: {}", e)))?;

        let captures = re.captures(clean_tag).ok_or_else(|| {
            FwVersionError::malformed_tag(format!(
                "'{}' - expected X.Y.Z with numeric components",
                tag
            ))
        })?;

        let major = Self::parse_field(&captures[1], "major", tag)?;
        let minor = Self::parse_field(&captures[2], "minor", tag)?;
        let patch = Self::parse_field(&captures[3], "patch", tag)?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    fn parse_field(field: &str, name: &str, tag: &str) -> Result<u32> {
        field.parse::<u32>().map_err(|_| {
            FwVersionError::malformed_tag(format!(
                "invalid {} component '{}' in tag '{}'",
                name, field, tag
            ))
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

use thiserror::Error;

/// Unified error type for fw-version operations
#[derive(Error, Debug)]
pub enum FwVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("No version tag reachable from HEAD: {0}")]
    TagNotFound(String),

    #[error("Malformed version tag: {0}")]
    MalformedTag(String),

    #[error("Repository has no commits: {0}")]
    NoCommit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in fw-version
pub type Result<T> = std::result::Result<T, FwVersionError>;

impl FwVersionError {
    /// Create a tag-not-found error with context
    pub fn tag_not_found(msg: impl Into<String>) -> Self {
        FwVersionError::TagNotFound(msg.into())
    }

    /// Create a malformed-tag error with context
    pub fn malformed_tag(msg: impl Into<String>) -> Self {
        FwVersionError::MalformedTag(msg.into())
    }

    /// Create a no-commit error with context
    pub fn no_commit(msg: impl Into<String>) -> Self {
        FwVersionError::NoCommit(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FwVersionError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FwVersionError::tag_not_found("no tags in history");
        assert_eq!(
            err.to_string(),
            "No version tag reachable from HEAD: no tags in history"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FwVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(FwVersionError::malformed_tag("test")
            .to_string()
            .contains("Malformed"));
        assert!(FwVersionError::no_commit("test")
            .to_string()
            .contains("no commits"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (
                FwVersionError::tag_not_found("x"),
                "No version tag reachable from HEAD",
            ),
            (FwVersionError::malformed_tag("x"), "Malformed version tag"),
            (FwVersionError::no_commit("x"), "Repository has no commits"),
            (FwVersionError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            FwVersionError::tag_not_found(""),
            FwVersionError::malformed_tag(""),
            FwVersionError::no_commit(""),
            FwVersionError::config(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }
}

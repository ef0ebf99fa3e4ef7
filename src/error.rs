use thiserror::Error;

/// Unified error type for auto-version operations
#[derive(Error, Debug)]
pub enum AutoVersionError {
    #[error("Invalid bump type '{0}'. Use: major, minor, or patch")]
    Usage(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git command failed: {0}")]
    Command(String),

    #[error("Failed to create version commit: {0}")]
    Commit(String),

    #[error("Failed to create tag: {0}")]
    Tag(String),

    #[error("Failed to push release: {0}")]
    Push(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience type alias for Results in auto-version
pub type Result<T> = std::result::Result<T, AutoVersionError>;

impl AutoVersionError {
    /// Create a usage error for an unrecognized bump type
    pub fn usage(value: impl Into<String>) -> Self {
        AutoVersionError::Usage(value.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AutoVersionError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoVersionError::Config(msg.into())
    }

    /// Create a git command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        AutoVersionError::Command(msg.into())
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        AutoVersionError::Commit(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        AutoVersionError::Tag(msg.into())
    }

    /// Create a push error with context
    pub fn push(msg: impl Into<String>) -> Self {
        AutoVersionError::Push(msg.into())
    }
}

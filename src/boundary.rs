use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while preparing a release.
/// The run continues; these are reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Manifest is absent, the fallback version is used
    ManifestMissing { path: PathBuf, fallback: String },
    /// Manifest exists but has no `version = "..."` declaration
    VersionNotFound { path: PathBuf, fallback: String },
    /// An auxiliary descriptor file is absent and was skipped
    AuxFileMissing { path: PathBuf },
    /// Working directory is not inside a git repository
    NotARepository { path: PathBuf },
    /// HEAD is on a different branch than the one that will be pushed
    BranchMismatch { current: String, release: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::ManifestMissing { path, fallback } => write!(
                f,
                "{} not found, using version {}",
                path.display(),
                fallback
            ),
            BoundaryWarning::VersionNotFound { path, fallback } => write!(
                f,
                "No version declaration in {}, using version {}",
                path.display(),
                fallback
            ),
            BoundaryWarning::AuxFileMissing { path } => {
                write!(f, "{} not found, skipping", path.display())
            }
            BoundaryWarning::NotARepository { path } => {
                write!(f, "{} is not inside a git repository", path.display())
            }
            BoundaryWarning::BranchMismatch { current, release } => write!(
                f,
                "Currently on branch '{}' but the release pushes '{}'",
                current, release
            ),
        }
    }
}

use git2::Repository as Git2Repo;
use std::path::Path;

use crate::boundary::BoundaryWarning;

/// Read-only facts about the repository a release runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// Short name of the checked-out branch, `None` when HEAD is detached or unborn
    pub branch: Option<String>,
}

impl RepositoryInfo {
    /// Open or discover the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self, git2::Error> {
        let repo = Git2Repo::discover(path)?;

        let branch = match repo.head() {
            Ok(head) if head.is_branch() => head.shorthand().map(|s| s.to_string()),
            _ => None,
        };

        Ok(RepositoryInfo { branch })
    }
}

/// Inspect `path` before anything is mutated.
///
/// Returns warnings only; a missing repository or an unexpected branch does
/// not stop the release, the publish step reports the real failure.
pub fn preflight(path: &Path, release_branch: &str) -> Vec<BoundaryWarning> {
    match RepositoryInfo::discover(path) {
        Ok(RepositoryInfo {
            branch: Some(current),
        }) if current != release_branch => vec![BoundaryWarning::BranchMismatch {
            current,
            release: release_branch.to_string(),
        }],
        Ok(_) => Vec::new(),
        Err(_) => vec![BoundaryWarning::NotARepository {
            path: path.to_path_buf(),
        }],
    }
}

use std::path::PathBuf;
use std::process::Command;

use crate::error::{AutoVersionError, Result};
use crate::git::{GitOperation, GitOutput, Vcs};

/// [Vcs] backed by the system `git` binary
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    /// Run git commands inside `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        SystemGit {
            workdir: workdir.into(),
        }
    }

    /// Run `git <args>` and capture its output.
    ///
    /// # Returns
    /// * `Ok(GitOutput)` - If git exits with code 0
    /// * `Err` - If git cannot be spawned or exits non-zero
    fn run_git(&self, args: &[&str], operation: GitOperation) -> Result<GitOutput> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                AutoVersionError::command(format!("Failed to run git {}: {}", operation, e))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let detail = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(AutoVersionError::command(format!(
                "git {} failed with exit code {}: {}",
                operation,
                output.status.code().unwrap_or(-1),
                detail
            )));
        }

        Ok(GitOutput { stdout, stderr })
    }
}

impl Vcs for SystemGit {
    fn stage_all(&self) -> Result<GitOutput> {
        self.run_git(&["add", "."], GitOperation::Stage)
    }

    fn commit(&self, message: &str) -> Result<GitOutput> {
        self.run_git(&["commit", "-m", message], GitOperation::Commit)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<GitOutput> {
        self.run_git(&["tag", "-a", name, "-m", message], GitOperation::Tag)
    }

    fn push(&self, remote: &str, refspec: &str) -> Result<GitOutput> {
        self.run_git(&["push", remote, refspec], GitOperation::Push)
    }
}

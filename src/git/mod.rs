//! Version-control abstraction layer
//!
//! The release is recorded through the [Vcs] trait so the publish sequence
//! can run against the real `git` binary or against a recording mock.
//!
//! - [command::SystemGit]: shells out to the system `git`, inheriting the
//!   user's config, SSH agent and credential helpers
//! - [mock::MockVcs]: records calls and fails on demand, for tests
//! - [repository::RepositoryInfo]: read-only preflight via `git2`
//!
//! ```rust
//! # use auto_version::git::Vcs;
//! # fn example<V: Vcs>(vcs: &V) -> auto_version::Result<()> {
//! vcs.stage_all()?;
//! vcs.commit("chore: bump version to 1.2.3")?;
//! vcs.create_annotated_tag("v1.2.3", "Release v1.2.3")?;
//! vcs.push("origin", "main")?;
//! vcs.push("origin", "v1.2.3")?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::SystemGit;
pub use mock::MockVcs;
pub use repository::RepositoryInfo;

use std::fmt;

use crate::error::Result;

/// Captured output of a successful version-control invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

/// The mutating operations a release performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitOperation {
    Stage,
    Commit,
    Tag,
    Push,
}

impl fmt::Display for GitOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GitOperation::Stage => "stage changes",
            GitOperation::Commit => "create commit",
            GitOperation::Tag => "create tag",
            GitOperation::Push => "push",
        };
        f.write_str(name)
    }
}

/// Synchronous version-control operations used to publish a release
///
/// Each method runs one external invocation and blocks until it exits.
/// A non-zero exit is returned as [crate::error::AutoVersionError::Command]
/// carrying the operation and the captured stderr.
pub trait Vcs {
    /// Stage every change in the working tree (`git add .`)
    fn stage_all(&self) -> Result<GitOutput>;

    /// Record staged changes with `message` (`git commit -m`)
    fn commit(&self, message: &str) -> Result<GitOutput>;

    /// Create an annotated tag at HEAD (`git tag -a <name> -m <message>`)
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<GitOutput>;

    /// Push a branch or tag to a remote (`git push <remote> <refspec>`)
    fn push(&self, remote: &str, refspec: &str) -> Result<GitOutput>;
}

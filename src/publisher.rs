//! Records a release in version control: commit, annotated tag, push.
//!
//! Each phase runs its git invocations in order and stops at the first
//! failure. Nothing is rolled back; commits, tags and pushes that already
//! happened stay in place.

use crate::config::GitConfig;
use crate::domain::ReleaseTag;
use crate::error::{AutoVersionError, Result};
use crate::git::Vcs;
use crate::ui;

/// Stage every change and create the release commit.
///
/// Steps:
/// 1. `git add .`
/// 2. `git commit -m "<commit message for version>"`
///
/// # Returns
/// * `Ok(String)` - The commit message used
/// * `Err(AutoVersionError::Commit)` - If staging or committing failed
pub fn create_version_commit<V: Vcs>(vcs: &V, git: &GitConfig, version: &str) -> Result<String> {
    let message = git.commit_message_for(version);

    vcs.stage_all()
        .and_then(|_| vcs.commit(&message))
        .map_err(|e| AutoVersionError::commit(e.to_string()))?;

    ui::display_success(&format!("Created version commit: {}", message));
    Ok(message)
}

/// Create the annotated release tag at HEAD.
pub fn create_version_tag<V: Vcs>(vcs: &V, tag: &ReleaseTag) -> Result<()> {
    vcs.create_annotated_tag(&tag.name, &tag.message)
        .map_err(|e| AutoVersionError::tag(e.to_string()))?;

    ui::display_success(&format!("Created tag: {}", tag.name));
    Ok(())
}

/// Push the release branch, then the tag, to the configured remote.
pub fn push_release<V: Vcs>(vcs: &V, git: &GitConfig, tag: &ReleaseTag) -> Result<()> {
    vcs.push(&git.remote, &git.branch)
        .and_then(|_| vcs.push(&git.remote, &tag.name))
        .map_err(|e| AutoVersionError::push(e.to_string()))?;

    ui::display_success(&format!("Pushed tag: {}", tag.name));
    Ok(())
}

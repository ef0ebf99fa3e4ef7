//! Release workflow orchestration
//!
//! Runs the release strictly in order:
//! resolve -> increment -> patch manifest -> patch auxiliary files ->
//! commit -> tag -> push. The first error ends the run; later steps are
//! never attempted.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::domain::{BumpKind, ReleaseTag, Version};
use crate::error::Result;
use crate::git::{repository, Vcs};
use crate::patcher::{self, PatchOutcome, PatchReport};
use crate::publisher;
use crate::resolver;
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI arguments without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseArgs {
    /// Which component to increment
    pub bump: BumpKind,

    /// Directory holding the manifest and the repository
    pub workdir: PathBuf,

    /// Report the plan without touching files or git
    pub dry_run: bool,
}

/// Result of a successful release run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Version found in the manifest (or the fallback)
    pub previous: String,

    /// Version that was written
    pub version: Version,

    /// Tag that was created
    pub tag: String,

    /// Manifest report followed by one report per auxiliary file
    pub patched: Vec<PatchReport>,

    /// Whether commit, tag and pushes ran (false for dry runs)
    pub published: bool,
}

/// Main release workflow
///
/// # Arguments
/// * `args` - Bump kind, working directory, dry-run flag
/// * `config` - Files to patch and where to publish
/// * `vcs` - Version control used for commit, tag and push
/// * `now` - Timestamp recorded in the tag annotation
///
/// # Returns
/// * `Ok(ReleaseOutcome)` - Every step succeeded (or the dry run was reported)
/// * `Err` - The first failing step; nothing after it ran
pub fn run_release<V: Vcs>(
    args: &ReleaseArgs,
    config: &Config,
    vcs: &V,
    now: DateTime<Utc>,
) -> Result<ReleaseOutcome> {
    let manifest = args.workdir.join(&config.manifest);

    // Resolve
    let resolved = resolver::resolve_version(&manifest, &config.fallback_version)?;
    if let Some(warning) = &resolved.warning {
        ui::display_boundary_warning(warning);
    }
    ui::display_status(&format!("Current version: {}", resolved.version));

    // Increment
    let version = Version::parse(&resolved.version)?.bump(args.bump)?;
    let new_version = version.to_string();
    ui::display_version_change(&resolved.version, &new_version, args.bump.as_str());

    let tag = ReleaseTag::new(&config.project_name, &config.git.tag_prefix, &version, now);

    if args.dry_run {
        let mut patched = vec![patcher::preview_manifest(&manifest, &new_version)?];
        patched.extend(patcher::preview_aux_files(
            &args.workdir,
            &config.aux_files,
            &new_version,
        )?);

        ui::display_dry_run_plan(
            &patched,
            &config.git.commit_message_for(&new_version),
            &tag.name,
            &config.git.remote,
            &config.git.branch,
        );

        return Ok(ReleaseOutcome {
            previous: resolved.version,
            version,
            tag: tag.name,
            patched,
            published: false,
        });
    }

    for warning in repository::preflight(&args.workdir, &config.git.branch) {
        ui::display_boundary_warning(&warning);
    }

    // Patch manifest; a missing manifest was already reported by the resolver
    let manifest_report = patcher::patch_manifest(&manifest, &new_version)?;
    if manifest_report.outcome == PatchOutcome::Updated {
        ui::display_patch_report(&manifest_report, &new_version);
    }

    // Patch auxiliary files
    let aux_reports = patcher::patch_aux_files(&args.workdir, &config.aux_files, &new_version)?;
    for report in &aux_reports {
        ui::display_patch_report(report, &new_version);
    }

    // Commit, tag, push
    publisher::create_version_commit(vcs, &config.git, &new_version)?;
    publisher::create_version_tag(vcs, &tag)?;
    publisher::push_release(vcs, &config.git, &tag)?;

    let mut patched = vec![manifest_report];
    patched.extend(aux_reports);

    Ok(ReleaseOutcome {
        previous: resolved.version,
        version,
        tag: tag.name,
        patched,
        published: true,
    })
}

//! Textual version rewrites for the manifest and auxiliary descriptors.
//!
//! Files are rewritten whole with regular-expression substitutions rather than
//! parsed, so comments, ordering and formatting outside the matched spans are
//! preserved byte for byte.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};

use crate::boundary::BoundaryWarning;
use crate::error::Result;

/// Any `version = "..."` declaration
const MANIFEST_VERSION: &str = r#"version = "[^"]+""#;

/// A version declaration immediately followed by a `url` line
const MANIFEST_VERSION_BEFORE_URL: &str = r#"version = "[^"]+"\s*\n(\s*url)"#;

/// An installer attribute still bound to the build-time variable
const DESCRIPTOR_VERSION_ATTRIBUTE: &str = r#"Version="\$\(var\.Version\)""#;

/// The build-time version variable anywhere in a descriptor
const DESCRIPTOR_VERSION_VARIABLE: &str = r#"\$\(var\.Version\)"#;

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Updated,
    /// Present, but nothing in it matched
    Unchanged,
    Skipped,
}

/// Result of patching one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

impl PatchReport {
    fn updated(path: &Path) -> Self {
        PatchReport {
            path: path.to_path_buf(),
            outcome: PatchOutcome::Updated,
        }
    }

    fn unchanged(path: &Path) -> Self {
        PatchReport {
            path: path.to_path_buf(),
            outcome: PatchOutcome::Unchanged,
        }
    }

    fn skipped(path: &Path) -> Self {
        PatchReport {
            path: path.to_path_buf(),
            outcome: PatchOutcome::Skipped,
        }
    }

    /// Warning to surface when the file was skipped
    pub fn warning(&self) -> Option<BoundaryWarning> {
        match self.outcome {
            PatchOutcome::Updated | PatchOutcome::Unchanged => None,
            PatchOutcome::Skipped => Some(BoundaryWarning::AuxFileMissing {
                path: self.path.clone(),
            }),
        }
    }
}

/// Rewrite every version declaration in manifest text to `new_version`.
pub fn patch_manifest_content(content: &str, new_version: &str) -> Result<String> {
    let declaration = format!("version = \"{}\"", new_version);

    let every = Regex::new(MANIFEST_VERSION)?;
    let content = every.replace_all(content, NoExpand(&declaration));

    // Best-effort second pass for a declaration that sits right above a url line.
    let before_url = Regex::new(MANIFEST_VERSION_BEFORE_URL)?;
    let content = before_url.replace_all(&content, |caps: &regex::Captures<'_>| {
        format!("{}\n{}", declaration, &caps[1])
    });

    Ok(content.into_owned())
}

/// Replace the installer version variable in descriptor text with `new_version`.
pub fn patch_descriptor_content(content: &str, new_version: &str) -> Result<String> {
    let attribute = Regex::new(DESCRIPTOR_VERSION_ATTRIBUTE)?;
    let pinned = format!("Version=\"{}\"", new_version);
    let content = attribute.replace_all(content, NoExpand(&pinned));

    let variable = Regex::new(DESCRIPTOR_VERSION_VARIABLE)?;
    let content = variable.replace_all(&content, NoExpand(new_version));

    Ok(content.into_owned())
}

/// Rewrite the manifest at `path` in place.
///
/// A missing manifest is reported as skipped and is never created.
pub fn patch_manifest(path: &Path, new_version: &str) -> Result<PatchReport> {
    rewrite_file(path, |content| patch_manifest_content(content, new_version))
}

/// Rewrite each auxiliary descriptor under `root` in place, skipping absent ones.
pub fn patch_aux_files(
    root: &Path,
    files: &[PathBuf],
    new_version: &str,
) -> Result<Vec<PatchReport>> {
    files
        .iter()
        .map(|file| {
            rewrite_file(&root.join(file), |content| {
                patch_descriptor_content(content, new_version)
            })
        })
        .collect()
}

/// Report what [patch_manifest] would do to `path`, without writing
pub fn preview_manifest(path: &Path, new_version: &str) -> Result<PatchReport> {
    inspect_file(path, |content| patch_manifest_content(content, new_version))
        .map(|(report, _)| report)
}

/// Report what [patch_aux_files] would do under `root`, without writing
pub fn preview_aux_files(
    root: &Path,
    files: &[PathBuf],
    new_version: &str,
) -> Result<Vec<PatchReport>> {
    files
        .iter()
        .map(|file| {
            inspect_file(&root.join(file), |content| {
                patch_descriptor_content(content, new_version)
            })
            .map(|(report, _)| report)
        })
        .collect()
}

fn rewrite_file<F>(path: &Path, patch: F) -> Result<PatchReport>
where
    F: FnOnce(&str) -> Result<String>,
{
    let (report, patched) = inspect_file(path, patch)?;
    if let Some(patched) = patched {
        fs::write(path, patched)?;
    }
    Ok(report)
}

/// Apply `patch` to the file in memory; the new content is returned only if it differs
fn inspect_file<F>(path: &Path, patch: F) -> Result<(PatchReport, Option<String>)>
where
    F: FnOnce(&str) -> Result<String>,
{
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok((PatchReport::skipped(path), None));
        }
        Err(e) => return Err(e.into()),
    };

    let patched = patch(&content)?;
    if patched == content {
        Ok((PatchReport::unchanged(path), None))
    } else {
        Ok((PatchReport::updated(path), Some(patched)))
    }
}

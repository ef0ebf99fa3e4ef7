//! Current-version lookup in the project manifest.
//!
//! The manifest is searched as plain text for the first `version = "..."`
//! declaration. A missing manifest or a manifest without a declaration is
//! not an error: the configured fallback version is used instead.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

use crate::boundary::BoundaryWarning;
use crate::error::Result;

/// Pattern capturing the value of a version declaration
pub const VERSION_DECLARATION: &str = r#"version = "([^"]+)""#;

/// The version found in a manifest, or the fallback with the reason it was used
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVersion {
    pub version: String,
    pub warning: Option<BoundaryWarning>,
}

/// Return the first declared version in `content`, if any
pub fn resolve_from_content(content: &str) -> Option<String> {
    Regex::new(VERSION_DECLARATION)
        .ok()
        .and_then(|re| re.captures(content))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Resolve the current version from the manifest at `manifest`.
///
/// # Returns
/// * `Ok(ResolvedVersion)` - Declared version, or `fallback` with a warning
///   when the file is absent or declares no version
/// * `Err` - If the file exists but cannot be read as UTF-8 text
pub fn resolve_version(manifest: &Path, fallback: &str) -> Result<ResolvedVersion> {
    let content = match fs::read_to_string(manifest) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(ResolvedVersion {
                version: fallback.to_string(),
                warning: Some(BoundaryWarning::ManifestMissing {
                    path: manifest.to_path_buf(),
                    fallback: fallback.to_string(),
                }),
            });
        }
        Err(e) => return Err(e.into()),
    };

    match resolve_from_content(&content) {
        Some(version) => Ok(ResolvedVersion {
            version,
            warning: None,
        }),
        None => Ok(ResolvedVersion {
            version: fallback.to_string(),
            warning: Some(BoundaryWarning::VersionNotFound {
                path: manifest.to_path_buf(),
                fallback: fallback.to_string(),
            }),
        }),
    }
}

/// Resolve the current version string, discarding any warning
pub fn resolve_current_version(manifest: &Path, fallback: &str) -> Result<String> {
    resolve_version(manifest, fallback).map(|resolved| resolved.version)
}

use chrono::{DateTime, Utc};

use crate::domain::Version;

/// Fixed description line embedded in every release tag annotation
pub const RELEASE_DESCRIPTION: &str = "Automatic version bump and release.";

/// Timestamp layout used in the tag annotation
pub const TAG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// An annotated release tag: `<prefix><version>` plus its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
    pub message: String,
}

impl ReleaseTag {
    /// Build the tag for a release of `project` at `version`, stamped with `now`.
    ///
    /// The message has the shape:
    ///
    /// ```text
    /// Infra v1.2.3 - Automated Release
    ///
    /// Automatic version bump and release.
    ///
    /// Date: 2024-05-01 12:00:00 UTC
    /// ```
    pub fn new(project: &str, prefix: &str, version: &Version, now: DateTime<Utc>) -> Self {
        let name = format!("{}{}", prefix, version);
        let message = format!(
            "{} {} - Automated Release\n\n{}\n\nDate: {}",
            project,
            name,
            RELEASE_DESCRIPTION,
            now.format(TAG_DATE_FORMAT)
        );

        ReleaseTag { name, message }
    }
}

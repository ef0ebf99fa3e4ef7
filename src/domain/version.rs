use crate::error::{AutoVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation (major.minor.patch, no pre-release segments)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of exactly three dot-separated numbers.
    ///
    /// Unlike tag names, manifest versions carry no `v` prefix, so none is stripped.
    pub fn parse(version: &str) -> Result<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return Err(AutoVersionError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                version
            )));
        }

        let major = parts[0].parse::<u64>().map_err(|_| {
            AutoVersionError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u64>().map_err(|_| {
            AutoVersionError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u64>().map_err(|_| {
            AutoVersionError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump kind
    ///
    /// Fails when the incremented component no longer fits.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let next = match kind {
            BumpKind::Major => Version::new(increment(self.major, "major")?, 0, 0),
            BumpKind::Minor => Version::new(self.major, increment(self.minor, "minor")?, 0),
            BumpKind::Patch => {
                Version::new(self.major, self.minor, increment(self.patch, "patch")?)
            }
        };
        Ok(next)
    }
}

fn increment(component: u64, name: &str) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| {
        AutoVersionError::version(format!(
            "Cannot bump {} version: {} is already the largest supported value",
            name, component
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    /// Map any label to a bump kind, treating everything unrecognized as a patch bump
    pub fn from_label_or_patch(label: &str) -> Self {
        label.parse().unwrap_or(BumpKind::Patch)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl FromStr for BumpKind {
    type Err = AutoVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(AutoVersionError::usage(other)),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Increment a `major.minor.patch` string by the named bump kind.
///
/// - `major` -> `(major+1).0.0`
/// - `minor` -> `major.(minor+1).0`
/// - anything else -> `major.minor.(patch+1)`
///
/// # Example
/// ```
/// use auto_version::domain::increment_version;
///
/// assert_eq!(increment_version("2.4.9", "minor").unwrap(), "2.5.0");
/// assert_eq!(increment_version("0.1.0", "patch").unwrap(), "0.1.1");
/// ```
pub fn increment_version(version: &str, bump: &str) -> Result<String> {
    let current = Version::parse(version)?;
    Ok(current.bump(BumpKind::from_label_or_patch(bump))?.to_string())
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AutoVersionError, Result};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "autoversion.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".autoversion.toml";

/// Represents the complete configuration for auto-version.
///
/// Names the files to patch, the project name used in tag annotations,
/// and where the release is pushed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_aux_files")]
    pub aux_files: Vec<PathBuf>,

    #[serde(default = "default_fallback_version")]
    pub fallback_version: String,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_project_name() -> String {
    "Infra".to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

/// Returns the default list of installer descriptors that embed the version.
fn default_aux_files() -> Vec<PathBuf> {
    vec![PathBuf::from("wix/main.wxs")]
}

fn default_fallback_version() -> String {
    "0.1.0".to_string()
}

/// Where and how the release is recorded in version control.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Commit message template; `{version}` is replaced with the new version.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_commit_message() -> String {
    "chore: bump version to {version}".to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
            branch: default_branch(),
            tag_prefix: default_tag_prefix(),
            commit_message: default_commit_message(),
        }
    }
}

impl GitConfig {
    /// Render the commit message for `version`
    pub fn commit_message_for(&self, version: &str) -> String {
        self.commit_message.replace("{version}", version)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_name: default_project_name(),
            manifest: default_manifest(),
            aux_files: default_aux_files(),
            fallback_version: default_fallback_version(),
            git: GitConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autoversion.toml` in `workdir`
/// 3. `.autoversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, workdir: &Path) -> Result<Config> {
    let local = workdir.join(LOCAL_CONFIG_FILE);

    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            user
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        AutoVersionError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| AutoVersionError::config(format!("Invalid {}: {}", path.display(), e)))
}

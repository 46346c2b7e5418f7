//! Configuration management for `nospaces-core`.
//!
//! Defines [`RenameConfig`], the knobs of a rename pass, and how it is loaded
//! from YAML. Callers usually resolve a config with [`RenameConfig::load`] and
//! then layer command-line overrides on top.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::NospacesError;
use crate::sanitizer::ExtensionlessPolicy;

/// Default name of the per-run log file written into the target directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "rename_log.txt";

/// Directory (under the platform config dir) holding the user config file.
pub const CONFIG_DIR_NAME: &str = "nospaces";

/// File name of the user config file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Order in which directory entries are processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrder {
    /// Lexicographic by file name, identical on every platform.
    #[default]
    Sorted,
    /// Whatever order the operating system returns.
    Listing,
}

/// Settings for a single rename pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RenameConfig {
    /// File name of the rename log, created inside the target directory.
    pub log_file_name: String,
    /// How names without an extension are rebuilt.
    pub extensionless: ExtensionlessPolicy,
    /// Processing order of directory entries.
    pub order: EntryOrder,
    /// Report planned renames without touching the filesystem.
    pub dry_run: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            extensionless: ExtensionlessPolicy::default(),
            order: EntryOrder::default(),
            dry_run: false,
        }
    }
}

impl RenameConfig {
    /// Loads a configuration from a YAML file on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading rename config from {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parses and validates a YAML document. An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: RenameConfig = if text.trim().is_empty() {
            RenameConfig::default()
        } else {
            serde_yml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist and parse. Otherwise the user config file is
    /// used when present, and the built-in defaults when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                info!("Using config file {}", path.display());
                Self::load_from_file(&path)
            }
            _ => {
                debug!("No config file found, using built-in defaults.");
                Ok(Self::default())
            }
        }
    }

    /// Checks that the log file name is a plain file name inside the target directory.
    pub fn validate(&self) -> Result<(), NospacesError> {
        let name = self.log_file_name.as_str();
        if name.trim().is_empty() {
            return Err(NospacesError::InvalidConfig(
                "'log_file_name' cannot be empty".to_string(),
            ));
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(NospacesError::InvalidConfig(format!(
                "'log_file_name' must be a plain file name, got '{}'",
                name
            )));
        }
        Ok(())
    }

    /// Path of the rename log for a run over `directory`.
    pub fn log_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.log_file_name)
    }
}

/// Location of the user config file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

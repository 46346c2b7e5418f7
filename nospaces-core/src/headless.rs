// nospaces-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running a rename pass without a console.
//! Events go to the `log` facade through [`LogReporter`].

use std::path::Path;

use crate::config::RenameConfig;
use crate::errors::NospacesError;
use crate::renamer::{rename_all, RenameSummary};
use crate::reporter::LogReporter;

/// Runs a full rename pass over `directory`, logging every event.
///
/// # Arguments
///
/// * `directory` - The directory whose files are renamed.
/// * `config` - Settings for the pass (log name, order, dry run).
pub fn headless_rename(directory: &Path, config: &RenameConfig) -> Result<RenameSummary, NospacesError> {
    rename_all(directory, config, &mut LogReporter)
}

/// Like [`headless_rename`], resolving the config from `config_path` or the
/// user config file.
pub fn headless_rename_with_config_file(
    directory: &Path,
    config_path: Option<&Path>,
) -> anyhow::Result<RenameSummary> {
    let config = RenameConfig::load(config_path)?;
    Ok(headless_rename(directory, &config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn headless_rename_renames_and_logs() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("my file.txt"), b"data")?;

        let summary = headless_rename(dir.path(), &RenameConfig::default())?;

        assert_eq!(summary.renamed, 1);
        assert!(dir.path().join("my_file.txt").exists());
        let log = fs::read_to_string(dir.path().join("rename_log.txt"))?;
        assert_eq!(log.lines().count(), 1);
        Ok(())
    }

    #[test]
    fn explicit_config_file_is_used() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config_path = dir.path().join("settings.yaml");
        fs::write(&config_path, "dry_run: true\n")?;
        let target = dir.path().join("files");
        fs::create_dir(&target)?;
        fs::write(target.join("a b"), b"")?;

        let summary = headless_rename_with_config_file(&target, Some(config_path.as_path()))?;

        assert_eq!(summary.renamed, 1);
        assert!(target.join("a b").exists());
        assert!(!target.join("rename_log.txt").exists());
        Ok(())
    }
}

// nospaces-core/src/renamer.rs
//! The directory rename pass.
//!
//! [`rename_all`] lists the direct children of a directory, sanitizes the name
//! of every non-directory entry and renames it when the name changes. Each
//! successful rename is appended to the rename log. Failures are isolated per
//! entry; only an unreadable directory ends the pass early.

use log::{debug, info};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{EntryOrder, RenameConfig};
use crate::errors::NospacesError;
use crate::rename_log::{RenameLog, RenameRecord};
use crate::reporter::{RenameEvent, RenameReporter, SkipReason};
use crate::sanitizer::sanitize_filename_with;

/// Outcome counters for one pass.
///
/// In a dry run `renamed` and `records` describe the renames that would
/// have happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
    pub records: Vec<RenameRecord>,
}

impl RenameSummary {
    /// Number of file entries considered (directories are not counted).
    pub fn files_seen(&self) -> usize {
        self.renamed + self.unchanged + self.skipped + self.failed
    }
}

impl fmt::Display for RenameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renamed, {} unchanged, {} skipped, {} failed",
            self.renamed, self.unchanged, self.skipped, self.failed
        )
    }
}

/// A direct child of the target directory.
#[derive(Debug, Clone)]
struct DirectoryEntry {
    name: OsString,
    path: PathBuf,
    is_directory: bool,
}

/// Renames every file directly inside `directory` to its sanitized name.
///
/// The rename log is created before the directory is listed. If it cannot be
/// created the problem is reported and the pass runs without a log. A
/// directory that cannot be listed is returned as
/// [`NospacesError::DirectoryRead`] after the log has been closed.
pub fn rename_all(
    directory: &Path,
    config: &RenameConfig,
    reporter: &mut dyn RenameReporter,
) -> Result<RenameSummary, NospacesError> {
    info!("Starting rename pass over {}", directory.display());

    let mut log = open_log(directory, config, reporter);
    debug!(
        "Rename log at {} is {}",
        log.path().display(),
        if log.is_enabled() { "enabled" } else { "disabled" }
    );
    let entries = list_entries(directory, config.order)?;
    debug!("Found {} entries in {}", entries.len(), directory.display());

    let mut summary = RenameSummary::default();
    let mut planned = HashSet::new();
    for entry in &entries {
        process_entry(directory, entry, config, &mut log, reporter, &mut summary, &mut planned);
    }

    if let Err(error) = log.finish() {
        reporter.report(RenameEvent::LogProblem { error: &error });
    }

    info!("Rename pass over {} finished: {}", directory.display(), summary);
    Ok(summary)
}

fn open_log(directory: &Path, config: &RenameConfig, reporter: &mut dyn RenameReporter) -> RenameLog {
    let path = config.log_path(directory);
    if config.dry_run {
        debug!("Dry run, rename log disabled.");
        return RenameLog::disabled(path);
    }
    match RenameLog::create(&path) {
        Ok(log) => log,
        Err(error) => {
            reporter.report(RenameEvent::LogProblem { error: &error });
            RenameLog::disabled(path)
        }
    }
}

/// Lists the direct children of `directory` before anything is renamed.
fn list_entries(directory: &Path, order: EntryOrder) -> Result<Vec<DirectoryEntry>, NospacesError> {
    let read_error = |source| NospacesError::DirectoryRead { path: directory.to_path_buf(), source };

    let mut entries = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        entries.push(DirectoryEntry {
            name: entry.file_name(),
            // Follows symlinks, so a link to a directory counts as one.
            is_directory: path.is_dir(),
            path,
        });
    }

    if order == EntryOrder::Sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(entries)
}

fn process_entry(
    directory: &Path,
    entry: &DirectoryEntry,
    config: &RenameConfig,
    log: &mut RenameLog,
    reporter: &mut dyn RenameReporter,
    summary: &mut RenameSummary,
    planned: &mut HashSet<PathBuf>,
) {
    if entry.is_directory {
        debug!("Skipping directory {}", entry.path.display());
        return;
    }
    if entry.name == config.log_file_name.as_str() {
        debug!("Skipping rename log {}", entry.path.display());
        return;
    }

    let Some(old_name) = entry.name.to_str() else {
        summary.skipped += 1;
        let shown = entry.name.to_string_lossy();
        reporter.report(RenameEvent::Skipped { name: &shown, reason: SkipReason::NonUtf8Name });
        return;
    };
    let new_name = sanitize_filename_with(old_name, config.extensionless);

    if new_name == old_name {
        summary.unchanged += 1;
        reporter.report(RenameEvent::Unchanged { name: old_name });
        return;
    }

    if new_name.trim_matches('.').is_empty() {
        summary.skipped += 1;
        reporter.report(RenameEvent::Skipped { name: old_name, reason: SkipReason::EmptyName });
        return;
    }

    let record = RenameRecord::new(entry.path.clone(), directory.join(&new_name));

    // fs::rename replaces an existing target on most platforms. A dry run
    // also has to count the targets it has already handed out.
    let taken = record.to.symlink_metadata().is_ok() || (config.dry_run && planned.contains(&record.to));
    if taken {
        let error = NospacesError::TargetExists { from: record.from, to: record.to };
        summary.failed += 1;
        reporter.report(RenameEvent::Failed { name: old_name, error: &error });
        return;
    }

    if config.dry_run {
        reporter.report(RenameEvent::WouldRename { old_name, new_name: &new_name, record: &record });
        planned.insert(record.to.clone());
        summary.renamed += 1;
        summary.records.push(record);
        return;
    }

    if let Err(source) = fs::rename(&record.from, &record.to) {
        let error = NospacesError::Rename { from: record.from, to: record.to, source };
        summary.failed += 1;
        reporter.report(RenameEvent::Failed { name: old_name, error: &error });
        return;
    }

    reporter.report(RenameEvent::Renamed { old_name, new_name: &new_name, record: &record });
    if let Err(error) = log.append(&record) {
        reporter.report(RenameEvent::LogProblem { error: &error });
    }
    summary.renamed += 1;
    summary.records.push(record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sorted_listing_is_lexicographic() {
        let dir = tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();

        let entries = list_entries(dir.path(), EntryOrder::Sorted).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt", "sub"]);
        assert!(entries[3].is_directory);
        assert!(!entries[0].is_directory);
    }

    #[test]
    fn listing_a_missing_directory_is_a_read_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = list_entries(&missing, EntryOrder::Listing).unwrap_err();
        match err {
            NospacesError::DirectoryRead { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn summary_display_lists_all_counters() {
        let summary = RenameSummary { renamed: 2, unchanged: 1, skipped: 0, failed: 3, records: Vec::new() };
        assert_eq!(summary.to_string(), "2 renamed, 1 unchanged, 0 skipped, 3 failed");
        assert_eq!(summary.files_seen(), 6);
    }
}

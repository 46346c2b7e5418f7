// nospaces-core/src/rename_log.rs
//! The per-run rename log.
//!
//! One line per successful rename, `<old_path> -> <new_path>`, no header and
//! no footer. The file is truncated when a run starts and released when the
//! [`RenameLog`] is dropped, so every exit path closes it.

use log::{debug, warn};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::NospacesError;

/// A single completed rename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenameRecord {
    pub fn new(from: PathBuf, to: PathBuf) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for RenameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from.display(), self.to.display())
    }
}

/// Append-only writer for rename records.
///
/// A disabled log accepts appends and drops them; it stands in when the log
/// file could not be created or the run is a dry run.
#[derive(Debug)]
pub struct RenameLog {
    path: PathBuf,
    writer: Option<LineWriter<File>>,
}

impl RenameLog {
    /// Creates (or truncates) the log file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, NospacesError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| NospacesError::LogCreate { path: path.clone(), source })?;

        // Advisory only: another process may still write to the file.
        if let Err(e) = fs2::FileExt::try_lock_exclusive(&file) {
            debug!("Could not lock rename log {}: {}", path.display(), e);
        }

        debug!("Rename log opened at {}", path.display());
        Ok(Self { path, writer: Some(LineWriter::new(file)) })
    }

    /// A log that records nothing.
    pub fn disabled<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf(), writer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record and flushes it to disk.
    pub fn append(&mut self, record: &RenameRecord) -> Result<(), NospacesError> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        writeln!(writer, "{}", record)
            .map_err(|source| NospacesError::LogWrite { path: self.path.clone(), source })
    }

    /// Flushes and closes the log, surfacing any error that `Drop` would swallow.
    pub fn finish(mut self) -> Result<(), NospacesError> {
        match self.writer.take() {
            Some(mut writer) => {
                let result = writer
                    .flush()
                    .map_err(|source| NospacesError::LogWrite { path: self.path.clone(), source });
                release(&self.path, writer);
                result
            }
            None => Ok(()),
        }
    }
}

impl Drop for RenameLog {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                warn!("Failed to flush rename log {}: {}", self.path.display(), e);
            }
            release(&self.path, writer);
        }
    }
}

fn release(path: &Path, writer: LineWriter<File>) {
    let file = writer.get_ref();
    if let Err(e) = fs2::FileExt::unlock(file) {
        debug!("Could not unlock rename log {}: {}", path.display(), e);
    }
    debug!("Rename log closed at {}", path.display());
}

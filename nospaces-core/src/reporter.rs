//! Progress reporting for the rename pass.
//!
//! The renamer never prints. Each entry it handles, and each problem with the
//! rename log, becomes a [`RenameEvent`] handed to a [`RenameReporter`]. The CLI
//! renders events on the console; [`LogReporter`] forwards them to the `log`
//! facade for headless callers.
//!
//! License: MIT OR APACHE 2.0

use log::{error, info, warn};
use std::fmt;

use crate::errors::NospacesError;
use crate::rename_log::RenameRecord;

/// Why an entry was left alone without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Sanitizing removed every character of the name.
    EmptyName,
    /// The name cannot be decoded without losing bytes.
    NonUtf8Name,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyName => write!(f, "sanitized name would be empty"),
            SkipReason::NonUtf8Name => write!(f, "name is not valid UTF-8"),
        }
    }
}

/// Something that happened during a rename pass.
#[derive(Debug)]
pub enum RenameEvent<'a> {
    /// The file was renamed on disk.
    Renamed { old_name: &'a str, new_name: &'a str, record: &'a RenameRecord },
    /// Dry run: the file would have been renamed.
    WouldRename { old_name: &'a str, new_name: &'a str, record: &'a RenameRecord },
    /// The name is already clean.
    Unchanged { name: &'a str },
    Skipped { name: &'a str, reason: SkipReason },
    /// The rename of one entry failed; the pass continues.
    Failed { name: &'a str, error: &'a NospacesError },
    /// The rename log could not be created or written; renames are unaffected.
    LogProblem { error: &'a NospacesError },
}

impl fmt::Display for RenameEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameEvent::Renamed { old_name, new_name, .. } => {
                write!(f, "Renamed: {} -> {}", old_name, new_name)
            }
            RenameEvent::WouldRename { old_name, new_name, .. } => {
                write!(f, "Would rename: {} -> {}", old_name, new_name)
            }
            RenameEvent::Unchanged { name } => write!(f, "No change needed for: {}", name),
            RenameEvent::Skipped { name, reason } => write!(f, "Skipped: {} ({})", name, reason),
            RenameEvent::Failed { error, .. } => write!(f, "{}", error),
            RenameEvent::LogProblem { error } => write!(f, "{}", error),
        }
    }
}

/// Receives events from [`crate::renamer::rename_all`] as they happen.
pub trait RenameReporter {
    fn report(&mut self, event: RenameEvent<'_>);
}

/// Forwards every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl RenameReporter for LogReporter {
    fn report(&mut self, event: RenameEvent<'_>) {
        match event {
            RenameEvent::Failed { .. } => error!("{}", event),
            RenameEvent::LogProblem { .. } | RenameEvent::Skipped { .. } => warn!("{}", event),
            _ => info!("{}", event),
        }
    }
}

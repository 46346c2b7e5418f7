//! errors.rs - Custom error types for the nospaces-core library.
//!
//! Every failure the rename pass can hit is a variant here, so callers can
//! decide per variant whether it ends the run or just gets reported.
//!
//! License: MIT OR APACHE 2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by the `nospaces-core` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NospacesError {
    /// The target directory could not be listed (missing, not a directory,
    /// permission denied). Ends the run.
    #[error("Failed to read directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The sanitized name is already taken by another entry.
    #[error("Cannot rename '{}' to '{}': target already exists", from.display(), to.display())]
    TargetExists { from: PathBuf, to: PathBuf },

    #[error("Failed to rename '{}' to '{}': {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create rename log '{}': {source}", path.display())]
    LogCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write rename log '{}': {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

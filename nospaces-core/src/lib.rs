// nospaces-core/src/lib.rs
//! # nospaces Core Library
//!
//! `nospaces-core` holds the logic behind the `nospaces` CLI: the filename
//! sanitization rule and the rename-and-log pass over a directory. It does no
//! console I/O; progress is handed to a [`RenameReporter`].
//!
//! ## Modules
//!
//! * `sanitizer`: The pure name transformation (spaces to underscores, unsafe characters removed).
//! * `renamer`: The single-directory rename pass and its [`RenameSummary`].
//! * `rename_log`: The per-run log of `<old> -> <new>` lines.
//! * `reporter`: Events emitted during a pass and the [`RenameReporter`] trait.
//! * `config`: [`RenameConfig`] and YAML loading.
//! * `headless`: One-call wrappers that report through the `log` facade.
//! * `errors`: The [`NospacesError`] enum.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use nospaces_core::{headless_rename, sanitize_filename, RenameConfig};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     assert_eq!(sanitize_filename("holiday photo (1).jpg"), "holiday_photo_1.jpg");
//!
//!     let summary = headless_rename(Path::new("./downloads"), &RenameConfig::default())?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`NospacesError`]. Per-file failures never end a
//! pass; they are reported and counted in the summary. Config loading uses
//! `anyhow::Result` so file and parse context is kept.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod headless;
pub mod rename_log;
pub mod renamer;
pub mod reporter;
pub mod sanitizer;

pub use config::{default_config_path, EntryOrder, RenameConfig, DEFAULT_LOG_FILE_NAME};
pub use errors::NospacesError;
pub use headless::{headless_rename, headless_rename_with_config_file};
pub use rename_log::{RenameLog, RenameRecord};
pub use renamer::{rename_all, RenameSummary};
pub use reporter::{LogReporter, RenameEvent, RenameReporter, SkipReason};
pub use sanitizer::{
    clean_stem, is_allowed_char, sanitize_filename, sanitize_filename_with, split_name,
    ExtensionlessPolicy,
};

// nospaces/src/cli.rs
//! This file defines the command-line interface (CLI) for the nospaces application.

use clap::Parser;
use log::LevelFilter;
use nospaces_core::{EntryOrder, ExtensionlessPolicy, RenameConfig};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "nospaces",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace spaces and strip unsafe characters from file names",
    long_about = "nospaces renames every file directly inside a directory so that its name only contains letters, digits, underscores and dashes. Spaces become underscores, other characters are removed, and the extension is kept. Every rename is recorded in a log file inside the directory.",
)]
pub struct Cli {
    /// Directory whose files should be renamed (prompted for when omitted).
    #[arg(value_name = "DIRECTORY", help = "Directory whose files should be renamed. Prompts on stdin when omitted.")]
    pub directory: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress informational messages and internal logging.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Path to a YAML run configuration.
    #[arg(long = "config", value_name = "FILE", env = "NOSPACES_CONFIG", help = "Path to a YAML run configuration.")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Show what would be renamed without changing anything.
    #[arg(long = "dry-run", short = 'n', help = "Show what would be renamed without touching any file.")]
    pub dry_run: bool,

    /// Process entries in the order the operating system lists them.
    #[arg(long = "unsorted", help = "Process entries in directory listing order instead of by name.")]
    pub unsorted: bool,

    /// Name of the rename log written into the directory.
    #[arg(long = "log-file", value_name = "NAME", help = "Name of the rename log created inside the directory.")]
    pub log_file: Option<String>,

    /// Keep the dot on names without an extension (`readme` becomes `readme.`).
    #[arg(long = "keep-trailing-dot", help = "Append a trailing dot to names without an extension.")]
    pub keep_trailing_dot: bool,
}

impl Cli {
    /// Log level implied by the flags; `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.disable_debug {
            Some(LevelFilter::Info)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }

    /// Layers the command-line flags over a loaded configuration.
    pub fn apply_overrides(&self, config: &mut RenameConfig) {
        if self.dry_run {
            config.dry_run = true;
        }
        if self.unsorted {
            config.order = EntryOrder::Listing;
        }
        if let Some(name) = &self.log_file {
            config.log_file_name = name.clone();
        }
        if self.keep_trailing_dot {
            config.extensionless = ExtensionlessPolicy::TrailingDot;
        }
    }
}

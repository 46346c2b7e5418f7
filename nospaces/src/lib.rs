// nospaces/src/lib.rs
//! # nospaces CLI Application
//!
//! Terminal front end for `nospaces-core`: argument parsing, the interactive
//! directory prompt, themed console output and logging setup.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::rename::{run_rename_opts, RenameOptions, RunOutcome};

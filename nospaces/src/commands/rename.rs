//! The rename command: runs one pass over a directory and renders its events.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

use nospaces_core::{rename_all, NospacesError, RenameConfig, RenameEvent, RenameReporter, RenameSummary};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Options for a single rename run.
pub struct RenameOptions {
    pub directory: PathBuf,
    pub config: RenameConfig,
    pub quiet: bool,
}

/// How a run ended. Both outcomes exit with status 0.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RenameSummary),
    /// The directory could not be listed; the error has already been printed.
    DirectoryUnreadable,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Renders rename events: progress on `out`, problems on `err`.
pub struct ConsoleReporter<'t, O: Write, E: Write> {
    out: O,
    err: E,
    theme: &'t ThemeMap,
    out_color: bool,
    err_color: bool,
    quiet: bool,
}

impl<'t, O: Write, E: Write> ConsoleReporter<'t, O, E> {
    pub fn new(out: O, err: E, theme: &'t ThemeMap, quiet: bool) -> Self {
        Self { out, err, theme, out_color: false, err_color: false, quiet }
    }

    pub fn with_color(mut self, out_color: bool, err_color: bool) -> Self {
        self.out_color = out_color;
        self.err_color = err_color;
        self
    }

    pub fn header(&mut self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        output_format::print_header_message(&mut self.out, msg, self.theme, self.out_color)
    }

    pub fn summary(&mut self, summary: &RenameSummary, dry_run: bool) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let msg = if dry_run {
            format!("Dry run complete: {}.", summary)
        } else {
            format!("Done: {}.", summary)
        };
        output_format::print_success_message(&mut self.out, &msg, self.theme, self.out_color)
    }

    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        output_format::print_error_message(&mut self.err, msg, self.theme, self.err_color)
    }

    fn render(&mut self, event: &RenameEvent<'_>) -> io::Result<()> {
        match event {
            RenameEvent::Renamed { old_name, new_name, .. } => {
                let line = output_format::format_rename_line("Renamed:", old_name, new_name, self.theme, self.out_color);
                writeln!(self.out, "{}", line)
            }
            RenameEvent::WouldRename { old_name, new_name, .. } => {
                let line = output_format::format_rename_line("Would rename:", old_name, new_name, self.theme, self.out_color);
                writeln!(self.out, "{}", line)
            }
            RenameEvent::Unchanged { .. } if self.quiet => Ok(()),
            RenameEvent::Unchanged { .. } => {
                output_format::print_info_message(&mut self.out, &event.to_string(), self.theme, self.out_color)
            }
            RenameEvent::Skipped { .. } | RenameEvent::LogProblem { .. } => {
                output_format::print_warn_message(&mut self.err, &event.to_string(), self.theme, self.err_color)
            }
            RenameEvent::Failed { .. } => self.error(&event.to_string()),
        }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> RenameReporter for ConsoleReporter<'_, O, E> {
    fn report(&mut self, event: RenameEvent<'_>) {
        if let Err(e) = self.render(&event) {
            debug!("Failed to write console output: {}", e);
        }
    }
}

/// Runs the rename pass on the real stdout/stderr.
pub fn run_rename_opts(opts: &RenameOptions, theme_map: &ThemeMap) -> Result<RunOutcome> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let out_color = stdout.is_terminal();
    let err_color = stderr.is_terminal();

    let mut reporter = ConsoleReporter::new(stdout.lock(), stderr.lock(), theme_map, opts.quiet)
        .with_color(out_color, err_color);
    run_rename_with(opts, &mut reporter)
}

/// The main operation runner, writing through the given reporter.
pub fn run_rename_with<O: Write, E: Write>(
    opts: &RenameOptions,
    reporter: &mut ConsoleReporter<'_, O, E>,
) -> Result<RunOutcome> {
    info!("Starting nospaces operation.");
    reporter.header(&format!("Renaming files in directory: {}", opts.directory.display()))?;

    match rename_all(&opts.directory, &opts.config, reporter) {
        Ok(summary) => {
            reporter.summary(&summary, opts.config.dry_run)?;
            info!("nospaces operation completed.");
            Ok(RunOutcome::Completed(summary))
        }
        Err(error @ NospacesError::DirectoryRead { .. }) => {
            reporter.error(&error.to_string())?;
            Ok(RunOutcome::DirectoryUnreadable)
        }
        Err(other) => Err(other).context("Rename pass failed"),
    }
}

// nospaces/src/main.rs
//! nospaces entry point.
//!
//! Resolves the target directory (argument or prompt), loads the run
//! configuration and hands over to the rename command.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use nospaces::cli::Cli;
use nospaces::commands::rename::{error_msg, info_msg, run_rename_opts, RenameOptions, RunOutcome};
use nospaces::logger;
use nospaces::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use nospaces::utils::prompt::{prompt_for_directory, PromptError};
use nospaces_core::RenameConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.log_level());
    info!("nospaces started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme_map) => theme_map,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &theme_map) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, theme_map: &ThemeMap) -> Result<ExitCode> {
    let mut config = RenameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    let Some(directory) = resolve_directory(cli, theme_map)? else {
        return Ok(ExitCode::FAILURE);
    };

    if config.dry_run && !cli.quiet {
        info_msg("Dry run: no files will be changed.", theme_map);
    }

    let opts = RenameOptions { directory, config, quiet: cli.quiet };
    match run_rename_opts(&opts, theme_map)? {
        RunOutcome::Completed(summary) => debug!("Run finished with {} file(s) seen.", summary.files_seen()),
        RunOutcome::DirectoryUnreadable => debug!("Run ended early: directory unreadable."),
    }
    Ok(ExitCode::SUCCESS)
}

/// Returns the directory to process, or `None` when none could be obtained
/// (the reason has been printed).
fn resolve_directory(cli: &Cli, theme_map: &ThemeMap) -> Result<Option<PathBuf>> {
    if let Some(directory) = &cli.directory {
        return Ok(Some(directory.clone()));
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    match prompt_for_directory(&mut io::stdin().lock(), &mut stdout.lock(), theme_map, supports_color) {
        Ok(directory) => Ok(Some(directory)),
        Err(PromptError::InputUnavailable) => {
            error_msg(PromptError::InputUnavailable.to_string(), theme_map);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

// nospaces/src/utils/prompt.rs
//! Interactive fallback for the target directory.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::ui::output_format::print_prompt;
use crate::ui::theme::ThemeMap;

pub const PROMPT: &str = "Please enter the path to the directory you want to clean up:";

#[derive(Error, Debug)]
pub enum PromptError {
    /// Standard input ended (or held only a blank line) before a path was given.
    #[error("No input received. Exiting.")]
    InputUnavailable,

    #[error("Failed to read directory path from stdin: {0}")]
    Io(#[from] io::Error),
}

/// Asks for a directory on `output` and reads one line from `input`.
///
/// The line terminator is stripped; any other whitespace is kept because it
/// may be part of the path.
pub fn prompt_for_directory<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<PathBuf, PromptError> {
    print_prompt(output, PROMPT, theme, supports_color)?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::InputUnavailable);
    }
    let path = line.trim_end_matches(['\n', '\r']);
    if path.trim().is_empty() {
        return Err(PromptError::InputUnavailable);
    }
    Ok(PathBuf::from(path))
}

//! Themed console output.
//!
//! All writers take a `supports_color` flag; callers pass whether the target
//! stream is a terminal, so piped output never carries escape codes.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme colour for `entry` to `text` when colour is supported.
pub fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", styled(msg, ThemeEntry::Info, theme, supports_color))
}

pub fn print_header_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", styled(msg, ThemeEntry::Header, theme, supports_color))
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", styled(msg, ThemeEntry::Success, theme, supports_color))
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{} {}", styled("Warning:", ThemeEntry::Warn, theme, supports_color), msg)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{} {}", styled("Error:", ThemeEntry::Error, theme, supports_color), msg)
}

/// Prints a prompt line and flushes, so it is visible before input is read.
pub fn print_prompt<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", styled(msg, ThemeEntry::Prompt, theme, supports_color))?;
    writer.flush()
}

/// Formats `<label> <old> -> <new>` with both names themed.
pub fn format_rename_line(label: &str, old_name: &str, new_name: &str, theme: &ThemeMap, supports_color: bool) -> String {
    format!(
        "{} {} -> {}",
        label,
        styled(old_name, ThemeEntry::OriginalName, theme, supports_color),
        styled(new_name, ThemeEntry::SanitizedName, theme, supports_color),
    )
}

// nospaces-core/src/sanitizer.rs
//! The filename sanitization rule.
//!
//! A name is split at its last dot into stem and extension. Spaces in the stem
//! become underscores, then everything that is not a Unicode letter or digit,
//! an underscore or a dash is dropped. The extension is carried over untouched.

use serde::{Deserialize, Serialize};

/// What to do with names that have no extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionlessPolicy {
    /// `readme` stays `readme`.
    #[default]
    Omit,
    /// `readme` becomes `readme.`; the stem and an empty extension are still
    /// joined by a dot.
    TrailingDot,
}

/// Splits `name` at the last dot into `(stem, extension)`.
///
/// Without a dot the extension is empty and the stem is the whole name.
pub fn split_name(name: &str) -> (&str, &str) {
    name.rsplit_once('.').unwrap_or((name, ""))
}

/// Returns true for characters allowed to survive in a stem.
pub fn is_allowed_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Cleans a stem: spaces to underscores, disallowed characters removed.
pub fn clean_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|&c| is_allowed_char(c))
        .collect()
}

/// Sanitizes a filename with the default [`ExtensionlessPolicy::Omit`].
pub fn sanitize_filename(name: &str) -> String {
    sanitize_filename_with(name, ExtensionlessPolicy::default())
}

/// Sanitizes a filename, using `policy` when the extension is empty.
pub fn sanitize_filename_with(name: &str, policy: ExtensionlessPolicy) -> String {
    let (stem, extension) = split_name(name);
    let mut cleaned = clean_stem(stem);

    if !extension.is_empty() || policy == ExtensionlessPolicy::TrailingDot {
        cleaned.reserve(extension.len() + 1);
        cleaned.push('.');
        cleaned.push_str(extension);
    }
    cleaned
}

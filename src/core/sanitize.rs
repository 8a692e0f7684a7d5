//! File name sanitizer.
//!
//! `sanitize` runs a fixed pipeline over a raw file name:
//! 1. Unicode normalization (see [`crate::normalize`])
//! 2. Separator substitution (underscore / remove-underscore / custom separator)
//! 3. Old → new separator swap
//! 4. Whitespace trim
//! 5. Invalid-character filtering
//! 6. Optional title case
//! 7. Optional modification-timestamp prefix (idempotent)

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::normalize::normalize_unicode;
use crate::utils::validation;

/// Anything outside visible ASCII, Latin-1 supplement, letters, numbers, `_`, `.` and `-`.
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^ -~\u{A0}-\u{FF}\p{L}\p{N}_.\-]").unwrap());

/// `YYYYMMDD_HHMMSS_` at the start of a stem.
static TIMESTAMP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}_[0-9]{6}_").unwrap());

/// Options controlling how names are rewritten.
///
/// Deserializes from the `.filetidy.json` defaults file; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanitizeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    pub use_underscore: bool,
    pub remove_underscore: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_separator: Option<String>,
    pub title_case: bool,
    pub include_timestamp: bool,
}

impl SanitizeConfig {
    /// Reject option combinations that can't be applied.
    ///
    /// Must run before any file is touched; `sanitize` itself never checks.
    pub fn validate(&self) -> Result<()> {
        if self.use_underscore && self.remove_underscore {
            return Err(Error::validation_conflicting_arguments(
                "--underscore",
                "--remove-underscore",
            ));
        }

        validation::require_name_fragment(self.separator.as_deref(), "separator")?;
        validation::require_name_fragment(self.old_separator.as_deref(), "old_separator")?;
        validation::require_name_fragment(self.new_separator.as_deref(), "new_separator")?;

        Ok(())
    }

    /// Configured separator, treating an empty string as unset.
    pub fn separator(&self) -> Option<&str> {
        non_empty(self.separator.as_deref())
    }

    fn separator_swap(&self) -> Option<(&str, &str)> {
        Some((
            non_empty(self.old_separator.as_deref())?,
            non_empty(self.new_separator.as_deref())?,
        ))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Compute the sanitized form of `name`.
///
/// `timestamp` is only used when `config.include_timestamp` is set and is
/// expected in `YYYYMMDD_HHMMSS` form. Never fails; an unusable input
/// simply comes back empty.
pub fn sanitize(name: &str, timestamp: &str, config: &SanitizeConfig) -> String {
    let mut sanitized = normalize_unicode(name);

    if config.use_underscore {
        sanitized = sanitized.replace(' ', "_");
    } else if config.remove_underscore {
        sanitized = sanitized.replace('_', " ");
    } else if let Some(sep) = config.separator() {
        sanitized = sanitized.replace(' ', sep);
    }

    if let Some((old, new)) = config.separator_swap() {
        sanitized = sanitized.replace(old, new);
    }

    let mut sanitized = filter_invalid(sanitized.trim(), config.separator().unwrap_or(""));

    if config.title_case {
        sanitized = title_case(&sanitized, config.separator().unwrap_or(" "));
    }

    if config.include_timestamp {
        sanitized = prefix_timestamp(&sanitized, timestamp);
    }

    sanitized
}

/// Replace each invalid character with `replacement`, taken literally.
fn filter_invalid(input: &str, replacement: &str) -> String {
    INVALID_CHARS
        .replace_all(input, NoExpand(replacement))
        .into_owned()
}

/// Title-case each `separator`-delimited segment, keeping the separators.
fn title_case(input: &str, separator: &str) -> String {
    input
        .split(separator)
        .map(capitalize_segment)
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Prepend `timestamp_` to the stem unless it already carries a timestamp.
fn prefix_timestamp(name: &str, timestamp: &str) -> String {
    let (stem, ext) = split_extension(name);
    if TIMESTAMP_PREFIX.is_match(stem) {
        return name.to_string();
    }
    format!("{}_{}{}", timestamp, stem, ext)
}

/// Split at the last `.`; the extension keeps its dot.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

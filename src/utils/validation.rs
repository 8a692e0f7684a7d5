//! Input validation primitives.
//!
//! Helpers that turn a bad user-supplied value into a
//! `validation.invalid_argument` error naming the offending field.

use crate::error::{Error, Result};

/// Characters that would turn a file name into a path (or truncate it).
const FORBIDDEN_IN_NAME: &[char] = &['/', '\\', '\0'];

/// Require an optional value, if present, to be usable inside a single file name.
///
/// Empty strings pass; callers treat them as unset.
pub fn require_name_fragment(value: Option<&str>, field: &str) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };

    if let Some(ch) = value.chars().find(|c| FORBIDDEN_IN_NAME.contains(c)) {
        return Err(Error::validation_invalid_argument(
            field,
            format!(
                "{} must not contain {:?}; names are renamed in place",
                field, ch
            ),
            Some(value.to_string()),
        ));
    }

    Ok(())
}

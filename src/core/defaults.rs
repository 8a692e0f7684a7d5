//! Defaults file support.
//!
//! A `.filetidy.json` in the target directory supplies default
//! [`SanitizeConfig`] values; command-line flags are layered on top.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::sanitize::SanitizeConfig;
use crate::utils::io;

/// File name looked up in the root directory when no explicit path is given.
pub const DEFAULTS_FILE: &str = ".filetidy.json";

/// Defaults read from disk, with the file they came from.
#[derive(Debug, Clone)]
pub struct LoadedDefaults {
    pub path: PathBuf,
    pub config: SanitizeConfig,
}

/// Parse a defaults file.
pub fn load(path: &Path) -> Result<SanitizeConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Resolve defaults for a run over `root`.
///
/// An explicit path must exist. Without one, `root/.filetidy.json` is used
/// when present and otherwise nothing is loaded.
pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Option<LoadedDefaults>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = root.join(DEFAULTS_FILE);
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };

    let config = load(&path)?;
    Ok(Some(LoadedDefaults { path, config }))
}

/// Layer command-line options over file defaults.
///
/// Flags can only switch boolean options on; string options given on the
/// command line replace the file's.
pub fn merge(base: SanitizeConfig, overrides: SanitizeConfig) -> SanitizeConfig {
    SanitizeConfig {
        separator: overrides.separator.or(base.separator),
        use_underscore: base.use_underscore || overrides.use_underscore,
        remove_underscore: base.remove_underscore || overrides.remove_underscore,
        old_separator: overrides.old_separator.or(base.old_separator),
        new_separator: overrides.new_separator.or(base.new_separator),
        title_case: base.title_case || overrides.title_case,
        include_timestamp: base.include_timestamp || overrides.include_timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_without_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(dir.path(), None).unwrap().is_none());
    }

    #[test]
    fn resolve_reads_file_in_root() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULTS_FILE),
            r#"{"separator": "-", "titleCase": true}"#,
        )
        .unwrap();

        let loaded = resolve(dir.path(), None).unwrap().unwrap();
        assert_eq!(loaded.path, dir.path().join(DEFAULTS_FILE));
        assert_eq!(loaded.config.separator.as_deref(), Some("-"));
        assert!(loaded.config.title_case);
        assert!(!loaded.config.use_underscore);
    }

    #[test]
    fn resolve_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = resolve(dir.path(), Some(&dir.path().join("nope.json"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ separator: ").unwrap();

        let err = load(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
        assert_eq!(err.details["path"], path.display().to_string());
    }

    #[test]
    fn merge_prefers_command_line_strings() {
        let base = SanitizeConfig {
            separator: Some("-".to_string()),
            old_separator: Some(".".to_string()),
            ..SanitizeConfig::default()
        };
        let overrides = SanitizeConfig {
            separator: Some("_".to_string()),
            ..SanitizeConfig::default()
        };

        let merged = merge(base, overrides);
        assert_eq!(merged.separator.as_deref(), Some("_"));
        assert_eq!(merged.old_separator.as_deref(), Some("."));
    }

    #[test]
    fn merge_ors_booleans() {
        let base = SanitizeConfig {
            title_case: true,
            ..SanitizeConfig::default()
        };
        let overrides = SanitizeConfig {
            include_timestamp: true,
            ..SanitizeConfig::default()
        };

        let merged = merge(base, overrides);
        assert!(merged.title_case);
        assert!(merged.include_timestamp);
        assert!(!merged.use_underscore);
    }
}

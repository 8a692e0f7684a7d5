//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// List a directory's entries sorted by file name.
///
/// Any failure (opening the directory or reading an entry) is an error;
/// entries are never silently dropped.
pub fn read_dir_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let context = || Some(format!("read_dir {}", dir.display()));

    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::internal_io(e.to_string(), context()))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::internal_io(e.to_string(), context()))?;

    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

/// Rename `from` to `to` with standardized error handling.
pub fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("rename {} → {}", from.display(), to.display())),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn read_dir_sorted_orders_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "c.txt", "a.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let names: Vec<_> = read_dir_sorted(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn read_dir_sorted_fails_for_missing_dir() {
        let err = read_dir_sorted(Path::new("/nonexistent/dir")).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert!(err.message.contains("/nonexistent/dir"));
    }

    #[test]
    fn rename_file_moves_file() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("old name.txt");
        let to = dir.path().join("new_name.txt");
        fs::write(&from, "x").unwrap();

        rename_file(&from, &to).unwrap();
        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "x");
    }

    #[test]
    fn rename_file_returns_error_for_missing_source() {
        let dir = TempDir::new().unwrap();
        let result = rename_file(&dir.path().join("missing"), &dir.path().join("other"));
        assert_eq!(result.unwrap_err().code.as_str(), "internal.io_error");
    }
}

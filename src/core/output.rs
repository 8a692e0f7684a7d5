//! Public output types for rename runs.
//!
//! These are what the CLI prints (as text lines or as the JSON `data`
//! payload) and what library callers get back from [`crate::apply_plan`].

use serde::Serialize;

/// A file that was renamed (or would be, in a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamedFile {
    /// Directory relative to the root, `.` for the root itself.
    pub path: String,
    pub from: String,
    pub to: String,
}

/// Why a file was left alone even though its name would change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Sanitizing produced an empty name, `.` or `..`.
    EmptyName,
    /// Something already occupies the target name.
    TargetExists,
    /// The current name is not valid UTF-8 and can't be sanitized.
    NonUtf8Name,
    /// Sanitizing produced a path separator or NUL, which would move the file.
    InvalidName,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::EmptyName => "sanitized name is empty",
            SkipReason::TargetExists => "target already exists",
            SkipReason::NonUtf8Name => "name is not valid UTF-8",
            SkipReason::InvalidName => "sanitized name contains a path separator",
        }
    }
}

/// A file skipped with a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub path: String,
    pub from: String,
    pub to: String,
    pub reason: SkipReason,
}

/// Counts for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameSummary {
    pub scanned: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub unchanged: usize,
}

/// Full result of applying (or dry-running) a rename plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameReport {
    pub root: String,
    pub dry_run: bool,
    pub renames: Vec<RenamedFile>,
    pub skipped: Vec<SkippedFile>,
    pub summary: RenameSummary,
}

impl RenameReport {
    pub fn new(root: String, dry_run: bool, scanned: usize) -> Self {
        Self {
            root,
            dry_run,
            renames: Vec::new(),
            skipped: Vec::new(),
            summary: RenameSummary {
                scanned,
                unchanged: scanned,
                ..RenameSummary::default()
            },
        }
    }

    pub fn record_renamed(&mut self, file: RenamedFile) {
        self.summary.renamed += 1;
        self.summary.unchanged = self.summary.unchanged.saturating_sub(1);
        self.renames.push(file);
    }

    pub fn record_skipped(&mut self, file: SkippedFile) {
        self.summary.skipped += 1;
        self.summary.unchanged = self.summary.unchanged.saturating_sub(1);
        self.skipped.push(file);
    }
}

/// Join a report-relative directory and a name for display.
pub fn display_path(dir: &str, name: &str) -> String {
    if dir == "." || dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

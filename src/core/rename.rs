//! Rename engine: walk a tree, compute new names, apply them.
//!
//! Given a root directory and a [`Namer`], this module:
//! 1. Walks the tree in lexical order (directories are descended, never renamed)
//! 2. Asks the namer for each file's new name, passing its modification timestamp
//! 3. Plans renames, skipping empty results and names already taken
//! 4. Applies the plan to disk (or only reports it, in a dry run)

use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::output::{RenameReport, RenamedFile, SkipReason, SkippedFile};
use crate::sanitize::{sanitize, SanitizeConfig};
use crate::utils::io;

// ============================================================================
// Naming strategy
// ============================================================================

/// Computes the target name for a file.
///
/// `timestamp` is the file's modification time as `YYYYMMDD_HHMMSS`.
pub trait Namer {
    fn new_name(&self, name: &str, timestamp: &str) -> String;
}

impl Namer for SanitizeConfig {
    fn new_name(&self, name: &str, timestamp: &str) -> String {
        sanitize(name, timestamp, self)
    }
}

impl<F> Namer for F
where
    F: Fn(&str, &str) -> String,
{
    fn new_name(&self, name: &str, timestamp: &str) -> String {
        self(name, timestamp)
    }
}

/// Format a modification time in local time as `YYYYMMDD_HHMMSS`.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y%m%d_%H%M%S")
        .to_string()
}

// ============================================================================
// Types
// ============================================================================

/// A rename waiting to be applied.
#[derive(Debug, Clone)]
pub struct PlannedRename {
    /// Absolute directory holding the file.
    pub dir: PathBuf,
    pub file: RenamedFile,
}

/// One decision of the plan, in walk order.
#[derive(Debug, Clone)]
pub enum PlanEntry {
    Rename(PlannedRename),
    Skip(SkippedFile),
}

/// Every decision made while walking a tree.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub root: PathBuf,
    /// Files visited (directories and ignored paths excluded).
    pub scanned: usize,
    pub entries: Vec<PlanEntry>,
}

impl RenamePlan {
    pub fn renames(&self) -> impl Iterator<Item = &PlannedRename> {
        self.entries.iter().filter_map(|entry| match entry {
            PlanEntry::Rename(planned) => Some(planned),
            PlanEntry::Skip(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedFile> {
        self.entries.iter().filter_map(|entry| match entry {
            PlanEntry::Skip(skipped) => Some(skipped),
            PlanEntry::Rename(_) => None,
        })
    }
}

/// Progress notification while a plan is applied.
#[derive(Debug, Clone, Copy)]
pub enum RenameEvent<'a> {
    Renamed(&'a RenamedFile),
    Skipped(&'a SkippedFile),
}

// ============================================================================
// Planning
// ============================================================================

/// Walk `root` and decide what each file should be renamed to.
///
/// Paths listed in `ignore` are neither renamed nor counted. Any filesystem
/// failure aborts the walk; nothing has been touched at that point.
pub fn plan_renames<N: Namer + ?Sized>(
    root: &Path,
    namer: &N,
    ignore: &[PathBuf],
) -> Result<RenamePlan> {
    crate::log_status!("rename", "Scanning {}", root.display());

    let mut plan = RenamePlan {
        root: root.to_path_buf(),
        scanned: 0,
        entries: Vec::new(),
    };
    walk_dir(root, root, namer, ignore, &mut plan)?;
    Ok(plan)
}

fn walk_dir<N: Namer + ?Sized>(
    dir: &Path,
    root: &Path,
    namer: &N,
    ignore: &[PathBuf],
    plan: &mut RenamePlan,
) -> Result<()> {
    let entries = io::read_dir_sorted(dir)?;
    let rel_dir = relative_dir(dir, root);

    // Names present in this directory, updated as renames are planned so
    // later files see the directory as it will be.
    let mut occupied: HashSet<OsString> = entries.iter().map(|e| e.file_name()).collect();

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("stat {}", path.display())))
        })?;

        if file_type.is_dir() {
            walk_dir(&path, root, namer, ignore, plan)?;
            continue;
        }
        if ignore.contains(&path) {
            continue;
        }

        plan.scanned += 1;

        let os_name = entry.file_name();
        let Some(name) = os_name.to_str() else {
            plan.entries.push(PlanEntry::Skip(SkippedFile {
                path: rel_dir.clone(),
                from: os_name.to_string_lossy().to_string(),
                to: String::new(),
                reason: SkipReason::NonUtf8Name,
            }));
            continue;
        };

        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("stat {}", path.display())))
            })?;

        let new_name = namer.new_name(name, &format_timestamp(modified));
        if new_name == name {
            continue;
        }

        let reason = if is_empty_name(&new_name) {
            Some(SkipReason::EmptyName)
        } else if !is_plain_name(&new_name) {
            Some(SkipReason::InvalidName)
        } else if occupied.contains(OsStr::new(&new_name)) {
            Some(SkipReason::TargetExists)
        } else {
            None
        };

        if let Some(reason) = reason {
            plan.entries.push(PlanEntry::Skip(SkippedFile {
                path: rel_dir.clone(),
                from: name.to_string(),
                to: new_name,
                reason,
            }));
            continue;
        }

        occupied.remove(&os_name);
        occupied.insert(OsString::from(&new_name));

        plan.entries.push(PlanEntry::Rename(PlannedRename {
            dir: dir.to_path_buf(),
            file: RenamedFile {
                path: rel_dir.clone(),
                from: name.to_string(),
                to: new_name,
            },
        }));
    }

    Ok(())
}

fn is_empty_name(name: &str) -> bool {
    matches!(name, "" | "." | "..")
}

/// A name that stays inside its directory: no path separator, no NUL.
///
/// Compatibility folding can produce `/` (from `／` U+FF0F, for one).
fn is_plain_name(name: &str) -> bool {
    !name.chars().any(|c| std::path::is_separator(c) || c == '\0')
}

fn relative_dir(dir: &Path, root: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().to_string(),
        Err(_) => dir.to_string_lossy().to_string(),
    }
}

// ============================================================================
// Apply
// ============================================================================

/// Apply a plan in walk order, reporting each outcome to `observe`.
///
/// In a dry run nothing is touched. Otherwise a target that exists by the
/// time its rename comes up is skipped; an I/O failure stops the run and
/// earlier renames stay in place.
pub fn apply_plan(
    plan: &RenamePlan,
    dry_run: bool,
    mut observe: impl FnMut(RenameEvent<'_>),
) -> Result<RenameReport> {
    let mut report = RenameReport::new(plan.root.display().to_string(), dry_run, plan.scanned);

    for entry in &plan.entries {
        match entry {
            PlanEntry::Skip(skipped) => {
                observe(RenameEvent::Skipped(skipped));
                report.record_skipped(skipped.clone());
            }
            PlanEntry::Rename(planned) => {
                if !dry_run {
                    if let Some(skipped) = apply_one(planned)? {
                        observe(RenameEvent::Skipped(&skipped));
                        report.record_skipped(skipped);
                        continue;
                    }
                }
                observe(RenameEvent::Renamed(&planned.file));
                report.record_renamed(planned.file.clone());
            }
        }
    }

    crate::log_status!(
        "rename",
        "{} renamed, {} skipped, {} unchanged",
        report.summary.renamed,
        report.summary.skipped,
        report.summary.unchanged
    );

    Ok(report)
}

/// Rename a single file, or hand back why it was skipped.
fn apply_one(planned: &PlannedRename) -> Result<Option<SkippedFile>> {
    let file = &planned.file;
    let from = planned.dir.join(&file.from);
    let to = planned.dir.join(&file.to);

    // A case-only change on a case-insensitive filesystem "exists" as the source itself.
    let case_only = file.from.to_lowercase() == file.to.to_lowercase();
    if to.symlink_metadata().is_ok() && !case_only {
        return Ok(Some(SkippedFile {
            path: file.path.clone(),
            from: file.from.clone(),
            to: file.to.clone(),
            reason: SkipReason::TargetExists,
        }));
    }

    io::rename_file(&from, &to)?;
    Ok(None)
}

// ============================================================================
// Tests
// ============================================================================

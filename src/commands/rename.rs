use clap::Args;
use std::path::{Path, PathBuf};

use filetidy::defaults::{self, LoadedDefaults};
use filetidy::rename::{apply_plan, plan_renames};
use filetidy::{log_status, Error, RenameReport, SanitizeConfig};

use crate::commands::{CmdResult, GlobalArgs};
use crate::output;

#[derive(Args, Debug, Default)]
pub struct RenameArgs {
    /// Replace spaces with underscores in file names
    #[arg(long)]
    pub underscore: bool,

    /// Replace underscores with spaces in file names
    #[arg(long)]
    pub remove_underscore: bool,

    /// Separator used for spaces and invalid characters (e.g. _ or -)
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Text to be replaced in file names
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub old_separator: Option<String>,

    /// Replacement for --old-separator
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub new_separator: Option<String>,

    /// Convert file names to Title Case
    #[arg(long)]
    pub title_case: bool,

    /// Prefix file names with their modification time (YYYYMMDD_HHMMSS_)
    #[arg(long)]
    pub include_timestamp: bool,

    /// Show what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Directory to process (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Defaults file (defaults to .filetidy.json in the directory, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RenameArgs {
    fn sanitize_config(&self) -> SanitizeConfig {
        SanitizeConfig {
            separator: self.separator.clone(),
            use_underscore: self.underscore,
            remove_underscore: self.remove_underscore,
            old_separator: self.old_separator.clone(),
            new_separator: self.new_separator.clone(),
            title_case: self.title_case,
            include_timestamp: self.include_timestamp,
        }
    }
}

pub fn run(args: RenameArgs, global: &GlobalArgs) -> CmdResult<RenameReport> {
    let root = resolve_root(args.path.as_deref())?;

    let mut ignore = Vec::new();
    let base = match defaults::resolve(&root, args.config.as_deref())? {
        Some(LoadedDefaults { path, config }) => {
            log_status!("filetidy", "Loaded defaults from {}", path.display());
            ignore.push(absolute_path(&path));
            config
        }
        None => SanitizeConfig::default(),
    };

    let config = defaults::merge(base, args.sanitize_config());
    config.validate()?;

    log_status!("filetidy", "Current directory: {}", root.display());

    let plan = plan_renames(&root, &config, &ignore)?;
    let report = apply_plan(&plan, args.dry_run, |event| {
        if !global.json {
            output::print_event(event, args.dry_run);
        }
    })?;

    Ok((report, 0))
}

fn resolve_root(path: Option<&Path>) -> filetidy::Result<PathBuf> {
    let requested = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().map_err(|e| {
            Error::internal_io(e.to_string(), Some("get current directory".to_string()))
        })?,
    };

    let root = requested.canonicalize().map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("resolve {}", requested.display())))
    })?;

    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("{} is not a directory", root.display()),
            Some(requested.display().to_string()),
        ));
    }

    Ok(root)
}

/// Canonical parent joined with the file name, so the path matches what the walk produces.
fn absolute_path(path: &Path) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map(|p| p.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

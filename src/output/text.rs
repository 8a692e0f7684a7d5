//! Plain-text output: one line per rename, warnings and errors on stderr.

use filetidy::output::display_path;
use filetidy::{Error, RenameEvent};

/// Print one line for a rename decision as it happens.
pub fn print_event(event: RenameEvent<'_>, dry_run: bool) {
    let line = event_line(event, dry_run);
    match event {
        RenameEvent::Renamed(_) => println!("{}", line),
        RenameEvent::Skipped(_) => eprintln!("{}", line),
    }
}

fn rename_label(dry_run: bool) -> &'static str {
    if dry_run {
        "Dry run"
    } else {
        "Renamed"
    }
}

fn event_line(event: RenameEvent<'_>, dry_run: bool) -> String {
    match event {
        RenameEvent::Renamed(file) => format!(
            "{}: {} -> {}",
            rename_label(dry_run),
            display_path(&file.path, &file.from),
            display_path(&file.path, &file.to)
        ),
        // Non-UTF-8 names never get a target.
        RenameEvent::Skipped(file) if file.to.is_empty() => format!(
            "Skipped: {} ({})",
            display_path(&file.path, &file.from),
            file.reason.as_str()
        ),
        RenameEvent::Skipped(file) => format!(
            "Skipped: {} -> {} ({})",
            display_path(&file.path, &file.from),
            display_path(&file.path, &file.to),
            file.reason.as_str()
        ),
    }
}

pub fn print_error(err: &Error) {
    eprintln!("Error: {}", err.message);
    for hint in &err.hints {
        eprintln!("  hint: {}", hint.message);
    }
}

// Public modules
pub mod defaults;
pub mod error;
pub mod normalize;
pub mod output;
pub mod rename;
pub mod sanitize;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use normalize::normalize_unicode;
pub use output::{RenameReport, RenameSummary, RenamedFile, SkipReason, SkippedFile};
pub use rename::{apply_plan, format_timestamp, plan_renames, Namer, RenameEvent, RenamePlan};
pub use sanitize::{sanitize, SanitizeConfig};

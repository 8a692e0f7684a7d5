//! CLI output: JSON envelope and plain-text lines.

mod response;
mod text;

pub use response::print_json_result;
pub use text::{print_error, print_event};

pub(crate) use response::exit_code_for_error;

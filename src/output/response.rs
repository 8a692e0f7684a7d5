//! `--json` output: a single `{success, data|error}` envelope per run.

use filetidy::error::Hint;
use filetidy::{Error, ErrorCode, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody<'a>>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
    details: &'a serde_json::Value,
    #[serde(skip_serializing_if = "no_hints")]
    hints: &'a [Hint],
}

fn no_hints(hints: &&[Hint]) -> bool {
    hints.is_empty()
}

impl<'a> ErrorBody<'a> {
    fn new(err: &'a Error) -> Self {
        Self {
            code: err.code.as_str(),
            message: &err.message,
            details: &err.details,
            hints: &err.hints,
        }
    }
}

fn render<T: Serialize>(result: &Result<(T, i32)>) -> Result<String> {
    let envelope = match result {
        Ok((data, _)) => Envelope {
            success: true,
            data: Some(data),
            error: None,
        },
        Err(err) => Envelope {
            success: false,
            data: None,
            error: Some(ErrorBody::new(err)),
        },
    };

    serde_json::to_string_pretty(&envelope)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize report".to_string())))
}

/// Print the envelope for a command outcome and return the process exit code.
pub fn print_json_result<T: Serialize>(result: Result<(T, i32)>) -> i32 {
    let exit_code = match &result {
        Ok((_, code)) => *code,
        Err(err) => exit_code_for_error(err.code),
    };

    match render(&result) {
        Ok(payload) => {
            write_stdout(&payload);
            exit_code
        }
        Err(err) => {
            let code = exit_code_for_error(err.code);
            if let Ok(payload) = render::<()>(&Err(err)) {
                write_stdout(&payload);
            }
            code
        }
    }
}

// A closed pipe or full disk leaves the exit code alone.
fn write_stdout(payload: &str) {
    let _ = writeln!(io::stdout().lock(), "{}", payload);
}

pub(crate) fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::ValidationConflictingArguments => 2,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetidy::{RenameReport, RenamedFile};

    fn report() -> RenameReport {
        let mut report = RenameReport::new("/tmp/photos".to_string(), true, 2);
        report.record_renamed(RenamedFile {
            path: ".".to_string(),
            from: "a b.jpg".to_string(),
            to: "a_b.jpg".to_string(),
        });
        report
    }

    #[test]
    fn success_envelope_wraps_report() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&Ok((report(), 0))).unwrap()).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["dryRun"], true);
        assert_eq!(json["data"]["renames"][0]["to"], "a_b.jpg");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::validation_conflicting_arguments("--underscore", "--remove-underscore");
        let json: serde_json::Value =
            serde_json::from_str(&render::<RenameReport>(&Err(err)).unwrap()).unwrap();

        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "validation.conflicting_arguments");
        assert_eq!(json["error"]["hints"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn error_envelope_omits_empty_hints() {
        let err = Error::internal_io("permission denied", None);
        let json: serde_json::Value =
            serde_json::from_str(&render::<RenameReport>(&Err(err)).unwrap()).unwrap();

        assert_eq!(json["error"]["code"], "internal.io_error");
        assert!(json["error"].get("hints").is_none());
    }

    #[test]
    fn validation_and_config_errors_exit_2() {
        assert_eq!(exit_code_for_error(ErrorCode::ValidationConflictingArguments), 2);
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::ConfigInvalidJson), 2);
    }

    #[test]
    fn internal_errors_exit_1() {
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
        assert_eq!(exit_code_for_error(ErrorCode::InternalJsonError), 1);
    }

    #[test]
    fn printed_result_returns_exit_code() {
        let err = Error::validation_conflicting_arguments("--underscore", "--remove-underscore");
        assert_eq!(print_json_result::<RenameReport>(Err(err)), 2);
        assert_eq!(print_json_result(Ok((report(), 0))), 0);
    }
}

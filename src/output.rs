//! Shared invocation contract for the reporter binaries
//!
//! Every reporter follows the same output contract: on success, exactly one
//! JSON line on stdout and exit code 0; on failure, exactly one JSON error
//! object on stderr, nothing on stdout, and exit code 1.

use crate::error::ReportError;
use log::debug;
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// Serialize a report and write it as a single line
///
/// Serialization happens before anything is written, so a failing report
/// leaves the output stream untouched.
///
/// # Errors
///
/// Returns `ReportError::Serialization` if the report cannot be converted
/// to JSON, or `ReportError::IoError` if the write fails.
pub fn write_report<T: Serialize, W: Write>(report: &T, out: &mut W) -> Result<(), ReportError> {
    let line = serde_json::to_string(report)?;
    writeln!(out, "{line}")?;
    Ok(())
}

/// Write the failure object for an error to the error stream
///
/// The payload has exactly two keys: `error` with the failure message and
/// `status` with the literal `"failed"`.
pub fn write_failure<W: Write>(err: &ReportError, out: &mut W) {
    let payload = json!({
        "error": err.to_string(),
        "status": "failed",
    });
    // Nothing sensible left to do if the error stream itself is broken.
    let _ = writeln!(out, "{payload}");
}

/// Run the output contract against the given streams
///
/// # Returns
///
/// The process exit code: 0 if the report was written, 1 if it failed and
/// the error object was routed to the error stream.
pub fn emit_to<T, O, E>(report: &T, out: &mut O, err_out: &mut E) -> i32
where
    T: Serialize,
    O: Write,
    E: Write,
{
    match write_report(report, out) {
        Ok(()) => 0,
        Err(err) => {
            // Keep this below error level: env_logger enables error-level
            // output by default, and the stderr contract is exactly one
            // JSON line on failure.
            debug!("Failed to emit report: {err}");
            write_failure(&err, err_out);
            1
        }
    }
}

/// Run the output contract against stdout and stderr
///
/// Binaries pass the returned code to `std::process::exit`.
pub fn emit<T: Serialize>(report: &T) -> i32 {
    emit_to(
        report,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;

    /// Report whose serialization always fails, for exercising the
    /// failure path of the contract.
    struct PoisonedReport;

    impl Serialize for PoisonedReport {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("forced serialization failure"))
        }
    }

    #[test]
    fn test_write_report_emits_single_json_line() {
        let report = json!({"status": "ok", "count": 3});
        let mut out = Vec::new();

        write_report(&report, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["count"], 3);
    }

    #[test]
    fn test_emit_to_success_leaves_error_stream_empty() {
        let report = json!({"ok": true});
        let mut out = Vec::new();
        let mut err_out = Vec::new();

        let code = emit_to(&report, &mut out, &mut err_out);

        assert_eq!(code, 0);
        assert!(!out.is_empty());
        assert!(err_out.is_empty());
    }

    #[test]
    fn test_emit_to_failure_routes_error_object_to_stderr() {
        let mut out = Vec::new();
        let mut err_out = Vec::new();

        let code = emit_to(&PoisonedReport, &mut out, &mut err_out);

        assert_eq!(code, 1);
        assert!(out.is_empty(), "stdout must stay empty on failure");

        let text = String::from_utf8(err_out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed["status"], "failed");
        assert!(parsed["error"]
            .as_str()
            .unwrap()
            .contains("forced serialization failure"));
    }

    /// Writer handing everything to a shared buffer, for capturing the
    /// logger's output in a test.
    #[derive(Clone)]
    struct SharedWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failure_path_adds_no_log_line_under_default_filter() {
        // env_logger enables error-level output with no RUST_LOG set, so
        // the failure path must not log at error level or stderr would
        // carry a log line in addition to the JSON failure object.
        let captured = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .target(env_logger::Target::Pipe(Box::new(SharedWriter(
                captured.clone(),
            ))))
            .try_init();

        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let code = emit_to(&PoisonedReport, &mut out, &mut err_out);

        assert_eq!(code, 1);
        assert_eq!(
            String::from_utf8(err_out).unwrap().lines().count(),
            1,
            "stderr must carry exactly one JSON line on failure"
        );
        assert!(
            captured.lock().unwrap().is_empty(),
            "no log output may reach stderr under the default filter"
        );
    }

    #[test]
    fn test_write_failure_payload_has_exactly_two_keys() {
        let err = ReportError::IoError(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stream closed",
        ));
        let mut out = Vec::new();

        write_failure(&err, &mut out);

        let text = String::from_utf8(out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("error"));
        assert_eq!(object["status"], "failed");
    }
}

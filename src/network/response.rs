//! Response interpretation - turns a raw HTTP reply into a SubmissionResult
//!
//! Error messages are pulled out of the body by a priority-ordered table of
//! extractors. New server error shapes go into `FAILURE_EXTRACTORS` at the
//! position matching their specificity.

use serde_json::Value;

use crate::constants::{DEFAULT_SUCCESS_MESSAGE, FALLBACK_ERROR_MESSAGE};
use crate::models::SubmissionResult;

type Extractor = fn(&Value) -> Option<&str>;

/// Tried in order; the first non-blank hit wins
const FAILURE_EXTRACTORS: &[(&str, Extractor)] = &[
    ("detail.message", detail_message),
    ("detail", detail_text),
    ("detail[0].msg", first_validation_error),
    ("message", top_level_message),
];

/// `{"detail": {"message": "..."}}`
fn detail_message(body: &Value) -> Option<&str> {
    body.get("detail")?.get("message")?.as_str()
}

/// `{"detail": "..."}`
fn detail_text(body: &Value) -> Option<&str> {
    body.get("detail")?.as_str()
}

/// `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`
fn first_validation_error(body: &Value) -> Option<&str> {
    body.get("detail")?
        .as_array()?
        .iter()
        .find_map(|entry| entry.get("msg").and_then(Value::as_str))
}

/// `{"message": "..."}`
fn top_level_message(body: &Value) -> Option<&str> {
    body.get("message")?.as_str()
}

/// Most specific error message the body offers, or the fallback
pub fn failure_message(body: Option<&Value>) -> String {
    body.and_then(|body| {
        FAILURE_EXTRACTORS.iter().find_map(|(shape, extract)| {
            extract(body)
                .map(str::trim)
                .filter(|msg| !msg.is_empty())
                .map(|msg| {
                    tracing::debug!(shape, "Resolved error message");
                    msg.to_string()
                })
        })
    })
    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

/// Interpret a complete HTTP response
pub fn interpret(status: u16, body: &str) -> SubmissionResult {
    let json = serde_json::from_str::<Value>(body).ok();
    let is_2xx = (200..300).contains(&status);
    let confirmed = json
        .as_ref()
        .and_then(|v| v.get("success"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_2xx && confirmed {
        let message = json
            .as_ref()
            .and_then(top_level_message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_SUCCESS_MESSAGE);
        SubmissionResult::success(message)
    } else {
        SubmissionResult::failure(failure_message(json.as_ref()))
    }
}

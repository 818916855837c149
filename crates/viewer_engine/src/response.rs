use serde_json::Value;

use crate::{FailureKind, ScrapeError, ScrapePayload};

/// Number of body characters quoted when the backend answers with non-JSON.
pub const BODY_EXCERPT_CHARS: usize = 200;

/// Turns a raw backend reply into the nested result or a user-facing error.
///
/// An empty body counts as JSON `null`. Non-JSON bodies are reported with
/// their status and an excerpt; error statuses prefer the backend's `detail`.
pub fn interpret_response(status: u16, body: &str) -> Result<ScrapePayload, ScrapeError> {
    let data: Option<Value> = if body.is_empty() {
        None
    } else {
        match serde_json::from_str(body) {
            Ok(value) => Some(value),
            Err(_) => {
                let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
                return Err(ScrapeError::new(
                    FailureKind::NonJson { status },
                    format!("Backend returned non-JSON (status {status}): {excerpt}"),
                ));
            }
        }
    };

    if !(200..300).contains(&status) {
        let message = data
            .as_ref()
            .and_then(|value| value.get("detail"))
            .and_then(detail_text)
            .unwrap_or_else(|| format!("Request failed (status {status})"));
        return Err(ScrapeError::new(FailureKind::HttpStatus(status), message));
    }

    match data {
        Some(Value::Object(mut object)) => match object.remove("result") {
            Some(result) if result.is_object() => Ok(ScrapePayload { status, result }),
            _ => Err(missing_result()),
        },
        _ => Err(missing_result()),
    }
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn missing_result() -> ScrapeError {
    ScrapeError::new(
        FailureKind::MissingResult,
        "Backend response did not include a result",
    )
}

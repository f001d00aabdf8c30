//! Transport error normalization
//!
//! Every failed API call passes through [`normalize`] exactly once, at the
//! transport boundary. Callers above that boundary only see
//! [`ApiError::Generic`], [`ApiError::Validation`], or the original
//! [`TransportError`] wrapped in [`ApiError::Transport`].
//!
//! Rules, in order:
//! 1. no response payload, or status >= 500: pass the original error through
//! 2. empty body (zero keys): `Generic`
//! 3. anything else: `Validation`, with `detail` as the message and the whole
//!    body as the field mapping

use crate::error::{ApiError, FieldErrors, ResponseBody, TransportError};
use serde_json::{Map, Value};

/// Paths that get classified; everything else passes through
pub const API_PATH_PREFIX: &str = "api/";

/// Key used for a top-level list of messages
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Signature of the error hook installed on [`crate::ApiClient`]
pub type ErrorHook = fn(&str, TransportError) -> ApiError;

/// Default error hook: classify same-origin API calls only
///
/// The prefix check is a routing concern kept outside of [`normalize`].
#[must_use]
pub fn classify_api_error(path: &str, error: TransportError) -> ApiError {
    if is_api_path(path) {
        normalize(error)
    } else {
        ApiError::Transport(error)
    }
}

/// True for paths served by the backend API
#[must_use]
pub fn is_api_path(path: &str) -> bool {
    path.trim_start_matches('/').starts_with(API_PATH_PREFIX)
}

/// Classify a transport error into one of the normalized kinds
///
/// Never inspects anything but the error itself, and never retries.
#[must_use]
pub fn normalize(error: TransportError) -> ApiError {
    classify(&error).unwrap_or_else(|| {
        tracing::debug!(error = %error, "Passing transport error through unclassified");
        ApiError::Transport(error)
    })
}

/// `None` means "pass the original through"
fn classify(error: &TransportError) -> Option<ApiError> {
    let TransportError::Status { status, body, .. } = error else {
        return None;
    };
    if *status >= 500 {
        return None;
    }

    match body {
        ResponseBody::Empty | ResponseBody::Json(Value::Null) => None,
        ResponseBody::Text(text) if text.trim().is_empty() => None,
        ResponseBody::Json(Value::String(text)) if text.is_empty() => None,
        ResponseBody::Json(Value::Object(map)) if map.is_empty() => Some(generic()),
        ResponseBody::Json(Value::Array(items)) if items.is_empty() => Some(generic()),
        ResponseBody::Json(Value::Object(map)) => Some(ApiError::Validation {
            message: detail(map),
            fields: field_errors(map),
        }),
        ResponseBody::Json(Value::Array(items)) => {
            let mut fields = FieldErrors::new();
            fields.insert(NON_FIELD_ERRORS.to_string(), items.iter().map(message_text).collect());
            Some(ApiError::Validation {
                message: String::new(),
                fields,
            })
        },
        // Unstructured 4xx bodies carry nothing a form could use
        ResponseBody::Text(_) | ResponseBody::Json(_) => Some(generic()),
    }
}

const fn generic() -> ApiError {
    ApiError::Generic { message: None }
}

fn detail(map: &Map<String, Value>) -> String {
    match map.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// View the body as field → messages without validating its shape
fn field_errors(map: &Map<String, Value>) -> FieldErrors {
    map.iter()
        .map(|(field, value)| {
            let messages = match value {
                Value::Array(items) => items.iter().map(message_text).collect(),
                other => vec![message_text(other)],
            };
            (field.clone(), messages)
        })
        .collect()
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

//! Error types for the eventos API client
//!
//! Two layers:
//! - [`TransportError`]: what the HTTP transport raised, untouched
//! - [`ApiError`]: the normalized error callers handle (see [`crate::normalize`])

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name → ordered list of messages for that field
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Body of a non-2xx response, as received
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Zero bytes
    Empty,
    /// Body parsed as JSON (may be `null`)
    Json(Value),
    /// Body that is not JSON (HTML error pages, plain text)
    Text(String),
}

impl ResponseBody {
    /// Interpret raw response bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::Empty;
        }
        serde_json::from_slice(bytes).map_or_else(
            |_| Self::Text(String::from_utf8_lossy(bytes).into_owned()),
            Self::Json,
        )
    }

    /// Text rendering used for error pages
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Empty | Self::Json(Value::Null) => None,
            Self::Json(value) => Some(value.to_string()),
            Self::Text(text) => Some(text.clone()),
        }
    }
}

/// Errors raised by the HTTP transport
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// No response was received (connection refused, timeout, DNS)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {path}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Request path, relative to the API base URL
        path: String,
        /// Response body
        body: ResponseBody,
    },

    /// A 2xx response could not be decoded
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The request could not be built (bad base URL, bad content type)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// HTTP status of the response, if one was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server answered with a 5xx status
    #[must_use]
    pub const fn is_server_fault(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

/// The two normalized error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The API failed without usable detail
    Generic,
    /// The API rejected the input field by field
    Validation,
}

/// Errors returned by every API client method
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 4xx response without usable detail
    #[error("{}", .message.as_deref().unwrap_or("API error"))]
    Generic {
        /// Optional human-readable message
        message: Option<String>,
    },

    /// 4xx response carrying per-field messages
    #[error("Validation failed: {message}")]
    Validation {
        /// Top-level message (`detail`), empty when absent
        message: String,
        /// Messages per field, equal to the response body
        fields: FieldErrors,
    },

    /// Unclassified failure, passed through unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Normalized kind, `None` for pass-through transport errors
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Generic { .. } => Some(ErrorKind::Generic),
            Self::Validation { .. } => Some(ErrorKind::Validation),
            Self::Transport(_) => None,
        }
    }

    /// Field errors, only present on validation errors
    #[must_use]
    pub const fn fields(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Label used for logs and metrics
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Generic { .. } => "generic",
            Self::Validation { .. } => "validation",
            Self::Transport(_) => "transport",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_body_from_bytes() {
        assert_eq!(ResponseBody::from_bytes(b""), ResponseBody::Empty);
        assert_eq!(
            ResponseBody::from_bytes(br#"{"name":["required"]}"#),
            ResponseBody::Json(json!({"name": ["required"]}))
        );
        assert_eq!(
            ResponseBody::from_bytes(b"<h1>Bad Gateway</h1>"),
            ResponseBody::Text("<h1>Bad Gateway</h1>".to_string())
        );
    }

    #[test]
    fn transport_error_status() {
        let error = TransportError::Status {
            status: 503,
            path: "api/v1/events/x/".to_string(),
            body: ResponseBody::Empty,
        };
        assert_eq!(error.status(), Some(503));
        assert!(error.is_server_fault());
        assert_eq!(TransportError::RequestFailed("refused".to_string()).status(), None);
    }

    #[test]
    fn generic_error_display_falls_back() {
        assert_eq!(ApiError::Generic { message: None }.to_string(), "API error");
        assert_eq!(
            ApiError::Generic { message: Some("No event".to_string()) }.to_string(),
            "No event"
        );
    }

    #[test]
    fn kind_and_fields() {
        let mut fields = FieldErrors::new();
        fields.insert("email".to_string(), vec!["taken".to_string()]);
        let error = ApiError::Validation {
            message: String::new(),
            fields: fields.clone(),
        };
        assert_eq!(error.kind(), Some(ErrorKind::Validation));
        assert_eq!(error.fields(), Some(&fields));

        let raw = ApiError::from(TransportError::RequestFailed("down".to_string()));
        assert_eq!(raw.kind(), None);
        assert_eq!(raw.fields(), None);
        assert_eq!(raw.label(), "transport");
    }
}

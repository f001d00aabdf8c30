//! Error responses
//!
//! Every failure a handler returns becomes a JSON body `{code, message}`,
//! plus `fields` when the backend rejected input field by field.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use eventos_client::FieldErrors;
use eventos_runtime::StoreError;
use http::StatusCode;
use serde::Serialize;
use std::fmt;

/// Error returned by web handlers
///
/// # Examples
///
/// ```ignore
/// async fn handler() -> Result<Json<PageContext>, AppError> {
///     let slug = resolve_event_slug(forced, host)
///         .ok_or_else(|| AppError::not_found(t(locale, keys::EVENT_NOT_FOUND)))?;
///     ...
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    code: &'static str,
    fields: Option<FieldErrors>,
    /// Logged, never sent to the client
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Error with an explicit status and code
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code,
            fields: None,
            source: None,
        }
    }

    /// Attach the error that caused this one
    #[must_use]
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach per-field messages
    #[must_use]
    pub fn with_fields(mut self, fields: FieldErrors) -> Self {
        self.fields = Some(fields);
        self
    }

    /// 404
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    /// 401
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    /// 422
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
    }

    /// 400
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    /// Upstream failure, reported with the upstream status when there is one
    ///
    /// Statuses that are not valid HTTP codes, or absent, become 502.
    #[must_use]
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        let status = status
            .and_then(|status| StatusCode::from_u16(status).ok())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        Self::new(status, "UPSTREAM_ERROR", message)
    }

    /// 500
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR", message)
    }

    /// HTTP status
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Client-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    error = %source,
                    "Request failed"
                ),
                None => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    "Request failed"
                ),
            }
        }

        let body = ErrorBody {
            code: self.code,
            message: self.message,
            fields: self.fields,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Timeout => {
                Self::new(StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", "The backend did not answer in time")
                    .with_source(error)
            },
            StoreError::ChannelClosed => Self::internal("An internal error occurred").with_source(error),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal("An internal error occurred").with_source(err)
    }
}

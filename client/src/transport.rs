//! HTTP transport seam
//!
//! The resource clients never touch `reqwest` directly: they build an
//! [`ApiRequest`] and hand it to a [`Transport`]. Production code uses
//! [`ReqwestTransport`]; tests inject a recording double.

use crate::error::{ResponseBody, TransportError};
use crate::types::FileUpload;
use async_trait::async_trait;
use reqwest::{Client, Url, multipart};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;

/// HTTP method
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Upper-case method name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Request body
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// `application/json`
    Json(Value),
    /// `multipart/form-data` with a single file part
    Multipart {
        /// Form field name
        field: String,
        /// The file
        file: FileUpload,
    },
}

/// A request relative to the API base URL
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, e.g. `api/v1/events/sbc/`
    pub path: String,
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
    /// Body
    pub body: RequestBody,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// GET request
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// DELETE request
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if the body does not serialize.
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, TransportError> {
        Self::new(Method::Post, path).json(body)
    }

    /// PUT request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if the body does not serialize.
    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, TransportError> {
        Self::new(Method::Put, path).json(body)
    }

    /// POST request with a single multipart file part
    #[must_use]
    pub fn multipart(path: impl Into<String>, field: impl Into<String>, file: FileUpload) -> Self {
        let mut request = Self::new(Method::Post, path);
        request.body = RequestBody::Multipart {
            field: field.into(),
            file,
        };
        request
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    fn json<B: Serialize>(mut self, body: &B) -> Result<Self, TransportError> {
        let value = serde_json::to_value(body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }
}

/// Sends [`ApiRequest`]s and returns the decoded JSON response
///
/// An empty 2xx body decodes to `Value::Null`. Any non-2xx response is a
/// [`TransportError::Status`] carrying the body as received.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;

    /// Set or clear the bearer token sent with every request
    async fn set_bearer_token(&self, token: Option<String>);
}

/// [`Transport`] backed by `reqwest`
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    token: RwLock<Option<String>>,
}

impl ReqwestTransport {
    /// Create a transport rooted at `base_url`
    ///
    /// A trailing `/` is added when missing so relative paths join below it.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] for an unparsable base URL
    /// or if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| TransportError::InvalidRequest(format!("base URL {base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token: RwLock::new(None),
        })
    }

    /// A transport sharing this one's connection pool, with no bearer token
    ///
    /// Used to give each logical session its own credentials.
    #[must_use]
    pub fn new_session(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: RwLock::new(None),
        }
    }

    /// Base URL requests are joined to
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = self
            .base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart { field, file } => {
                let part = multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                builder.multipart(multipart::Form::new().part(field, part))
            },
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                path: request.path,
                body: ResponseBody::from_bytes(&bytes),
            });
        }
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| TransportError::ResponseParseFailed(e.to_string()))
    }

    async fn set_bearer_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

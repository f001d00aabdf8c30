//! Request extractors
//!
//! - `EventHost`: the host the request was addressed to
//! - `BearerToken`: the caller's access token, if any
//! - `CorrelationId`: set by the correlation middleware, or generated

use crate::middleware::CORRELATION_ID_HEADER;
use axum::{async_trait, extract::FromRequestParts};
use http::{header, request::Parts};
use uuid::Uuid;

/// Host the request was addressed to
///
/// Read from the `Host` header, falling back to the request URI authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHost(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for EventHost
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .or_else(|| parts.uri.authority().map(|a| a.as_str().to_owned()));

        Ok(Self(host))
    }
}

/// Access token from `Authorization: Bearer <token>`
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(pub Option<String>);

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self.0.as_ref().map(|_| "<redacted>");
        f.debug_tuple("BearerToken").field(&shown).finish()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned);

        Ok(Self(token))
    }
}

/// Correlation ID for request tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .extensions
            .get::<Uuid>()
            .copied()
            .or_else(|| {
                parts
                    .headers
                    .get(CORRELATION_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| Uuid::parse_str(s).ok())
            })
            .unwrap_or_else(Uuid::new_v4);

        Ok(Self(correlation_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use http::Request;

    fn parts(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[tokio::test]
    async fn host_from_header() {
        let mut parts = parts(
            Request::builder()
                .header(header::HOST, "sbc.eventos.com:3000")
                .body(())
                .unwrap(),
        );

        let host = EventHost::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(host, EventHost(Some("sbc.eventos.com:3000".to_string())));
    }

    #[tokio::test]
    async fn host_from_uri_when_header_missing() {
        let mut parts = parts(
            Request::builder()
                .uri("http://sbc.eventos.com/en")
                .body(())
                .unwrap(),
        );

        let host = EventHost::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(host.0.as_deref(), Some("sbc.eventos.com"));
    }

    #[tokio::test]
    async fn bearer_token_requires_scheme() {
        let mut with_token = parts(
            Request::builder()
                .header(header::AUTHORIZATION, "Bearer abc")
                .body(())
                .unwrap(),
        );
        let mut basic = parts(
            Request::builder()
                .header(header::AUTHORIZATION, "Basic abc")
                .body(())
                .unwrap(),
        );

        assert_eq!(
            BearerToken::from_request_parts(&mut with_token, &()).await.unwrap(),
            BearerToken(Some("abc".to_string()))
        );
        assert_eq!(
            BearerToken::from_request_parts(&mut basic, &()).await.unwrap(),
            BearerToken(None)
        );
    }

    #[test]
    fn bearer_token_debug_is_redacted() {
        let rendered = format!("{:?}", BearerToken(Some("abc".to_string())));
        assert!(!rendered.contains("abc"));
    }

    #[tokio::test]
    async fn correlation_id_prefers_middleware_value() {
        let id = Uuid::new_v4();
        let mut parts = parts(
            Request::builder()
                .header(CORRELATION_ID_HEADER, Uuid::new_v4().to_string())
                .body(())
                .unwrap(),
        );
        parts.extensions.insert(id);

        let extracted = CorrelationId::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(extracted.0, id);
    }
}

//! Authentication collaborator
//!
//! The store never handles tokens itself. It asks an [`Authenticator`] to
//! log in, log out, or tell it who the current user is.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::API_V1;
use crate::transport::ApiRequest;
use crate::types::User;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::RwLock;

const RESOURCE: &str = "auth";

/// Email and password
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    /// Login email
    pub email: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Build credentials
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Owns authentication state on behalf of the store
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// The logged-in user, if any, without contacting the backend
    async fn current_user(&self) -> Option<User>;

    /// Reload the logged-in user from the backend
    ///
    /// `Ok(None)` when nobody is logged in.
    async fn fetch_user(&self) -> Result<Option<User>, ApiError>;

    /// Log in and load the user
    async fn login(&self, credentials: Credentials) -> Result<(), ApiError>;

    /// Exchange the refresh token for a new access token
    async fn refresh(&self) -> Result<(), ApiError>;

    /// Forget the session
    async fn logout(&self) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct TokenPair {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

#[derive(Default)]
struct Session {
    access: Option<String>,
    refresh: Option<String>,
    user: Option<User>,
}

/// [`Authenticator`] for the backend's JWT token endpoints
///
/// Tokens are installed on the client's transport as a bearer token, so the
/// authenticator must own a transport that is not shared with other users.
pub struct TokenAuthenticator {
    client: ApiClient,
    session: RwLock<Session>,
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator").finish_non_exhaustive()
    }
}

impl TokenAuthenticator {
    /// Anonymous session
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            session: RwLock::new(Session::default()),
        }
    }

    /// Session resumed from an access token (e.g. a request's bearer token)
    pub async fn with_token(client: ApiClient, access: impl Into<String>) -> Self {
        let access = access.into();
        client.transport().set_bearer_token(Some(access.clone())).await;
        Self {
            client,
            session: RwLock::new(Session {
                access: Some(access),
                ..Session::default()
            }),
        }
    }

    async fn install(&self, tokens: TokenPair) {
        self.client
            .transport()
            .set_bearer_token(Some(tokens.access.clone()))
            .await;
        let mut session = self.session.write().await;
        session.access = Some(tokens.access);
        if tokens.refresh.is_some() {
            session.refresh = tokens.refresh;
        }
    }

    async fn clear(&self) {
        *self.session.write().await = Session::default();
        self.client.transport().set_bearer_token(None).await;
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn current_user(&self) -> Option<User> {
        self.session.read().await.user.clone()
    }

    async fn fetch_user(&self) -> Result<Option<User>, ApiError> {
        if self.session.read().await.access.is_none() {
            return Ok(None);
        }
        let user = self.client.users().current().await?;
        self.session.write().await.user = Some(user.clone());
        Ok(Some(user))
    }

    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: Credentials) -> Result<(), ApiError> {
        let request = ApiRequest::post(format!("{API_V1}token/"), &credentials)?;
        let tokens: TokenPair = self.client.request(RESOURCE, request).await?;
        self.install(tokens).await;
        if let Err(error) = self.fetch_user().await {
            tracing::warn!(%error, "Could not load the user after login, session dropped");
            self.clear().await;
            return Err(error);
        }
        tracing::info!("User logged in");
        Ok(())
    }

    async fn refresh(&self) -> Result<(), ApiError> {
        let Some(refresh) = self.session.read().await.refresh.clone() else {
            tracing::debug!("No refresh token, nothing to refresh");
            return Ok(());
        };
        let request = ApiRequest::post(format!("{API_V1}token/refresh/"), &json!({ "refresh": refresh }))?;
        let tokens: TokenPair = self.client.request(RESOURCE, request).await?;
        self.install(tokens).await;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.clear().await;
        tracing::info!("User logged out");
        Ok(())
    }
}

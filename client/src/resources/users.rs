use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{NewUser, User, UserUpdate};

const RESOURCE: &str = "users";

/// Accounts
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST users/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}users/"), user)?;
        self.client.request(RESOURCE, request).await
    }

    /// `GET users/current/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn current(&self) -> Result<User, ApiError> {
        self.client
            .request(RESOURCE, ApiRequest::get(format!("{API_V1}users/current/")))
            .await
    }

    /// `PUT users/current/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn update_current(&self, update: &UserUpdate) -> Result<User, ApiError> {
        let request = ApiRequest::put(format!("{API_V1}users/current/"), update)?;
        self.client.request(RESOURCE, request).await
    }

    /// `GET users/?email=..`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<User>, ApiError> {
        let request = ApiRequest::get(format!("{API_V1}users/")).query("email", email);
        self.client.request(RESOURCE, request).await
    }
}

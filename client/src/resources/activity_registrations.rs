use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::ActivityRegistration;
use serde_json::json;

const RESOURCE: &str = "activity_registrations";

/// A user's activity registrations
#[derive(Debug, Clone, Copy)]
pub struct ActivityRegistrationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ActivityRegistrationsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET activity_registrations/?user_id=..&event_slug=..`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn list_by_user_and_event(
        &self,
        user_id: &str,
        event_slug: &str,
    ) -> Result<Vec<ActivityRegistration>, ApiError> {
        let request = ApiRequest::get(format!("{API_V1}activity_registrations/"))
            .query("user_id", user_id)
            .query("event_slug", event_slug);
        self.client.request(RESOURCE, request).await
    }

    /// `POST activity_registrations/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn register(&self, activity_slug: &str) -> Result<ActivityRegistration, ApiError> {
        let request = ApiRequest::post(
            format!("{API_V1}activity_registrations/"),
            &json!({ "activity": activity_slug }),
        )?;
        self.client.request(RESOURCE, request).await
    }

    /// `DELETE activity_registrations/{id}`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn deregister(&self, registration_id: i64) -> Result<(), ApiError> {
        self.client
            .execute(
                RESOURCE,
                ApiRequest::delete(format!("{API_V1}activity_registrations/{registration_id}")),
            )
            .await
    }
}

use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::EventRegistration;
use serde::Serialize;

const RESOURCE: &str = "event_registrations";

#[derive(Serialize)]
struct NewEventRegistration<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    registration_type: Option<i64>,
}

/// A user's event registrations
#[derive(Debug, Clone, Copy)]
pub struct EventRegistrationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EventRegistrationsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET event_registrations/?user_id=..&event_slug=..`
    ///
    /// The backend may return several; callers take the first.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn list_by_user_and_event(
        &self,
        user_id: &str,
        event_slug: &str,
    ) -> Result<Vec<EventRegistration>, ApiError> {
        let request = ApiRequest::get(format!("{API_V1}event_registrations/"))
            .query("user_id", user_id)
            .query("event_slug", event_slug);
        self.client.request(RESOURCE, request).await
    }

    /// `POST event_registrations/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn register(
        &self,
        event_slug: &str,
        registration_type: Option<i64>,
    ) -> Result<EventRegistration, ApiError> {
        let body = NewEventRegistration {
            event: event_slug,
            registration_type,
        };
        let request = ApiRequest::post(format!("{API_V1}event_registrations/"), &body)?;
        self.client.request(RESOURCE, request).await
    }
}

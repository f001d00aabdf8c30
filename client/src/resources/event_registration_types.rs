use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{NewRegistrationType, RegistrationType, RegistrationTypeNames};

const RESOURCE: &str = "event_registration_types";

/// Registration tiers of an event
#[derive(Debug, Clone, Copy)]
pub struct EventRegistrationTypesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EventRegistrationTypesApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST event_registration_types/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, registration_type: &NewRegistrationType) -> Result<RegistrationType, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}event_registration_types/"), registration_type)?;
        self.client.request(RESOURCE, request).await
    }

    /// `PUT event_registration_types/{id}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn update(&self, id: i64, names: &RegistrationTypeNames) -> Result<RegistrationType, ApiError> {
        let request = ApiRequest::put(format!("{API_V1}event_registration_types/{id}/"), names)?;
        self.client.request(RESOURCE, request).await
    }

    /// `DELETE event_registration_types/{id}`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute(
                RESOURCE,
                ApiRequest::delete(format!("{API_V1}event_registration_types/{id}")),
            )
            .await
    }
}

use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{Event, EventRegistration, Schedule};

const RESOURCE: &str = "events";

/// Events, addressed by slug
#[derive(Debug, Clone, Copy)]
pub struct EventsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EventsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET events/{slug}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Event, ApiError> {
        self.client
            .request(RESOURCE, ApiRequest::get(format!("{API_V1}events/{slug}/")))
            .await
    }

    /// `PUT events/{slug}/` with names and dates
    ///
    /// The response body is not decoded; reload with [`Self::get_by_slug`].
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn update(&self, slug: &str, schedule: &Schedule) -> Result<(), ApiError> {
        let request = ApiRequest::put(format!("{API_V1}events/{slug}/"), schedule)?;
        self.client.execute(RESOURCE, request).await
    }

    /// `GET events/{slug}/registrations/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn list_registrations(&self, slug: &str) -> Result<Vec<EventRegistration>, ApiError> {
        self.client
            .request(
                RESOURCE,
                ApiRequest::get(format!("{API_V1}events/{slug}/registrations/")),
            )
            .await
    }
}

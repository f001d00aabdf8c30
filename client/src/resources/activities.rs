use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{Activity, ActivityRegistration, NewEventItem, Schedule};

const RESOURCE: &str = "activities";

/// Activities, addressed by slug
#[derive(Debug, Clone, Copy)]
pub struct ActivitiesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ActivitiesApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET activities/{slug}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Activity, ApiError> {
        self.client
            .request(RESOURCE, ApiRequest::get(format!("{API_V1}activities/{slug}/")))
            .await
    }

    /// `POST activities/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, activity: &NewEventItem) -> Result<Activity, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}activities/"), activity)?;
        self.client.request(RESOURCE, request).await
    }

    /// `PUT activities/{slug}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn update(&self, slug: &str, schedule: &Schedule) -> Result<Activity, ApiError> {
        let request = ApiRequest::put(format!("{API_V1}activities/{slug}/"), schedule)?;
        self.client.request(RESOURCE, request).await
    }

    /// `GET activities/{slug}/registrations/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn list_registrations(&self, slug: &str) -> Result<Vec<ActivityRegistration>, ApiError> {
        self.client
            .request(
                RESOURCE,
                ApiRequest::get(format!("{API_V1}activities/{slug}/registrations/")),
            )
            .await
    }
}

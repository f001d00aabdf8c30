use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{NewEventItem, Schedule, Submission, Track, TrackSubmissionDocumentSlot};

const RESOURCE: &str = "tracks";

/// Submission tracks, addressed by id
#[derive(Debug, Clone, Copy)]
pub struct TracksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TracksApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET tracks/{id}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn get(&self, id: &str) -> Result<Track, ApiError> {
        self.client
            .request(RESOURCE, ApiRequest::get(format!("{API_V1}tracks/{id}/")))
            .await
    }

    /// `POST tracks/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, track: &NewEventItem) -> Result<Track, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}tracks/"), track)?;
        self.client.request(RESOURCE, request).await
    }

    /// `PUT tracks/{id}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn update(&self, id: &str, schedule: &Schedule) -> Result<Track, ApiError> {
        let request = ApiRequest::put(format!("{API_V1}tracks/{id}/"), schedule)?;
        self.client.request(RESOURCE, request).await
    }

    /// `GET tracks/{id}/submissions/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn list_submissions(&self, id: &str) -> Result<Vec<Submission>, ApiError> {
        self.client
            .request(RESOURCE, ApiRequest::get(format!("{API_V1}tracks/{id}/submissions/")))
            .await
    }

    /// `GET tracks/{id}/submission_document_slots/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn list_submission_document_slots(
        &self,
        id: &str,
    ) -> Result<Vec<TrackSubmissionDocumentSlot>, ApiError> {
        self.client
            .request(
                RESOURCE,
                ApiRequest::get(format!("{API_V1}tracks/{id}/submission_document_slots/")),
            )
            .await
    }
}

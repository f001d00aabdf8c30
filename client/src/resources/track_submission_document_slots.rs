use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{NewDocumentSlot, Schedule, TrackSubmissionDocumentSlot};

const RESOURCE: &str = "track_submission_document_slots";

/// Document slots a track asks submissions to fill
#[derive(Debug, Clone, Copy)]
pub struct TrackSubmissionDocumentSlotsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrackSubmissionDocumentSlotsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET track_submission_document_slots/{id}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn get(&self, id: i64) -> Result<TrackSubmissionDocumentSlot, ApiError> {
        self.client
            .request(
                RESOURCE,
                ApiRequest::get(format!("{API_V1}track_submission_document_slots/{id}/")),
            )
            .await
    }

    /// `POST track_submission_document_slots/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, slot: &NewDocumentSlot) -> Result<TrackSubmissionDocumentSlot, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}track_submission_document_slots/"), slot)?;
        self.client.request(RESOURCE, request).await
    }

    /// `PUT track_submission_document_slots/{id}/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn update(&self, id: i64, schedule: &Schedule) -> Result<TrackSubmissionDocumentSlot, ApiError> {
        let request = ApiRequest::put(format!("{API_V1}track_submission_document_slots/{id}/"), schedule)?;
        self.client.request(RESOURCE, request).await
    }
}

use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{NewTrackReviewQuestion, TrackReviewQuestion};

const RESOURCE: &str = "track_review_questions";

/// Review questionnaires of a track
#[derive(Debug, Clone, Copy)]
pub struct TrackReviewQuestionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrackReviewQuestionsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST track_review_questions/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, question: &NewTrackReviewQuestion) -> Result<TrackReviewQuestion, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}track_review_questions/"), question)?;
        self.client.request(RESOURCE, request).await
    }
}

use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{NewSubmission, NewSubmissionDocument, Submission, SubmissionDocument};

const RESOURCE: &str = "submissions";

/// Submissions and their documents
#[derive(Debug, Clone, Copy)]
pub struct SubmissionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SubmissionsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST submissions/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, submission: &NewSubmission) -> Result<Submission, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}submissions/"), submission)?;
        self.client.request(RESOURCE, request).await
    }

    /// `POST submission_documents/`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn add_document(&self, document: &NewSubmissionDocument) -> Result<SubmissionDocument, ApiError> {
        let request = ApiRequest::post(format!("{API_V1}submission_documents/"), document)?;
        self.client.request(RESOURCE, request).await
    }
}

use super::API_V1;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::ApiRequest;
use crate::types::{Document, FileUpload};

const RESOURCE: &str = "documents";

/// File uploads
#[derive(Debug, Clone, Copy)]
pub struct DocumentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DocumentsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST documents/` as `multipart/form-data`, field `file`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on failure.
    pub async fn create(&self, file: FileUpload) -> Result<Document, ApiError> {
        self.client
            .request(RESOURCE, ApiRequest::multipart(format!("{API_V1}documents/"), "file", file))
            .await
    }
}

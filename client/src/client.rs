//! eventos API client

use crate::error::{ApiError, TransportError};
use crate::normalize::{ErrorHook, classify_api_error};
use crate::resources::{
    ActivitiesApi, ActivityRegistrationsApi, DocumentsApi, EventRegistrationTypesApi,
    EventRegistrationsApi, EventsApi, SubmissionsApi, TrackReviewQuestionsApi,
    TrackSubmissionDocumentSlotsApi, TracksApi, UsersApi,
};
use crate::transport::{ApiRequest, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Entry point to every resource of the backend API
///
/// Cheap to clone: the transport is shared. Every failure goes through the
/// installed [`ErrorHook`] (by default [`classify_api_error`]) exactly once.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    on_error: ErrorHook,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over `transport` with the default error hook
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            on_error: classify_api_error,
        }
    }

    /// Replace the error hook
    #[must_use]
    pub fn with_error_hook(mut self, on_error: ErrorHook) -> Self {
        self.on_error = on_error;
        self
    }

    /// The underlying transport
    #[must_use]
    pub const fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Send `request` and decode the response body as `T`
    ///
    /// # Errors
    ///
    /// Returns the hook-classified [`ApiError`] for transport failures, or
    /// [`ApiError::Transport`] wrapping `ResponseParseFailed` if the body does
    /// not decode as `T`.
    #[tracing::instrument(
        skip(self, request),
        fields(method = request.method.as_str(), path = %request.path)
    )]
    pub async fn request<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let value = self.dispatch(resource, request).await?;
        serde_json::from_value(value).map_err(|e| {
            tracing::warn!(error = %e, "Response did not match the expected shape");
            ApiError::Transport(TransportError::ResponseParseFailed(e.to_string()))
        })
    }

    /// Send `request` and discard the response body
    ///
    /// # Errors
    ///
    /// Returns the hook-classified [`ApiError`] for transport failures.
    #[tracing::instrument(
        skip(self, request),
        fields(method = request.method.as_str(), path = %request.path)
    )]
    pub async fn execute(&self, resource: &'static str, request: ApiRequest) -> Result<(), ApiError> {
        self.dispatch(resource, request).await.map(|_| ())
    }

    async fn dispatch(&self, resource: &'static str, request: ApiRequest) -> Result<Value, ApiError> {
        metrics::counter!("api.requests", "resource" => resource).increment(1);
        let path = request.path.clone();

        match self.transport.send(request).await {
            Ok(value) => Ok(value),
            Err(error) => {
                let error = (self.on_error)(&path, error);
                metrics::counter!("api.errors", "kind" => error.label()).increment(1);
                tracing::warn!(resource, kind = error.label(), error = %error, "API request failed");
                Err(error)
            },
        }
    }

    /// `api/v1/events/`
    #[must_use]
    pub const fn events(&self) -> EventsApi<'_> {
        EventsApi::new(self)
    }

    /// `api/v1/activities/`
    #[must_use]
    pub const fn activities(&self) -> ActivitiesApi<'_> {
        ActivitiesApi::new(self)
    }

    /// `api/v1/activity_registrations/`
    #[must_use]
    pub const fn activity_registrations(&self) -> ActivityRegistrationsApi<'_> {
        ActivityRegistrationsApi::new(self)
    }

    /// `api/v1/event_registrations/`
    #[must_use]
    pub const fn event_registrations(&self) -> EventRegistrationsApi<'_> {
        EventRegistrationsApi::new(self)
    }

    /// `api/v1/event_registration_types/`
    #[must_use]
    pub const fn event_registration_types(&self) -> EventRegistrationTypesApi<'_> {
        EventRegistrationTypesApi::new(self)
    }

    /// `api/v1/tracks/`
    #[must_use]
    pub const fn tracks(&self) -> TracksApi<'_> {
        TracksApi::new(self)
    }

    /// `api/v1/submissions/` and `api/v1/submission_documents/`
    #[must_use]
    pub const fn submissions(&self) -> SubmissionsApi<'_> {
        SubmissionsApi::new(self)
    }

    /// `api/v1/documents/`
    #[must_use]
    pub const fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    /// `api/v1/users/`
    #[must_use]
    pub const fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// `api/v1/track_review_questions/`
    #[must_use]
    pub const fn track_review_questions(&self) -> TrackReviewQuestionsApi<'_> {
        TrackReviewQuestionsApi::new(self)
    }

    /// `api/v1/track_submission_document_slots/`
    #[must_use]
    pub const fn track_submission_document_slots(&self) -> TrackSubmissionDocumentSlotsApi<'_> {
        TrackSubmissionDocumentSlotsApi::new(self)
    }
}

//! Resource clients, one per backend resource
//!
//! Each is a thin borrow of [`crate::ApiClient`] that maps operations to
//! method + path + body. Paths are relative to the API base URL.

mod activities;
mod activity_registrations;
mod documents;
mod event_registration_types;
mod event_registrations;
mod events;
mod submissions;
mod track_review_questions;
mod track_submission_document_slots;
mod tracks;
mod users;

pub use activities::ActivitiesApi;
pub use activity_registrations::ActivityRegistrationsApi;
pub use documents::DocumentsApi;
pub use event_registration_types::EventRegistrationTypesApi;
pub use event_registrations::EventRegistrationsApi;
pub use events::EventsApi;
pub use submissions::SubmissionsApi;
pub use track_review_questions::TrackReviewQuestionsApi;
pub use track_submission_document_slots::TrackSubmissionDocumentSlotsApi;
pub use tracks::TracksApi;
pub use users::UsersApi;

/// Prefix shared by every backend path
pub const API_V1: &str = "api/v1/";

//! Wire types for the eventos backend API
//!
//! Unknown fields are ignored on deserialization. Optional or
//! backend-computed fields default when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything with a Portuguese `name` and an optional English one
pub trait LocalizedName {
    /// Name in the default language
    fn name(&self) -> &str;

    /// English name, empty when not provided
    fn name_english(&self) -> &str;

    /// English name when asked for and present, the default name otherwise
    fn localized_name(&self, english: bool) -> &str {
        if english && !self.name_english().is_empty() {
            self.name_english()
        } else {
            self.name()
        }
    }
}

macro_rules! localized_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl LocalizedName for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn name_english(&self) -> &str {
                    &self.name_english
                }
            }
        )+
    };
}

localized_name!(Event, RegistrationType, Activity, Track, TrackSubmissionDocumentSlot);

/// An event (conference, congress, ...)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// URL-safe unique identifier
    pub slug: String,
    /// Name in Portuguese
    pub name: String,
    /// Name in English, may be empty
    #[serde(default)]
    pub name_english: String,
    /// Start of the event
    pub starts_on: DateTime<Utc>,
    /// End of the event
    pub ends_on: DateTime<Utc>,
    /// Whether the event has activities
    #[serde(default)]
    pub has_activities: bool,
    /// Whether the event has tracks
    #[serde(default)]
    pub has_tracks: bool,
    /// Registration tiers users can pick
    #[serde(default)]
    pub registration_types: Vec<RegistrationType>,
}

/// A tier a user picks when registering for an event
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationType {
    /// Numeric id
    pub id: i64,
    /// Owning event
    #[serde(default)]
    pub event_id: Option<i64>,
    /// Name in Portuguese
    pub name: String,
    /// Name in English, may be empty
    #[serde(default)]
    pub name_english: String,
}

/// A registered account
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Public identifier used in queries
    pub public_id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Login email
    pub email: String,
}

impl User {
    /// `first last`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// A user's registration for an event
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRegistration {
    /// Numeric id
    pub id: i64,
    /// Registered event; detail responses leave it out
    #[serde(default)]
    pub event: Option<Event>,
    /// Registered user
    pub user: User,
    /// Chosen tier, when the event has any
    #[serde(default)]
    pub registration_type: Option<RegistrationType>,
}

/// An activity inside an event (workshop, talk)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Numeric id
    #[serde(default)]
    pub id: Option<i64>,
    /// URL-safe unique identifier
    pub slug: String,
    /// Name in Portuguese
    pub name: String,
    /// Name in English, may be empty
    #[serde(default)]
    pub name_english: String,
    /// Start
    pub starts_on: DateTime<Utc>,
    /// End
    pub ends_on: DateTime<Utc>,
}

/// A user's registration for an activity
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRegistration {
    /// Numeric id, used to deregister
    pub id: i64,
    /// Registered activity
    pub activity: Activity,
    /// Registered user
    pub user: User,
}

/// A submission track inside an event
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    /// Numeric id
    pub id: i64,
    /// URL-safe unique identifier
    #[serde(default)]
    pub slug: String,
    /// Name in Portuguese
    pub name: String,
    /// Name in English, may be empty
    #[serde(default)]
    pub name_english: String,
    /// Submissions open
    pub starts_on: DateTime<Utc>,
    /// Submissions close
    pub ends_on: DateTime<Utc>,
}

/// A paper submitted to a track
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    /// Numeric id
    pub id: i64,
    /// Title in Portuguese
    pub title: String,
    /// Title in English, may be empty
    #[serde(default)]
    pub title_english: String,
    /// Co-authors, free text
    #[serde(default)]
    pub other_authors: String,
}

/// A document attached to a submission slot
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionDocument {
    /// Numeric id
    pub id: i64,
    /// Owning submission
    pub submission: i64,
    /// Slot the document fills
    pub slot: i64,
    /// The uploaded file
    #[serde(default)]
    pub document: Option<Document>,
}

/// An uploaded file
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Key used to attach the file to other resources
    pub attachment_key: String,
    /// Download URL
    #[serde(default)]
    pub file: Option<String>,
}

/// A document a track asks submissions for, within a time window
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackSubmissionDocumentSlot {
    /// Numeric id
    pub id: i64,
    /// Name in Portuguese
    pub name: String,
    /// Name in English, may be empty
    #[serde(default)]
    pub name_english: String,
    /// Uploads open
    pub starts_on: DateTime<Utc>,
    /// Uploads close
    pub ends_on: DateTime<Utc>,
}

/// A question reviewers answer for every submission of a track
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackReviewQuestion {
    /// Numeric id
    pub id: i64,
    /// Question text
    pub text: String,
    /// Expected answer kind (`boolean`, `text`, ...)
    pub answer_type: String,
}

// Request payloads

/// Name and time window shared by events, activities, tracks and slots
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Schedule {
    /// Name in Portuguese
    pub name: String,
    /// Name in English
    pub name_english: String,
    /// Start
    pub starts_on: DateTime<Utc>,
    /// End
    pub ends_on: DateTime<Utc>,
}

/// Body of `POST activities/` and `POST tracks/`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewEventItem {
    /// Owning event
    pub event_slug: String,
    /// Names and dates
    #[serde(flatten)]
    pub schedule: Schedule,
}

/// Body of `POST track_submission_document_slots/`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewDocumentSlot {
    /// Owning track
    pub track_slug: String,
    /// Names and dates
    #[serde(flatten)]
    pub schedule: Schedule,
}

/// Body of `POST submissions/`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewSubmission {
    /// Target track id
    pub track: i64,
    /// Title in Portuguese
    pub title: String,
    /// Title in English
    pub title_english: String,
    /// Co-authors, free text
    pub other_authors: String,
}

/// Body of `POST submission_documents/`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewSubmissionDocument {
    /// Submission id
    pub submission: i64,
    /// Slot id
    pub slot: i64,
    /// Attachment key returned by the document upload
    pub document_attachment_key: String,
}

/// Body of `POST users/`
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct NewUser {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Login email
    pub email: String,
    /// Initial password
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `PUT users/current/`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UserUpdate {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

/// Names of a registration type
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RegistrationTypeNames {
    /// Name in Portuguese
    pub name: String,
    /// Name in English
    pub name_english: String,
}

/// Body of `POST event_registration_types/`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewRegistrationType {
    /// Owning event slug
    pub event: String,
    /// Names
    #[serde(flatten)]
    pub names: RegistrationTypeNames,
}

/// Body of `POST track_review_questions/`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewTrackReviewQuestion {
    /// Track id
    pub track: i64,
    /// Question text
    pub text: String,
    /// Expected answer kind
    pub answer_type: String,
}

/// A file to upload as `multipart/form-data`
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name sent in the part header
    pub file_name: String,
    /// MIME type, `application/octet-stream` when unknown
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

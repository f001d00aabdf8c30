//! # eventos API client
//!
//! Typed clients for the eventos backend API, with transport errors
//! normalized into two kinds before they reach callers.
//!
//! ## Example
//!
//! ```no_run
//! use eventos_client::{ApiClient, ReqwestTransport};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new("http://localhost:8000/", Duration::from_secs(30))?;
//!     let api = ApiClient::new(Arc::new(transport));
//!
//!     let event = api.events().get_by_slug("sbc").await?;
//!     println!("{} starts on {}", event.name, event.starts_on);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`ApiError`]:
//! - `Validation`: the backend rejected the input, with messages per field
//! - `Generic`: the backend failed without usable detail
//! - `Transport`: anything else (network failure, 5xx), passed through untouched

pub mod auth;
pub mod client;
pub mod error;
pub mod normalize;
pub mod resources;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use auth::{Authenticator, Credentials, TokenAuthenticator};
pub use client::ApiClient;
pub use error::{ApiError, ErrorKind, FieldErrors, ResponseBody, TransportError};
pub use normalize::{ErrorHook, classify_api_error, normalize};
pub use transport::{ApiRequest, Method, ReqwestTransport, RequestBody, Transport};
pub use types::{
    Activity, ActivityRegistration, Document, Event, EventRegistration, FileUpload,
    LocalizedName, RegistrationType, Schedule, Submission, Track, TrackReviewQuestion,
    TrackSubmissionDocumentSlot, User,
};

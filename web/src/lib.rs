//! HTTP shell for the eventos client.
//!
//! Each request gets its own store: the event is resolved from the host,
//! loaded through the API client, and the caller's bearer token (if any)
//! logs the store in. Handlers only translate between HTTP and actions.
//!
//! ```text
//! request ─▶ correlation id ─▶ bootstrap(store) ─▶ send_and_wait_for ─▶ JSON
//! ```
//!
//! # Example
//!
//! ```no_run
//! use eventos_app::AppConfig;
//! use eventos_web::{WebState, build_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     let app = build_router(WebState::new(config)?);
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use bootstrap::bootstrap;
pub use error::AppError;
pub use extractors::{BearerToken, CorrelationId, EventHost};
pub use handlers::PageContext;
pub use middleware::{CORRELATION_ID_HEADER, correlation_id};
pub use router::build_router;
pub use state::WebState;

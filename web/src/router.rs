//! Route table.

use crate::handlers::{create_registration, health_check, page, root_redirect};
use crate::middleware::correlation_id;
use crate::state::WebState;
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// # Routes
///
/// - `GET /health` - liveness
/// - `GET /` - redirect to the default locale
/// - `GET /:lang` - event page context
/// - `POST /:lang/registration` - register the caller for the event
pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root_redirect))
        .route("/:lang", get(page))
        .route("/:lang/registration", post(create_registration))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(correlation_id)),
        )
        .with_state(state)
}

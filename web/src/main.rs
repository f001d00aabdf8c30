//! eventos web server
//!
//! ```bash
//! EVENTOS_API_BASE_URL=http://localhost:8000/ cargo run --bin eventos-web
//! ```

use eventos_app::AppConfig;
use eventos_web::{WebState, build_router};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,eventos=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let address = config.bind_address();
    tracing::info!(
        api = %config.api.base_url,
        forced_slug = ?config.site.force_event_slug,
        "Configuration loaded"
    );

    let app = build_router(WebState::new(config)?);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}

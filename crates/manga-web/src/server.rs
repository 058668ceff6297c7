//! Application state, routing and the serve loop.

use crate::api::JikanClient;
use crate::routes::{self, PATH_INDEX, PATH_SEARCH};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use shared::Config;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State handed to every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: JikanClient,
}

impl AppState {
    pub fn new(client: JikanClient) -> Self {
        Self { client }
    }

    /// Build the state from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = JikanClient::new(config.catalog.base_url.clone(), config.catalog.timeout())
            .context("Failed to create Jikan client")?;

        Ok(Self::new(client))
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(PATH_INDEX, get(routes::index))
        .route(PATH_SEARCH, get(routes::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `bind` and serve until the process is stopped
pub async fn serve(bind: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind to {}", bind))?;

    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;

    info!(
        addr = %local_addr,
        catalog = %state.client.base_url(),
        "Server listening"
    );

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

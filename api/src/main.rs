//! Portfolio RSS API server
//!
//! Scrapes a design portfolio site's internal node-graph document and
//! republishes project-like content as an RSS 2.0 feed with short-lived
//! in-memory caching. Uses hexagonal (ports & adapters) architecture so the
//! outbound site client and the cache can be swapped in tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{HttpSiteClient, InMemoryFeedCache};
use app::FeedService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<HttpSiteClient, InMemoryFeedCache>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // The feed endpoint: GET/HEAD serve RSS, OPTIONS answers preflight,
        // anything else is 405
        .route(
            "/api/rss",
            get(handlers::get_rss)
                .options(handlers::rss_preflight)
                .fallback(handlers::method_not_allowed),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::HEAD])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_rss_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio RSS API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let site_client = Arc::new(HttpSiteClient::new());
    let cache = Arc::new(InMemoryFeedCache::new());

    // Create the application service
    let feed_service = Arc::new(FeedService::new(
        site_client,
        cache,
        config.site_url.clone(),
        config.deploy_host.clone(),
    ));

    let state = AppState { feed_service };
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}

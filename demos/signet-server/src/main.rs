//! Signet Test Server
//!
//! A local server that verifies signed requests, for exercising the
//! client end-to-end.
//!
//! Usage:
//!   # Default secrets
//!   cargo run --package signet-server
//!
//!   # Custom shared secret for every route
//!   SIGNET_SECRET=s3cret cargo run --package signet-server

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use signet_core::SecretTable;
use signet_http::Verifier;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signet_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secret = std::env::var("SIGNET_SECRET").unwrap_or_else(|_| "demo-secret".to_string());
    tracing::info!("Verifying /v1/echo and /v1/track against the configured secret");

    let verifier = Verifier::new(
        SecretTable::new()
            .with("/v1/echo", secret.clone())
            .with("/v1/track", secret),
    );

    // Build router
    let app = Router::new()
        .route("/v1/echo", post(handlers::echo))
        .route("/v1/track", post(handlers::track))
        .route("/v1/health", get(handlers::health))
        .with_state(verifier)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    tracing::info!("signet server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

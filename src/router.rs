use crate::config::ServerConfig;
use crate::handlers::health::health_check;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router with all routes and middleware.
///
/// Paths without a matching file get the index page, so client-side routes
/// such as `/dashboard/acme/finance/incoming?type=payouts` load the app.
pub fn create_router(config: &ServerConfig) -> Router {
    let static_files = ServeDir::new(&config.static_dir)
        .fallback(ServeFile::new(config.index_path()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
                .layer(CorsLayer::permissive()),
        )
}

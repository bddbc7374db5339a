//! Static preview server for rendered chrome

use std::path::Path;

use axum::{Router, http::StatusCode, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the preview server router.
pub fn create_router(output_dir: &Path) -> Router {
    Router::new()
        .route("/__health", get(health_handler))
        .fallback_service(ServeDir::new(output_dir))
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

//! Router configuration for the board API.

use axum::{extract::OriginalUri, middleware, routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::WebConfig;
use crate::web::error::ApiError;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_thread, list_threads,
    report_reply, report_thread, AppState,
};
use super::middleware::{create_cors_layer, security_headers};

/// Create the board API routes, without state or layers.
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/threads/:board",
            get(list_threads)
                .post(create_thread)
                .put(report_thread)
                .delete(delete_thread),
        )
        .route(
            "/replies/:board",
            get(get_thread)
                .post(create_reply)
                .put(report_reply)
                .delete(delete_reply),
        )
        .fallback(api_not_found)
}

/// Unknown routes under `/api` answer with a JSON error body.
async fn api_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(path = %uri.path(), "Unknown API route");
    ApiError::NotFound(format!("route {}", uri.path()))
}

/// Create the main router: `/api`, `/health`, and the optional static
/// front-end, wrapped in tracing, CORS, compression, and security headers.
pub fn create_router(app_state: Arc<AppState>, web_config: &WebConfig) -> Router {
    let mut router = Router::new()
        .nest("/api", api_routes())
        .with_state(app_state)
        .merge(create_health_router());

    if web_config.serve_static {
        match create_static_router(&web_config.static_path) {
            Some(static_router) => router = router.merge(static_router),
            None => tracing::warn!(
                path = %web_config.static_path,
                "Static path is not a directory; static files disabled"
            ),
        }
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&web_config.cors_origins))
            .layer(CompressionLayer::new())
            .layer(middleware::from_fn(security_headers)),
    )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create a router serving files from `path` as the fallback.
///
/// Returns `None` if `path` is not a directory.
pub fn create_static_router(path: &str) -> Option<Router> {
    if !Path::new(path).is_dir() {
        return None;
    }
    Some(Router::new().fallback_service(ServeDir::new(path)))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
    }

    #[test]
    fn test_create_static_router_missing_dir() {
        assert!(create_static_router("/nonexistent/anonboard/public").is_none());
    }

    #[test]
    fn test_create_static_router_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_static_router(dir.path().to_str().unwrap()).is_some());
    }
}

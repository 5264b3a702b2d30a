//! CORS configuration for the board API.
//!
//! Board front-ends often live on another origin than the API (a static
//! page on a CDN, a local dev server), so preflight requests for the four
//! board verbs must succeed.

use std::time::Duration;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Methods used by the thread and reply routes.
const BOARD_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

fn allowed_origins(origins: &[String]) -> Option<Vec<HeaderValue>> {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    (!parsed.is_empty()).then_some(parsed)
}

/// Create a CORS layer for the configured origins.
///
/// No configured origins (or none that parse) allows any origin.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(BOARD_METHODS)
        .max_age(PREFLIGHT_MAX_AGE);

    match allowed_origins(origins) {
        Some(list) => layer
            .allow_origin(AllowOrigin::list(list))
            .allow_headers([CONTENT_TYPE, ACCEPT]),
        None => layer.allow_origin(Any).allow_headers(Any),
    }
}
